//! Identifier generation for newly created items

use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(test)]
use mockall::automock;

/// Produces identifiers for new items
#[cfg_attr(test, automock)]
pub trait IdGenerator {
    /// Returns a new identifier, distinct from every one returned before
    fn next_id(&mut self) -> String;
}

/// Millisecond timestamp ids that never repeat: when two ids are requested
/// within the same millisecond the counter moves past the clock.
#[derive(Debug, Default, Clone)]
pub struct CounterIdGenerator {
    last: u64,
}

impl CounterIdGenerator {
    /// Returns a generator whose ids are all greater than `last`
    pub fn starting_after(last: u64) -> Self {
        Self { last }
    }

    fn now_millis() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or_default()
    }
}

impl IdGenerator for CounterIdGenerator {
    fn next_id(&mut self) -> String {
        self.last = Self::now_millis().max(self.last.saturating_add(1));
        self.last.to_string()
    }
}

#[cfg(test)]
#[path = "./id_tests.rs"]
mod tests;
