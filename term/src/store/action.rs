//! Action types for state transitions.

use jailfeed_lib::{filter::Filter, item::Draft};

/// Commands that trigger state changes via the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectFilter(Filter),
    NextFilter,
    PreviousFilter,
    CreateItem(Draft),
    DeleteItem(String),
    SaveRulesLink(String),
    ClearToast,
    NextTheme,
}
