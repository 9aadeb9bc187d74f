//! Library package for managing a game-server community feed
//!
//! The feed holds "news", "update", and custom-labeled announcement items,
//! newest first, along with a link to the server rules. Mutations require an
//! [`AdminCapability`](store::AdminCapability) and report their outcome through
//! an injected [`Notifier`](notify::Notifier).
//!
//! # Examples
//!
//! ## Feed Store
//!
//! <https://github.com/jail-community/jail-feed/blob/main/lib/examples/feed-store.rs>
//!
//! ```bash
//! cargo run --example feed-store -p jailfeed-lib
//! ```

#![deny(missing_docs)]
pub mod clock;
pub mod config;
pub mod error;
pub mod filter;
pub mod id;
pub mod item;
pub mod notify;
pub mod store;
