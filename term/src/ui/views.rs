//! View implementations for the different screens in the UI.

pub mod compose;
pub mod feed;
pub mod main;
pub mod rules;
pub mod traits;
