//! Reusable UI components (header, footer, tabs, cards, input, etc.).

pub mod card;
pub mod footer;
pub mod header;
pub mod input;
pub mod popover;
pub mod tabs;
