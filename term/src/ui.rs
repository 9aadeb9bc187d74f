//! Terminal UI components, views, and the application loop.

pub mod app;
pub mod colors;
pub mod components;
pub mod views;
