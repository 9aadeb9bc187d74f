pub mod feed;
pub mod ui;
