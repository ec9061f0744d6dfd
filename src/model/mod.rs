//! Data model - catalog content, gallery items, and UI state

pub mod catalog;
pub mod modal;
pub mod seed;
pub mod ui;
pub mod video;
