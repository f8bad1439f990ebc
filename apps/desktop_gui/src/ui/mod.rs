//! UI layer for the desktop GUI: the eframe app shell and its panels.

pub mod app;

pub use app::{AppPaths, FlexiUiApp};
