//! Terminal User Interface module
//!
//! A tabbed ratatui front end over the budget API. Every question the UI
//! asks the user goes through the dialog store and is drawn by the single
//! dialog presenter mounted in the main loop.

pub mod actions;
pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::{App, AppMessage, Tab};
pub use terminal::run_tui;
