//! Configuration module for the family budget client
//!
//! This module provides configuration management including:
//! - platform path resolution
//! - user settings persistence (API location, log threshold)

pub mod paths;
pub mod settings;

pub use paths::BudgetPaths;
pub use settings::{LogLevel, Settings};
