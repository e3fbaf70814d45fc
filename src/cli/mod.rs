//! CLI command handlers
//!
//! This module contains the implementation of the non-interactive
//! commands, bridging the clap argument parsing with the API client.

pub mod config;
pub mod list;

pub use config::handle_config_command;
pub use list::{handle_health_command, handle_list_command, Listing};

use crate::error::BudgetResult;

/// Single-threaded runtime for one-shot commands
pub(crate) fn runtime() -> BudgetResult<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
