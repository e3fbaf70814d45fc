//! Family Budget - terminal client for the family budget REST API
//!
//! This library provides the pieces behind the `fbudget` binary: a typed
//! client for the backend, a tabbed TUI, plain-text listing commands and the
//! modal dialog layer the TUI uses to ask the user questions.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `api`: REST client and the `BudgetApi` seam
//! - `cli`: Non-interactive command handlers
//! - `config`: Configuration and path management
//! - `dialog`: Dialog store, awaitable requests and the presenter
//! - `display`: Plain-text table formatting
//! - `error`: Custom error types
//! - `logging`: File-backed tracing setup
//! - `models`: Accounts, categories, expenses, incomes and money
//! - `tui`: Terminal user interface
//!
//! # Example
//!
//! ```rust,ignore
//! use family_budget::config::{BudgetPaths, Settings};
//!
//! let paths = BudgetPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod dialog;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod tui;

pub use error::BudgetError;
