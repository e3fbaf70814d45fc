use std::rc::Rc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use family_budget::api::ApiClient;
use family_budget::cli::{
    handle_config_command, handle_health_command, handle_list_command, Listing,
};
use family_budget::config::{BudgetPaths, LogLevel, Settings};
use family_budget::logging::init_logging;

#[derive(Parser)]
#[command(
    name = "fbudget",
    version,
    about = "Terminal client for the family budget service",
    long_about = "fbudget talks to the family budget REST API. Run it without \
                  arguments for the interactive interface, or use one of the \
                  listing commands to print tables."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    #[command(flatten)]
    List(Listing),

    /// Check that the backend is reachable
    Health,

    /// Show or change configuration
    Config {
        /// Base URL of the budget API
        #[arg(long)]
        api_url: Option<String>,
        /// Log level (debug, info, warn, error)
        #[arg(long)]
        log_level: Option<LogLevel>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    // Keep going without a log file rather than refusing to start
    if let Err(e) = init_logging(&paths, settings.log_level) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    match cli.command {
        None | Some(Commands::Tui) => {
            let client = ApiClient::from_settings(&settings)?;
            tracing::info!(url = client.base_url(), "launching TUI");
            family_budget::tui::run_tui(&settings, Rc::new(client))?;
        }
        Some(Commands::List(listing)) => {
            handle_list_command(&settings, listing)?;
        }
        Some(Commands::Health) => {
            handle_health_command(&settings)?;
        }
        Some(Commands::Config { api_url, log_level }) => {
            let output = handle_config_command(&paths, &mut settings, api_url, log_level)?;
            print!("{}", output);
        }
    }

    Ok(())
}
