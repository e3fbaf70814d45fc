//! Listing commands
//!
//! Fetch one collection from the backend and print it as a plain-text
//! table.

use clap::Subcommand;

use super::runtime;
use crate::api::{ApiClient, BudgetApi};
use crate::config::Settings;
use crate::display::{
    format_account_list, format_category_list, format_expense_list, format_income_list,
    format_summary,
};
use crate::error::BudgetResult;

/// Collections that can be listed
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    /// List expenses
    Expenses {
        /// Show at most this many rows
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Expense totals per category
    Summary,
    /// List incomes
    Incomes {
        /// Show at most this many rows
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// List accounts with balances
    Accounts,
    /// List categories
    Categories,
}

fn take<T>(mut items: Vec<T>, limit: Option<usize>) -> Vec<T> {
    if let Some(limit) = limit {
        items.truncate(limit);
    }
    items
}

/// Fetch and format a listing
pub async fn render_listing(
    api: &dyn BudgetApi,
    listing: Listing,
    symbol: &str,
) -> BudgetResult<String> {
    let output = match listing {
        Listing::Expenses { limit } => {
            format_expense_list(&take(api.list_expenses().await?, limit), symbol)
        }
        Listing::Summary => format_summary(&api.expense_summary().await?, symbol),
        Listing::Incomes { limit } => {
            format_income_list(&take(api.list_incomes().await?, limit), symbol)
        }
        Listing::Accounts => format_account_list(&api.list_accounts().await?, symbol),
        Listing::Categories => format_category_list(&api.list_categories().await?),
    };
    Ok(output)
}

/// Handle a listing command
pub fn handle_list_command(settings: &Settings, listing: Listing) -> BudgetResult<()> {
    let client = ApiClient::from_settings(settings)?;
    tracing::info!(?listing, url = client.base_url(), "listing");

    let output = runtime()?.block_on(render_listing(
        &client,
        listing,
        &settings.currency_symbol,
    ))?;
    print!("{}", output);
    Ok(())
}

/// Check that the backend answers its health endpoint
pub fn handle_health_command(settings: &Settings) -> BudgetResult<()> {
    let client = ApiClient::from_settings(settings)?;
    runtime()?.block_on(client.health())?;
    println!("Backend at {} is healthy", client.base_url());
    Ok(())
}
