//! Account display formatting

use super::{Align, TextTable};
use crate::models::{Account, Money};

/// Format accounts with balances and a total row
pub fn format_account_list(accounts: &[Account], symbol: &str) -> String {
    if accounts.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let mut table = TextTable::new(&[
        ("ID", Align::Right),
        ("Name", Align::Left),
        ("Balance", Align::Right),
    ]);
    for account in accounts {
        table.push_row(vec![
            account.id.to_string(),
            account.name.clone(),
            account.balance.format_with_symbol(symbol),
        ]);
    }

    let total: Money = accounts.iter().map(|a| a.balance).sum();
    let mut output = table.render();
    output.push_str(&format!("\nTotal: {}\n", total.format_with_symbol(symbol)));
    output
}
