//! Income display formatting

use super::{truncate, Align, TextTable};
use crate::models::Income;

const DESCRIPTION_WIDTH: usize = 30;

pub fn format_income_list(incomes: &[Income], symbol: &str) -> String {
    if incomes.is_empty() {
        return "No incomes found.\n".to_string();
    }

    let mut table = TextTable::new(&[
        ("Date", Align::Left),
        ("Amount", Align::Right),
        ("Category", Align::Left),
        ("Account", Align::Left),
        ("Description", Align::Left),
    ]);
    for income in incomes {
        table.push_row(vec![
            income.received_at.format("%Y-%m-%d").to_string(),
            income.amount.format_with_symbol(symbol),
            income.category_name().to_string(),
            income.account_name().to_string(),
            truncate(income.description.as_deref().unwrap_or(""), DESCRIPTION_WIDTH),
        ]);
    }
    table.render()
}
