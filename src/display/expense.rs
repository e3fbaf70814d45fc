//! Expense and summary display formatting

use super::{truncate, Align, TextTable};
use crate::models::{Expense, Money, SummaryItem};

const DESCRIPTION_WIDTH: usize = 30;

/// Format expenses, newest first as the backend returns them
pub fn format_expense_list(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut table = TextTable::new(&[
        ("Date", Align::Left),
        ("Amount", Align::Right),
        ("Category", Align::Left),
        ("Account", Align::Left),
        ("Description", Align::Left),
    ]);
    for expense in expenses {
        table.push_row(vec![
            expense.spent_at.format("%Y-%m-%d").to_string(),
            expense.amount.format_with_symbol(symbol),
            expense.category_name().to_string(),
            expense
                .account
                .as_ref()
                .map(|a| a.name.clone())
                .unwrap_or_default(),
            truncate(
                expense.description.as_deref().unwrap_or(""),
                DESCRIPTION_WIDTH,
            ),
        ]);
    }
    table.render()
}

/// Format per-category totals with a grand total
pub fn format_summary(items: &[SummaryItem], symbol: &str) -> String {
    if items.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut table = TextTable::new(&[("Category", Align::Left), ("Total", Align::Right)]);
    for item in items {
        table.push_row(vec![
            item.label().to_string(),
            item.total.format_with_symbol(symbol),
        ]);
    }

    let total: Money = items.iter().map(|item| item.total).sum();
    let mut output = table.render();
    output.push_str(&format!("\nTotal: {}\n", total.format_with_symbol(symbol)));
    output
}
