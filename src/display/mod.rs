//! Display formatting for terminal output
//!
//! Plain-text tables printed by the non-interactive commands.

pub mod account;
pub mod category;
pub mod expense;
pub mod income;

pub use account::format_account_list;
pub use category::format_category_list;
pub use expense::{format_expense_list, format_summary};
pub use income::format_income_list;

/// Column alignment in a [`TextTable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A table sized to its widest cell per column
#[derive(Debug, Default)]
pub struct TextTable {
    columns: Vec<(&'static str, Align)>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new(columns: &[(&'static str, Align)]) -> Self {
        Self {
            columns: columns.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, (title, _))| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(title.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn format_line(&self, cells: &[&str], widths: &[usize]) -> String {
        let line = self
            .columns
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, ((_, align), width))| {
                let cell = cells.get(i).copied().unwrap_or("");
                match align {
                    Align::Left => format!("{:<width$}", cell, width = width),
                    Align::Right => format!("{:>width$}", cell, width = width),
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        line.trim_end().to_string()
    }

    /// Render header, separator and rows, one per line
    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut output = String::new();

        let titles: Vec<&str> = self.columns.iter().map(|(title, _)| *title).collect();
        output.push_str(&self.format_line(&titles, &widths));
        output.push('\n');

        let separator = widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  ");
        output.push_str(&separator);
        output.push('\n');

        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            output.push_str(&self.format_line(&cells, &widths));
            output.push('\n');
        }

        output
    }
}

/// Truncate a string to `max_len` characters, marking the cut with `...`
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
