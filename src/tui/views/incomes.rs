//! Incomes view

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Style},
    widgets::{Cell, Row},
    Frame,
};

use super::{header_row, render_list};
use crate::tui::app::{App, Tab};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let widths = [
        Constraint::Length(16), // Date
        Constraint::Length(14), // Amount
        Constraint::Length(14), // Category
        Constraint::Length(12), // Account
        Constraint::Min(10),    // Description
    ];

    let rows: Vec<Row> = app
        .incomes
        .iter()
        .map(|income| {
            Row::new(vec![
                Cell::from(income.received_at.format("%Y-%m-%d %H:%M").to_string()),
                Cell::from(income.amount.format_with_symbol(&app.currency_symbol))
                    .style(Style::default().fg(Color::Green)),
                Cell::from(income.category_name().to_string()),
                Cell::from(income.account_name().to_string()),
                Cell::from(income.description.clone().unwrap_or_default()),
            ])
        })
        .collect();

    render_list(
        frame,
        app,
        area,
        Tab::Incomes,
        header_row(&["Date", "Amount", "Category", "Account", "Description"]),
        rows,
        &widths,
    );
}
