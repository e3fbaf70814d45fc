//! Accounts view
//!
//! Account names and backend-maintained balances.

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
        Constraint::Length(8),  // Id
        Constraint::Min(20),    // Name
        Constraint::Length(16), // Balance
    ];

    let rows: Vec<Row> = app
        .accounts
        .iter()
        .map(|account| {
            let balance_style = if account.balance.is_negative() {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };

            Row::new(vec![
                Cell::from(account.id.to_string()),
                Cell::from(account.name.clone()),
                Cell::from(account.balance.format_with_symbol(&app.currency_symbol))
                    .style(balance_style),
            ])
        })
        .collect();

    render_list(
        frame,
        app,
        area,
        Tab::Accounts,
        header_row(&["Id", "Name", "Balance"]),
        rows,
        &widths,
    );
}
