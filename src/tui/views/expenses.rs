//! Expenses view
//!
//! The expense list with the per-category totals beside it.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use super::{header_row, render_list};
use crate::models::Money;
use crate::tui::app::{App, Tab};
use crate::tui::layout::ExpensesLayout;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = ExpensesLayout::new(area);
    render_expenses(frame, app, layout.list);
    render_summary(frame, app, layout.summary);
}

fn render_expenses(frame: &mut Frame, app: &App, area: Rect) {
    let widths = [
        Constraint::Length(16), // Date
        Constraint::Length(14), // Amount
        Constraint::Length(14), // Category
        Constraint::Length(12), // Account
        Constraint::Min(10),    // Description
    ];

    let rows: Vec<Row> = app
        .expenses
        .iter()
        .map(|expense| {
            Row::new(vec![
                Cell::from(expense.spent_at.format("%Y-%m-%d %H:%M").to_string()),
                Cell::from(expense.amount.format_with_symbol(&app.currency_symbol))
                    .style(Style::default().fg(Color::Red)),
                Cell::from(expense.category_name().to_string()),
                Cell::from(
                    expense
                        .account
                        .as_ref()
                        .map(|a| a.name.clone())
                        .unwrap_or_default(),
                ),
                Cell::from(expense.description.clone().unwrap_or_default()),
            ])
        })
        .collect();

    render_list(
        frame,
        app,
        area,
        Tab::Expenses,
        header_row(&["Date", "Amount", "Category", "Account", "Description"]),
        rows,
        &widths,
    );
}

fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let mut rows: Vec<Row> = app
        .summary
        .iter()
        .map(|item| {
            Row::new(vec![
                Cell::from(item.label().to_string()),
                Cell::from(item.total.format_with_symbol(&app.currency_symbol)),
            ])
        })
        .collect();

    let total: Money = app.summary.iter().map(|item| item.total).sum();
    rows.push(
        Row::new(vec![
            Cell::from("Total"),
            Cell::from(total.format_with_symbol(&app.currency_symbol)),
        ])
        .style(Style::default().add_modifier(Modifier::BOLD)),
    );

    let table = Table::new(rows, [Constraint::Min(14), Constraint::Length(14)])
        .header(header_row(&["Category", "Spent"]))
        .block(
            Block::default()
                .title(" By category ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(table, area);
}
