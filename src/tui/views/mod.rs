//! TUI Views module
//!
//! One view per tab, plus the tab bar and status bar. The dialog presenter
//! is drawn last so it sits on top of everything else.

pub mod accounts;
pub mod categories;
pub mod expenses;
pub mod incomes;
pub mod status_bar;
pub mod tabs;

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use super::app::{App, Tab};
use super::layout::AppLayout;
use crate::dialog::DialogPresenter;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App, presenter: &DialogPresenter) {
    let layout = AppLayout::new(frame.area());

    tabs::render(frame, app, layout.tabs);

    match app.active_tab {
        Tab::Expenses => expenses::render(frame, app, layout.main),
        Tab::Incomes => incomes::render(frame, app, layout.main),
        Tab::Accounts => accounts::render(frame, app, layout.main),
        Tab::Categories => categories::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    presenter.render(frame);
}

/// Bold yellow header row
pub(crate) fn header_row<'a>(titles: &[&'a str]) -> Row<'a> {
    Row::new(
        titles
            .iter()
            .map(|title| Cell::from(*title).style(Style::default().add_modifier(Modifier::BOLD)))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().fg(Color::Yellow))
    .height(1)
}

/// Render a tab's selectable table, or a placeholder when it has no rows
pub(crate) fn render_list(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    tab: Tab,
    header: Row,
    rows: Vec<Row>,
    widths: &[Constraint],
) {
    let block = Block::default()
        .title(format!(" {} ", tab.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if rows.is_empty() {
        let text = if app.loading == Some(tab) {
            "Loading…".to_string()
        } else {
            format!("No {}", tab.title().to_lowercase())
        };
        let placeholder = Paragraph::new(text)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(placeholder, area);
        return;
    }

    let table = Table::new(rows, widths.iter().copied())
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected[tab.index()]));

    frame.render_stateful_widget(table, area, &mut state);
}
