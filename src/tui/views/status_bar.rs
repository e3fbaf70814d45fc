//! Status bar view
//!
//! Shows the active tab, the last status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Tab};

/// Key hints for a tab
pub fn hints(tab: Tab) -> &'static str {
    match tab {
        Tab::Expenses | Tab::Incomes => " n:New  r:Refresh  q:Quit ",
        Tab::Accounts => " n:New  d:Deposit  x:Delete  r:Refresh  q:Quit ",
        Tab::Categories => " n:New  x:Delete  r:Refresh  q:Quit ",
    }
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.active_tab.title()),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if app.loading == Some(app.active_tab) {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled("Loading…", Style::default().fg(Color::DarkGray)));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let hints = hints(app.active_tab);
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
