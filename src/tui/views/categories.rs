//! Categories view

use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Cell, Row},
    Frame,
};

use super::{header_row, render_list};
use crate::tui::app::{App, Tab};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let widths = [
        Constraint::Length(8), // Id
        Constraint::Min(20),   // Name
    ];

    let rows: Vec<Row> = app
        .categories
        .iter()
        .map(|category| {
            Row::new(vec![
                Cell::from(category.id.to_string()),
                Cell::from(category.name.clone()),
            ])
        })
        .collect();

    render_list(
        frame,
        app,
        area,
        Tab::Categories,
        header_row(&["Id", "Name"]),
        rows,
        &widths,
    );
}
