//! Modal dialog presenter
//!
//! The single UI surface for [`DialogStore`] requests. It keeps a copy of
//! the latest request plus the local state of the text field, draws the
//! dialog over the rest of the screen and turns key presses into
//! completions.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::store::{DialogKind, DialogRequest, DialogResponse, DialogStore, Subscription};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

const DIALOG_WIDTH: u16 = 60;

#[derive(Default)]
struct PresenterView {
    request: DialogRequest,
    input: TextInput,
}

/// Renders the active dialog request and resolves it on user action
///
/// Subscribes on [`mount`](Self::mount) and unsubscribes when dropped.
pub struct DialogPresenter {
    store: DialogStore,
    view: Rc<RefCell<PresenterView>>,
    _subscription: Subscription,
}

impl DialogPresenter {
    /// Attach a presenter to a store
    pub fn mount(store: DialogStore) -> Self {
        let view = Rc::new(RefCell::new(PresenterView::default()));

        let sink = Rc::clone(&view);
        let subscription = store.subscribe(move |state| {
            let mut view = sink.borrow_mut();
            view.input = TextInput::new()
                .content(state.default_value.clone().unwrap_or_default())
                .focused(true);
            view.request = state.clone();
        });

        Self {
            store,
            view,
            _subscription: subscription,
        }
    }

    /// Attach a presenter to the global store
    pub fn mount_global() -> Self {
        Self::mount(DialogStore::global())
    }

    /// Whether a dialog is on screen
    pub fn is_visible(&self) -> bool {
        self.view.borrow().request.visible
    }

    /// Kind of the dialog on screen
    pub fn kind(&self) -> DialogKind {
        self.view.borrow().request.kind
    }

    /// Message of the dialog on screen
    pub fn message(&self) -> String {
        self.view.borrow().request.message.clone()
    }

    /// Current (possibly edited) text of the input field
    pub fn input_value(&self) -> String {
        self.view.borrow().input.value().to_string()
    }

    /// Replace the text of the input field
    pub fn set_input(&self, value: impl Into<String>) {
        let mut view = self.view.borrow_mut();
        view.input = TextInput::new().content(value).focused(true);
    }

    /// Accept the dialog: acknowledge a confirmation or submit the input
    pub fn accept(&self) {
        let response = {
            let view = self.view.borrow();
            match view.request.kind {
                DialogKind::Confirmation => DialogResponse::Acknowledged,
                DialogKind::Input => DialogResponse::Text(view.input.value().to_string()),
            }
        };
        self.resolve(response);
    }

    /// Dismiss the dialog
    pub fn cancel(&self) {
        let response = match self.kind() {
            // An OK-only dialog has nothing to cancel
            DialogKind::Confirmation => DialogResponse::Acknowledged,
            DialogKind::Input => DialogResponse::Cancelled,
        };
        self.resolve(response);
    }

    fn resolve(&self, response: DialogResponse) {
        let completion = {
            let view = self.view.borrow();
            if !view.request.visible {
                return;
            }
            view.request.complete.clone()
        };

        match completion {
            Some(completion) => {
                if !completion.complete(response) {
                    tracing::debug!("dialog already resolved");
                }
            }
            None => tracing::warn!("visible dialog without a completion handle"),
        }
        self.store.reset();
    }

    /// Handle a key press. Returns `true` when the dialog consumed it, which
    /// is every key while a dialog is visible.
    pub fn handle_key(&self, key: KeyEvent) -> bool {
        if !self.is_visible() {
            return false;
        }

        match self.kind() {
            DialogKind::Confirmation => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('o') => self.accept(),
                _ => {}
            },
            DialogKind::Input => match key.code {
                KeyCode::Enter => self.accept(),
                KeyCode::Esc => self.cancel(),
                code => self.edit(code, key.modifiers),
            },
        }
        true
    }

    fn edit(&self, code: KeyCode, modifiers: KeyModifiers) {
        let mut view = self.view.borrow_mut();
        let input = &mut view.input;
        match code {
            KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => input.clear(),
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => input.insert(c),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_start(),
            KeyCode::End => input.move_end(),
            _ => {}
        }
    }

    /// Draw the dialog, if any, over the current frame
    pub fn render(&self, frame: &mut Frame) {
        let view = self.view.borrow();
        if !view.request.visible {
            return;
        }

        let is_input = view.request.kind == DialogKind::Input;
        let text_width = DIALOG_WIDTH.saturating_sub(4).max(1) as usize;
        let message_lines = view
            .request
            .message
            .lines()
            .map(|line| line.chars().count().max(1).div_ceil(text_width))
            .sum::<usize>()
            .max(1) as u16;
        let height = message_lines + if is_input { 7 } else { 5 };

        let area = centered_rect_fixed(DIALOG_WIDTH, height, frame.area());
        frame.render_widget(Clear, area);

        let (title, color) = if is_input {
            (" Input ", Color::Cyan)
        } else {
            (" Confirm ", Color::Yellow)
        };
        let block = Block::default()
            .title(title)
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut constraints = vec![Constraint::Length(1), Constraint::Min(message_lines)];
        if is_input {
            constraints.push(Constraint::Length(1));
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Length(1));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        let message = Paragraph::new(view.request.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false });
        frame.render_widget(message, chunks[1].inner(Margin::new(1, 0)));

        let buttons = if is_input {
            frame.render_widget(
                view.input.clone(),
                chunks[3].inner(Margin::new(1, 0)),
            );
            Line::from(vec![
                Span::styled("[Enter]", Style::default().fg(Color::Green)),
                Span::raw(" OK  "),
                Span::styled("[Esc]", Style::default().fg(Color::Red)),
                Span::raw(" Cancel"),
            ])
        } else {
            Line::from(vec![
                Span::styled("[Enter]", Style::default().fg(Color::Green)),
                Span::raw(" OK"),
            ])
        };

        let last = chunks[chunks.len() - 1];
        frame.render_widget(
            Paragraph::new(buttons).alignment(Alignment::Center),
            last,
        );
    }
}
