//! Terminal setup, teardown and the main loop
//!
//! The UI runs on one thread: a current-thread tokio runtime drives a
//! `LocalSet` so workflows can hold `Rc` handles to the dialog store and
//! the API client.

use std::io::{self, Stdout};
use std::panic;
use std::rc::Rc;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio::task::LocalSet;

use super::actions::{Action, Workflows};
use super::app::{App, AppMessage};
use super::event::{Event, EventHandler};
use super::handler::handle_key;
use crate::api::BudgetApi;
use crate::config::Settings;
use crate::dialog::{DialogPresenter, DialogStore};

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Restore the terminal before the panic message is printed
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application until the user quits
pub fn run_tui(settings: &Settings, api: Rc<dyn BudgetApi>) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let local = LocalSet::new();

    let mut terminal = init_terminal()?;
    tracing::info!("TUI started");

    let result = local.block_on(&runtime, event_loop(&mut terminal, settings, api));

    restore_terminal()?;
    tracing::info!("TUI stopped");
    result
}

async fn event_loop(terminal: &mut Tui, settings: &Settings, api: Rc<dyn BudgetApi>) -> Result<()> {
    let store = DialogStore::global();
    let presenter = DialogPresenter::mount(store.clone());

    let (tx, mut messages) = mpsc::unbounded_channel();

    // Wake the loop whenever a workflow publishes or clears a dialog
    let redraw = tx.clone();
    let _redraw_subscription = store.subscribe(move |_| {
        let _ = redraw.send(AppMessage::Redraw);
    });

    let workflows = Workflows::new(api, store, tx);
    let mut app = App::new(settings.currency_symbol.clone());
    let mut events = EventHandler::default();

    app.loading = Some(app.active_tab);
    workflows.spawn(Action::Load(app.active_tab));

    loop {
        terminal.draw(|frame| super::views::render(frame, &app, &presenter))?;

        tokio::select! {
            event = events.next() => match event {
                Some(Event::Key(key)) => {
                    if let Some(action) = handle_key(&mut app, &presenter, key) {
                        workflows.spawn(action);
                    }
                }
                // Resize redraws on the next iteration
                Some(Event::Resize(_, _)) | Some(Event::Tick) => {}
                None => {
                    tracing::warn!("terminal event source closed");
                    break;
                }
            },
            Some(message) = messages.recv() => {
                if let Some(tab) = app.apply(message) {
                    if tab == app.active_tab {
                        app.loading = Some(tab);
                        workflows.spawn(Action::Load(tab));
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
