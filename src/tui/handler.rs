//! Event handler for the TUI
//!
//! Routes key presses: the dialog presenter sees them first, then the
//! global keys, then the active tab.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::Action;
use super::app::{App, Tab};
use crate::dialog::DialogPresenter;

/// Translate a key press into state changes and, possibly, an action to run
pub fn handle_key(app: &mut App, presenter: &DialogPresenter, key: KeyEvent) -> Option<Action> {
    // An open dialog swallows every key
    if presenter.handle_key(key) {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            None
        }
        KeyCode::Char(c @ '1'..='4') => {
            let tab = c.to_digit(10).and_then(Tab::from_number)?;
            switch_tab(app, tab)
        }
        KeyCode::Tab => {
            let tab = app.active_tab.next();
            switch_tab(app, tab)
        }
        KeyCode::BackTab => {
            let tab = app.active_tab.prev();
            switch_tab(app, tab)
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down();
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
            None
        }
        KeyCode::Char('r') => {
            let tab = app.active_tab;
            app.set_status(format!("Refreshing {}", tab.title()));
            Some(load(app, tab))
        }
        _ => handle_tab_key(app, key),
    }
}

fn switch_tab(app: &mut App, tab: Tab) -> Option<Action> {
    app.switch_tab(tab);
    app.clear_status();
    Some(load(app, tab))
}

fn load(app: &mut App, tab: Tab) -> Action {
    app.loading = Some(tab);
    Action::Load(tab)
}

fn handle_tab_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    match (app.active_tab, key.code) {
        (Tab::Expenses, KeyCode::Char('n')) => Some(Action::AddExpense),
        (Tab::Incomes, KeyCode::Char('n')) => Some(Action::AddIncome),
        (Tab::Accounts, KeyCode::Char('n')) => Some(Action::AddAccount),
        (Tab::Accounts, KeyCode::Char('d')) => match app.selected_account() {
            Some(account) => Some(Action::Deposit(account.clone())),
            None => {
                app.set_status("No account selected");
                None
            }
        },
        (Tab::Accounts, KeyCode::Char('x')) => match app.selected_account() {
            Some(account) => Some(Action::DeleteAccount(account.clone())),
            None => {
                app.set_status("No account selected");
                None
            }
        },
        (Tab::Categories, KeyCode::Char('n')) => Some(Action::AddCategory),
        (Tab::Categories, KeyCode::Char('x')) => match app.selected_category() {
            Some(category) => Some(Action::DeleteCategory(category.clone())),
            None => {
                app.set_status("No category selected");
                None
            }
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::DialogStore;
    use crate::models::{Account, AccountId, Money};
    use crate::tui::app::AppMessage;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn setup() -> (App, DialogStore, DialogPresenter) {
        let store = DialogStore::new();
        let presenter = DialogPresenter::mount(store.clone());
        (App::new("₽"), store, presenter)
    }

    #[test]
    fn test_tab_switch_reloads() {
        let (mut app, _store, presenter) = setup();

        let action = handle_key(&mut app, &presenter, key(KeyCode::Char('3')));
        assert!(matches!(action, Some(Action::Load(Tab::Accounts))));
        assert_eq!(app.active_tab, Tab::Accounts);
        assert_eq!(app.loading, Some(Tab::Accounts));

        let action = handle_key(&mut app, &presenter, key(KeyCode::BackTab));
        assert!(matches!(action, Some(Action::Load(Tab::Incomes))));
    }

    #[test]
    fn test_quit() {
        let (mut app, _store, presenter) = setup();
        assert!(handle_key(&mut app, &presenter, key(KeyCode::Char('q'))).is_none());
        assert!(app.should_quit);
    }

    #[test]
    fn test_dialog_swallows_keys() {
        let (mut app, store, presenter) = setup();
        let _pending = store.request_input("Amount", "");

        assert!(handle_key(&mut app, &presenter, key(KeyCode::Char('q'))).is_none());
        assert!(!app.should_quit);
        assert_eq!(presenter.input_value(), "q");
    }

    #[test]
    fn test_account_actions_need_selection() {
        let (mut app, _store, presenter) = setup();
        app.switch_tab(Tab::Accounts);

        assert!(handle_key(&mut app, &presenter, key(KeyCode::Char('d'))).is_none());
        assert_eq!(app.status_message.as_deref(), Some("No account selected"));

        app.apply(AppMessage::AccountsLoaded(vec![Account {
            id: AccountId::from(1),
            name: "Cash".into(),
            balance: Money::zero(),
        }]));
        let action = handle_key(&mut app, &presenter, key(KeyCode::Char('x')));
        assert!(matches!(action, Some(Action::DeleteAccount(a)) if a.name == "Cash"));
    }

    #[test]
    fn test_new_depends_on_tab() {
        let (mut app, _store, presenter) = setup();
        assert!(matches!(
            handle_key(&mut app, &presenter, key(KeyCode::Char('n'))),
            Some(Action::AddExpense)
        ));
        assert!(handle_key(&mut app, &presenter, key(KeyCode::Char('d'))).is_none());
    }
}
