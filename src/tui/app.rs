//! Application state for the TUI
//!
//! The App struct holds everything needed for rendering. Data arrives from
//! background tasks as [`AppMessage`]s and is applied on the UI loop.

use crate::models::{Account, Category, Expense, Income, SummaryItem};

/// Which tab is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Expenses,
    Incomes,
    Accounts,
    Categories,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Expenses, Tab::Incomes, Tab::Accounts, Tab::Categories];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Expenses => "Expenses",
            Tab::Incomes => "Incomes",
            Tab::Accounts => "Accounts",
            Tab::Categories => "Categories",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|tab| tab == self).unwrap_or(0)
    }

    /// Tab for a 1-based number key
    pub fn from_number(n: u32) -> Option<Self> {
        (n as usize)
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Results delivered to the UI loop by background tasks
#[derive(Debug, Clone)]
pub enum AppMessage {
    ExpensesLoaded {
        expenses: Vec<Expense>,
        summary: Vec<SummaryItem>,
    },
    IncomesLoaded(Vec<Income>),
    AccountsLoaded(Vec<Account>),
    CategoriesLoaded(Vec<Category>),
    /// Loading a tab failed
    LoadFailed { tab: Tab, error: String },
    /// Show a message in the status bar
    Status(String),
    /// Reload a tab after a change
    Reload(Tab),
    /// Dialog state changed; draw again
    Redraw,
}

/// Main application state
#[derive(Debug, Default)]
pub struct App {
    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active tab
    pub active_tab: Tab,

    pub expenses: Vec<Expense>,
    pub summary: Vec<SummaryItem>,
    pub incomes: Vec<Income>,
    pub accounts: Vec<Account>,
    pub categories: Vec<Category>,

    /// Selected row per tab, indexed by [`Tab::index`]
    pub selected: [usize; 4],

    /// Tab currently being fetched
    pub loading: Option<Tab>,

    /// Status message to display
    pub status_message: Option<String>,

    /// Currency symbol used when formatting amounts
    pub currency_symbol: String,
}

impl App {
    /// Create a new App instance
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            ..Self::default()
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a tab. Returns `true` if the tab changed.
    pub fn switch_tab(&mut self, tab: Tab) -> bool {
        if self.active_tab == tab {
            return false;
        }
        self.active_tab = tab;
        true
    }

    /// Number of rows in a tab's list
    pub fn row_count(&self, tab: Tab) -> usize {
        match tab {
            Tab::Expenses => self.expenses.len(),
            Tab::Incomes => self.incomes.len(),
            Tab::Accounts => self.accounts.len(),
            Tab::Categories => self.categories.len(),
        }
    }

    /// Selected row of the active tab
    pub fn selected_index(&self) -> usize {
        self.selected[self.active_tab.index()]
    }

    /// Move selection up in the current tab
    pub fn move_up(&mut self) {
        let slot = &mut self.selected[self.active_tab.index()];
        *slot = slot.saturating_sub(1);
    }

    /// Move selection down in the current tab
    pub fn move_down(&mut self) {
        let max = self.row_count(self.active_tab);
        let slot = &mut self.selected[self.active_tab.index()];
        if *slot < max.saturating_sub(1) {
            *slot += 1;
        }
    }

    pub fn selected_account(&self) -> Option<&Account> {
        self.accounts.get(self.selected[Tab::Accounts.index()])
    }

    pub fn selected_category(&self) -> Option<&Category> {
        self.categories.get(self.selected[Tab::Categories.index()])
    }

    fn clamp_selection(&mut self, tab: Tab) {
        let max = self.row_count(tab).saturating_sub(1);
        let slot = &mut self.selected[tab.index()];
        *slot = (*slot).min(max);
    }

    /// Apply a message from a background task. Returns a tab to reload, if any.
    pub fn apply(&mut self, message: AppMessage) -> Option<Tab> {
        match message {
            AppMessage::ExpensesLoaded { expenses, summary } => {
                self.expenses = expenses;
                self.summary = summary;
                self.finish_loading(Tab::Expenses);
            }
            AppMessage::IncomesLoaded(incomes) => {
                self.incomes = incomes;
                self.finish_loading(Tab::Incomes);
            }
            AppMessage::AccountsLoaded(accounts) => {
                self.accounts = accounts;
                self.finish_loading(Tab::Accounts);
            }
            AppMessage::CategoriesLoaded(categories) => {
                self.categories = categories;
                self.finish_loading(Tab::Categories);
            }
            AppMessage::LoadFailed { tab, error } => {
                if self.loading == Some(tab) {
                    self.loading = None;
                }
                self.set_status(format!("Failed to load {}: {}", tab.title(), error));
            }
            AppMessage::Status(message) => self.set_status(message),
            AppMessage::Reload(tab) => return Some(tab),
            AppMessage::Redraw => {}
        }
        None
    }

    fn finish_loading(&mut self, tab: Tab) {
        self.clamp_selection(tab);
        if self.loading == Some(tab) {
            self.loading = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountId, Money};

    fn account(id: i64, name: &str) -> Account {
        Account {
            id: AccountId::from(id),
            name: name.to_string(),
            balance: Money::zero(),
        }
    }

    #[test]
    fn test_tab_cycle() {
        assert_eq!(Tab::default(), Tab::Expenses);
        assert_eq!(Tab::Expenses.next(), Tab::Incomes);
        assert_eq!(Tab::Categories.next(), Tab::Expenses);
        assert_eq!(Tab::Expenses.prev(), Tab::Categories);
        assert_eq!(Tab::from_number(3), Some(Tab::Accounts));
        assert_eq!(Tab::from_number(0), None);
        assert_eq!(Tab::from_number(5), None);
    }

    #[test]
    fn test_selection_bounds() {
        let mut app = App::new("₽");
        app.switch_tab(Tab::Accounts);
        app.apply(AppMessage::AccountsLoaded(vec![
            account(1, "Cash"),
            account(2, "Card"),
        ]));

        app.move_down();
        app.move_down();
        assert_eq!(app.selected_index(), 1);
        assert_eq!(app.selected_account().unwrap().name, "Card");

        app.move_up();
        app.move_up();
        assert_eq!(app.selected_index(), 0);
    }

    #[test]
    fn test_reload_clamps_selection() {
        let mut app = App::new("₽");
        app.switch_tab(Tab::Accounts);
        app.apply(AppMessage::AccountsLoaded(vec![
            account(1, "Cash"),
            account(2, "Card"),
        ]));
        app.move_down();

        app.apply(AppMessage::AccountsLoaded(vec![account(1, "Cash")]));
        assert_eq!(app.selected_index(), 0);
    }

    #[test]
    fn test_apply_messages() {
        let mut app = App::new("₽");
        app.loading = Some(Tab::Incomes);

        assert_eq!(app.apply(AppMessage::Reload(Tab::Incomes)), Some(Tab::Incomes));

        app.apply(AppMessage::LoadFailed {
            tab: Tab::Incomes,
            error: "connection refused".into(),
        });
        assert!(app.loading.is_none());
        assert_eq!(
            app.status_message.as_deref(),
            Some("Failed to load Incomes: connection refused")
        );

        assert!(!app.switch_tab(Tab::Expenses));
        assert!(app.switch_tab(Tab::Categories));
    }
}
