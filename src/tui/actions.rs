//! Interactive workflows
//!
//! Each workflow runs as a local task on the UI thread and talks to the
//! user only through the dialog store: it awaits `request_input` for every
//! value it needs and reports failures with `request_confirmation`. A
//! cancelled prompt ends the workflow before anything is sent to the
//! backend. Results reach the event loop as [`AppMessage`]s.

use std::rc::Rc;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use super::app::{AppMessage, Tab};
use crate::api::BudgetApi;
use crate::dialog::DialogStore;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{
    find_account, find_category, Account, AccountId, Category, CategoryId, Money, NewAccount,
    NewCategory, NewExpense, NewIncome,
};

/// Something the user asked for from a tab
#[derive(Debug, Clone)]
pub enum Action {
    Load(Tab),
    AddExpense,
    AddIncome,
    AddAccount,
    Deposit(Account),
    DeleteAccount(Account),
    AddCategory,
    DeleteCategory(Category),
}

impl Action {
    /// Tab whose data changes when the action succeeds
    fn affected_tab(&self) -> Tab {
        match self {
            Action::Load(tab) => *tab,
            Action::AddExpense => Tab::Expenses,
            Action::AddIncome => Tab::Incomes,
            Action::AddAccount | Action::Deposit(_) | Action::DeleteAccount(_) => Tab::Accounts,
            Action::AddCategory | Action::DeleteCategory(_) => Tab::Categories,
        }
    }
}

/// Runs [`Action`]s against the backend
#[derive(Clone)]
pub struct Workflows {
    api: Rc<dyn BudgetApi>,
    dialogs: DialogStore,
    messages: UnboundedSender<AppMessage>,
}

impl Workflows {
    pub fn new(
        api: Rc<dyn BudgetApi>,
        dialogs: DialogStore,
        messages: UnboundedSender<AppMessage>,
    ) -> Self {
        Self {
            api,
            dialogs,
            messages,
        }
    }

    /// Start an action as a local task. Must be called inside a `LocalSet`.
    pub fn spawn(&self, action: Action) -> JoinHandle<()> {
        tokio::task::spawn_local(self.clone().perform(action))
    }

    /// Run an action to completion
    pub async fn perform(self, action: Action) {
        tracing::debug!(?action, "starting workflow");
        let tab = action.affected_tab();

        let result = match action {
            Action::Load(tab) => {
                self.load(tab).await;
                return;
            }
            Action::AddExpense => self.add_expense().await,
            Action::AddIncome => self.add_income().await,
            Action::AddAccount => self.add_account().await,
            Action::Deposit(account) => self.deposit(&account).await,
            Action::DeleteAccount(account) => self.delete_account(&account).await,
            Action::AddCategory => self.add_category().await,
            Action::DeleteCategory(category) => self.delete_category(&category).await,
        };

        self.finish(tab, result).await;
    }

    fn send(&self, message: AppMessage) {
        if self.messages.send(message).is_err() {
            tracing::debug!("UI loop has stopped; dropping message");
        }
    }

    async fn finish(&self, tab: Tab, result: BudgetResult<Option<String>>) {
        match result {
            Ok(Some(status)) => {
                tracing::info!(%status, "workflow completed");
                self.send(AppMessage::Status(status));
                self.send(AppMessage::Reload(tab));
            }
            Ok(None) => tracing::debug!("workflow cancelled"),
            Err(e) => {
                tracing::warn!(error = %e, "workflow failed");
                self.send(AppMessage::Status(format!("Error: {}", e)));
                self.dialogs.request_confirmation(e.to_string()).await;
            }
        }
    }

    async fn load(&self, tab: Tab) {
        let api = &self.api;
        let result = match tab {
            Tab::Expenses => futures::try_join!(api.list_expenses(), api.expense_summary())
                .map(|(expenses, summary)| AppMessage::ExpensesLoaded { expenses, summary }),
            Tab::Incomes => api.list_incomes().await.map(AppMessage::IncomesLoaded),
            Tab::Accounts => api.list_accounts().await.map(AppMessage::AccountsLoaded),
            Tab::Categories => api.list_categories().await.map(AppMessage::CategoriesLoaded),
        };

        match result {
            Ok(message) => self.send(message),
            Err(e) => {
                tracing::warn!(tab = tab.title(), error = %e, "failed to load tab");
                self.send(AppMessage::LoadFailed {
                    tab,
                    error: e.to_string(),
                });
            }
        }
    }

    /// Ask for a positive amount. `Ok(None)` when cancelled.
    async fn prompt_amount(&self, message: String) -> BudgetResult<Option<Money>> {
        let Some(text) = self.dialogs.request_input(message, "").await else {
            return Ok(None);
        };
        let amount = Money::parse(&text).map_err(|e| BudgetError::Validation(e.to_string()))?;
        if !amount.is_positive() {
            return Err(BudgetError::Validation(format!(
                "Amount must be greater than zero: '{}'",
                text.trim()
            )));
        }
        Ok(Some(amount))
    }

    /// Ask for optional free text. `None` when cancelled.
    async fn prompt_description(&self) -> Option<Option<String>> {
        let text = self
            .dialogs
            .request_input("Description (optional)", "")
            .await?;
        let text = text.trim();
        Some((!text.is_empty()).then(|| text.to_string()))
    }

    /// Ask for a category by name. The outer `None` means cancelled, the
    /// inner one that the user left it blank.
    async fn prompt_category(&self) -> BudgetResult<Option<Option<CategoryId>>> {
        let Some(name) = self
            .dialogs
            .request_input("Category (blank for none)", "")
            .await
        else {
            return Ok(None);
        };
        let name = name.trim();
        if name.is_empty() {
            return Ok(Some(None));
        }

        let categories = self.api.list_categories().await?;
        let category =
            find_category(&categories, name).ok_or_else(|| BudgetError::category_not_found(name))?;
        Ok(Some(Some(category.id.clone())))
    }

    /// Ask for an account by name, same shape as [`Self::prompt_category`]
    async fn prompt_account(&self) -> BudgetResult<Option<Option<AccountId>>> {
        let Some(name) = self
            .dialogs
            .request_input("Account (blank for none)", "")
            .await
        else {
            return Ok(None);
        };
        let name = name.trim();
        if name.is_empty() {
            return Ok(Some(None));
        }

        let accounts = self.api.list_accounts().await?;
        let account =
            find_account(&accounts, name).ok_or_else(|| BudgetError::account_not_found(name))?;
        Ok(Some(Some(account.id.clone())))
    }

    /// Ask the user to retype `name`. `false` if they cancelled or typed
    /// something else.
    async fn confirm_by_name(&self, entity: &str, name: &str) -> bool {
        let Some(typed) = self
            .dialogs
            .request_input(
                format!("Delete {} \"{}\"? Type its name to confirm", entity, name),
                name,
            )
            .await
        else {
            return false;
        };

        if typed.trim() != name {
            self.dialogs
                .request_confirmation(format!("Name did not match; {} was not deleted", entity))
                .await;
            return false;
        }
        true
    }

    async fn add_expense(&self) -> BudgetResult<Option<String>> {
        let Some(amount) = self.prompt_amount("Expense amount".into()).await? else {
            return Ok(None);
        };
        let Some(description) = self.prompt_description().await else {
            return Ok(None);
        };
        let Some(category_id) = self.prompt_category().await? else {
            return Ok(None);
        };
        let Some(account_id) = self.prompt_account().await? else {
            return Ok(None);
        };

        let created = self
            .api
            .create_expense(&NewExpense {
                amount,
                description,
                category_id,
                account_id,
            })
            .await?;
        Ok(Some(format!("Expense of {} added", created.amount)))
    }

    async fn add_income(&self) -> BudgetResult<Option<String>> {
        let Some(amount) = self.prompt_amount("Income amount".into()).await? else {
            return Ok(None);
        };
        let Some(description) = self.prompt_description().await else {
            return Ok(None);
        };
        let Some(category_id) = self.prompt_category().await? else {
            return Ok(None);
        };
        let Some(account_id) = self.prompt_account().await? else {
            return Ok(None);
        };

        let created = self
            .api
            .create_income(&NewIncome {
                amount,
                description,
                category_id,
                account_id,
            })
            .await?;
        Ok(Some(format!("Income of {} added", created.amount)))
    }

    async fn add_account(&self) -> BudgetResult<Option<String>> {
        let Some(name) = self.dialogs.request_input("Account name", "").await else {
            return Ok(None);
        };
        if name.trim().is_empty() {
            return Err(BudgetError::Validation(
                "Account name cannot be empty".into(),
            ));
        }

        let Some(balance) = self.dialogs.request_input("Opening balance", "0").await else {
            return Ok(None);
        };
        let balance =
            Money::parse(&balance).map_err(|e| BudgetError::Validation(e.to_string()))?;

        let created = self
            .api
            .create_account(&NewAccount::new(name, balance))
            .await?;
        Ok(Some(format!("Account \"{}\" created", created.name)))
    }

    async fn deposit(&self, account: &Account) -> BudgetResult<Option<String>> {
        let Some(amount) = self
            .prompt_amount(format!("Deposit amount for \"{}\"", account.name))
            .await?
        else {
            return Ok(None);
        };

        self.api
            .create_income(&NewIncome::deposit(account.id.clone(), amount))
            .await?;
        Ok(Some(format!("Deposited {} to \"{}\"", amount, account.name)))
    }

    async fn delete_account(&self, account: &Account) -> BudgetResult<Option<String>> {
        if !self.confirm_by_name("account", &account.name).await {
            return Ok(None);
        }
        self.api.delete_account(&account.id).await?;
        Ok(Some(format!("Account \"{}\" deleted", account.name)))
    }

    async fn add_category(&self) -> BudgetResult<Option<String>> {
        let Some(name) = self.dialogs.request_input("Category name", "").await else {
            return Ok(None);
        };
        if name.trim().is_empty() {
            return Err(BudgetError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        let created = self.api.create_category(&NewCategory::new(name)).await?;
        Ok(Some(format!("Category \"{}\" created", created.name)))
    }

    async fn delete_category(&self, category: &Category) -> BudgetResult<Option<String>> {
        if !self.confirm_by_name("category", &category.name).await {
            return Ok(None);
        }
        self.api.delete_category(&category.id).await?;
        Ok(Some(format!("Category \"{}\" deleted", category.name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::{self, UnboundedReceiver};
    use tokio::task::LocalSet;

    use crate::api::fake::FakeApi;
    use crate::dialog::{DialogKind, DialogPresenter, DialogRequest};

    struct Harness {
        api: Rc<FakeApi>,
        store: DialogStore,
        presenter: DialogPresenter,
        workflows: Workflows,
        messages: UnboundedReceiver<AppMessage>,
    }

    impl Harness {
        fn new(api: FakeApi) -> Self {
            let api = Rc::new(api);
            let store = DialogStore::new();
            let presenter = DialogPresenter::mount(store.clone());
            let (tx, messages) = mpsc::unbounded_channel();
            let workflows = Workflows::new(api.clone(), store.clone(), tx);
            Self {
                api,
                store,
                presenter,
                workflows,
                messages,
            }
        }

        /// Wait for the workflow to put up its next dialog
        async fn next_dialog(&self) -> DialogRequest {
            for _ in 0..100 {
                let current = self.store.current();
                if current.is_pending() {
                    return current;
                }
                tokio::task::yield_now().await;
            }
            panic!("workflow never showed a dialog");
        }

        async fn answer(&self, value: &str) -> DialogRequest {
            let request = self.next_dialog().await;
            assert_eq!(request.kind, DialogKind::Input, "{}", request.message);
            self.presenter.set_input(value);
            self.presenter.accept();
            request
        }

        async fn cancel(&self) {
            self.next_dialog().await;
            self.presenter.cancel();
        }

        async fn acknowledge(&self) -> String {
            let request = self.next_dialog().await;
            assert_eq!(request.kind, DialogKind::Confirmation);
            self.presenter.accept();
            request.message
        }

        fn drain(&mut self) -> Vec<AppMessage> {
            let mut out = Vec::new();
            while let Ok(message) = self.messages.try_recv() {
                out.push(message);
            }
            out
        }
    }

    #[tokio::test]
    async fn test_add_expense_posts_payload() {
        LocalSet::new()
            .run_until(async {
                let mut h = Harness::new(FakeApi::with_data());
                let task = h.workflows.spawn(Action::AddExpense);

                let first = h.answer("250,50").await;
                assert_eq!(first.message, "Expense amount");
                h.answer("Coffee").await;
                h.answer("food").await;
                h.answer("").await;
                task.await.unwrap();

                let posted = h.api.expenses.borrow();
                assert_eq!(posted.len(), 1);
                assert_eq!(posted[0].amount, Money::from_cents(25_050));
                assert_eq!(posted[0].description.as_deref(), Some("Coffee"));
                assert_eq!(posted[0].category_id, Some(CategoryId::from(3)));
                assert_eq!(posted[0].account_id, None);
                drop(posted);

                let messages = h.drain();
                assert!(matches!(&messages[0], AppMessage::Status(s) if s == "Expense of 250.50 added"));
                assert!(matches!(messages[1], AppMessage::Reload(Tab::Expenses)));
                assert!(!h.store.current().visible);
            })
            .await;
    }

    #[tokio::test]
    async fn test_cancel_has_no_side_effects() {
        LocalSet::new()
            .run_until(async {
                let mut h = Harness::new(FakeApi::with_data());
                let task = h.workflows.spawn(Action::AddIncome);

                h.answer("100").await;
                h.cancel().await;
                task.await.unwrap();

                assert!(h.api.incomes.borrow().is_empty());
                assert!(h.drain().is_empty());
                assert!(!h.store.current().visible);
            })
            .await;
    }

    #[tokio::test]
    async fn test_invalid_amount_is_reported() {
        LocalSet::new()
            .run_until(async {
                let mut h = Harness::new(FakeApi::with_data());
                let task = h.workflows.spawn(Action::AddExpense);

                h.answer("twelve").await;
                let message = h.acknowledge().await;
                task.await.unwrap();

                assert!(message.contains("Invalid amount: 'twelve'"), "{}", message);
                assert!(h.api.expenses.borrow().is_empty());
                assert!(matches!(&h.drain()[..], [AppMessage::Status(s)] if s.starts_with("Error:")));
            })
            .await;
    }

    #[tokio::test]
    async fn test_unknown_category_is_reported() {
        LocalSet::new()
            .run_until(async {
                let h = Harness::new(FakeApi::with_data());
                let task = h.workflows.spawn(Action::AddExpense);

                h.answer("10").await;
                h.answer("").await;
                h.answer("Travel").await;
                let message = h.acknowledge().await;
                task.await.unwrap();

                assert_eq!(message, "Category not found: Travel");
                assert!(h.api.expenses.borrow().is_empty());
            })
            .await;
    }

    #[tokio::test]
    async fn test_deposit_posts_income_for_account() {
        LocalSet::new()
            .run_until(async {
                let mut h = Harness::new(FakeApi::with_data());
                let account = h.api.accounts[0].clone();
                let task = h.workflows.spawn(Action::Deposit(account));

                let prompt = h.answer("1 500").await;
                assert!(prompt.message.contains("Наличные"));
                task.await.unwrap();

                let posted = h.api.incomes.borrow();
                assert_eq!(posted.len(), 1);
                assert_eq!(posted[0].amount, Money::from_cents(150_000));
                assert_eq!(posted[0].account_id, Some(AccountId::from(1)));
                assert_eq!(posted[0].description.as_deref(), Some("Deposit"));
                drop(posted);

                assert!(h
                    .drain()
                    .iter()
                    .any(|m| matches!(m, AppMessage::Reload(Tab::Accounts))));
            })
            .await;
    }

    #[tokio::test]
    async fn test_api_error_detail_is_shown() {
        LocalSet::new()
            .run_until(async {
                let api = FakeApi {
                    fail_writes: Some((400, "Insufficient funds".into())),
                    ..FakeApi::with_data()
                };
                let h = Harness::new(api);
                let account = h.api.accounts[1].clone();
                let task = h.workflows.spawn(Action::Deposit(account));

                h.answer("5").await;
                let message = h.acknowledge().await;
                task.await.unwrap();

                assert_eq!(message, "API error (400): Insufficient funds");
            })
            .await;
    }

    #[tokio::test]
    async fn test_delete_account_requires_matching_name() {
        LocalSet::new()
            .run_until(async {
                let h = Harness::new(FakeApi::with_data());
                let account = h.api.accounts[1].clone();

                let task = h.workflows.spawn(Action::DeleteAccount(account.clone()));
                let prompt = h.next_dialog().await;
                assert_eq!(prompt.default_value.as_deref(), Some("Card"));
                h.answer("Cart").await;
                let message = h.acknowledge().await;
                task.await.unwrap();

                assert!(message.contains("not deleted"));
                assert!(h.api.deleted_accounts.borrow().is_empty());

                let task = h.workflows.spawn(Action::DeleteAccount(account));
                h.answer("Card").await;
                task.await.unwrap();

                assert_eq!(*h.api.deleted_accounts.borrow(), vec![AccountId::from(2)]);
            })
            .await;
    }

    #[tokio::test]
    async fn test_add_and_delete_category() {
        LocalSet::new()
            .run_until(async {
                let h = Harness::new(FakeApi::with_data());

                let task = h.workflows.spawn(Action::AddCategory);
                h.answer("  Transport ").await;
                task.await.unwrap();
                assert_eq!(h.api.new_categories.borrow()[0].name, "Transport");

                let category = h.api.categories[0].clone();
                let task = h.workflows.spawn(Action::DeleteCategory(category));
                h.cancel().await;
                task.await.unwrap();
                assert!(h.api.deleted_categories.borrow().is_empty());
            })
            .await;
    }

    #[tokio::test]
    async fn test_add_account_with_opening_balance() {
        LocalSet::new()
            .run_until(async {
                let h = Harness::new(FakeApi::with_data());
                let task = h.workflows.spawn(Action::AddAccount);

                h.answer("Savings").await;
                let prompt = h.next_dialog().await;
                assert_eq!(prompt.default_value.as_deref(), Some("0"));
                h.answer("2500.75").await;
                task.await.unwrap();

                let created = h.api.new_accounts.borrow();
                assert_eq!(created[0].name, "Savings");
                assert_eq!(created[0].balance, Money::from_cents(250_075));
            })
            .await;
    }

    #[tokio::test]
    async fn test_load_sends_data_or_failure() {
        LocalSet::new()
            .run_until(async {
                let mut h = Harness::new(FakeApi::with_data());
                h.workflows.spawn(Action::Load(Tab::Expenses)).await.unwrap();
                match h.drain().as_slice() {
                    [AppMessage::ExpensesLoaded { summary, .. }] => {
                        assert_eq!(summary[0].label(), "Food")
                    }
                    other => panic!("unexpected messages: {:?}", other),
                }

                let mut h = Harness::new(FakeApi {
                    fail_reads: true,
                    ..FakeApi::default()
                });
                h.workflows.spawn(Action::Load(Tab::Accounts)).await.unwrap();
                assert!(matches!(
                    h.drain().as_slice(),
                    [AppMessage::LoadFailed { tab: Tab::Accounts, .. }]
                ));
                assert!(!h.store.current().visible);
            })
            .await;
    }
}
