//! Budget REST API access
//!
//! [`BudgetApi`] is the seam between the UI and the backend. The TUI and
//! the plain-text commands both talk to it; [`ApiClient`] is the real HTTP
//! implementation.

pub mod client;
#[cfg(test)]
pub(crate) mod fake;

use async_trait::async_trait;

use crate::error::BudgetResult;
use crate::models::{
    Account, AccountId, Category, CategoryId, Expense, Income, NewAccount, NewCategory,
    NewExpense, NewIncome, SummaryItem,
};

pub use client::ApiClient;

/// Operations offered by the budget backend
///
/// Futures are not `Send`: every caller lives on the single UI thread.
#[async_trait(?Send)]
pub trait BudgetApi {
    /// All expenses, newest first
    async fn list_expenses(&self) -> BudgetResult<Vec<Expense>>;

    /// Expense totals per category
    async fn expense_summary(&self) -> BudgetResult<Vec<SummaryItem>>;

    async fn create_expense(&self, expense: &NewExpense) -> BudgetResult<Expense>;

    async fn list_incomes(&self) -> BudgetResult<Vec<Income>>;

    async fn create_income(&self, income: &NewIncome) -> BudgetResult<Income>;

    async fn list_accounts(&self) -> BudgetResult<Vec<Account>>;

    async fn create_account(&self, account: &NewAccount) -> BudgetResult<Account>;

    async fn delete_account(&self, id: &AccountId) -> BudgetResult<Account>;

    async fn list_categories(&self) -> BudgetResult<Vec<Category>>;

    async fn create_category(&self, category: &NewCategory) -> BudgetResult<Category>;

    async fn delete_category(&self, id: &CategoryId) -> BudgetResult<Category>;

    /// Succeeds when the backend answers its health check
    async fn health(&self) -> BudgetResult<()>;
}
