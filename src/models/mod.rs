//! Data models for the family budget client
//!
//! These mirror the records served by the budget REST API: accounts,
//! categories, expenses, incomes and the spending summary.

pub mod account;
pub mod category;
pub mod expense;
pub mod ids;
pub mod income;
pub mod money;
pub mod timestamp;

pub use account::{find_account, Account, NewAccount};
pub use category::{find_category, Category, NewCategory};
pub use expense::{Expense, NewExpense, SummaryItem};
pub use ids::{AccountId, CategoryId, ExpenseId, IncomeId};
pub use income::{Income, NewIncome};
pub use money::{Money, MoneyParseError};
