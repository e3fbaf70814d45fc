//! Expense model and the per-category spending summary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account::Account;
use super::category::Category;
use super::ids::{AccountId, CategoryId, ExpenseId};
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    #[serde(with = "super::timestamp")]
    pub spent_at: DateTime<Utc>,
    pub amount: Money,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub account: Option<Account>,
}

impl Expense {
    /// Category name for display, empty when uncategorized
    pub fn category_name(&self) -> &str {
        self.category.as_ref().map(|c| c.name.as_str()).unwrap_or("")
    }
}

/// One row of `GET /api/expenses/summary`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryItem {
    #[serde(default)]
    pub category: Option<String>,
    pub total: Money,
}

impl SummaryItem {
    pub fn label(&self) -> &str {
        self.category.as_deref().unwrap_or("Uncategorized")
    }
}

/// Payload for `POST /api/expenses/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewExpense {
    pub amount: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<AccountId>,
}
