//! Income model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account::Account;
use super::category::Category;
use super::ids::{AccountId, CategoryId, IncomeId};
use super::money::Money;

/// A recorded income
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Income {
    pub id: IncomeId,
    #[serde(with = "super::timestamp")]
    pub received_at: DateTime<Utc>,
    pub amount: Money,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub account: Option<Account>,
}

impl Income {
    pub fn category_name(&self) -> &str {
        self.category.as_ref().map(|c| c.name.as_str()).unwrap_or("")
    }

    pub fn account_name(&self) -> &str {
        self.account.as_ref().map(|a| a.name.as_str()).unwrap_or("")
    }
}

/// Payload for `POST /api/incomes/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewIncome {
    pub amount: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<AccountId>,
}

impl NewIncome {
    /// A plain top-up of an account
    pub fn deposit(account_id: AccountId, amount: Money) -> Self {
        Self {
            amount,
            description: Some("Deposit".to_string()),
            category_id: None,
            account_id: Some(account_id),
        }
    }
}
