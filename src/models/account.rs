//! Account model
//!
//! A place money lives (cash, a card, a savings account). Balances are
//! maintained by the backend.

use serde::{Deserialize, Serialize};

use super::ids::AccountId;
use super::money::Money;

/// An account as returned by `GET /api/accounts/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    #[serde(default)]
    pub balance: Money,
}

/// Payload for `POST /api/accounts/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewAccount {
    pub name: String,
    pub balance: Money,
}

impl NewAccount {
    pub fn new(name: impl Into<String>, balance: Money) -> Self {
        Self {
            name: name.into().trim().to_string(),
            balance,
        }
    }
}

/// Find an account by exact id or case-insensitive name
pub fn find_account<'a>(accounts: &'a [Account], query: &str) -> Option<&'a Account> {
    let query = query.trim();
    accounts
        .iter()
        .find(|a| a.id.as_str() == query)
        .or_else(|| accounts.iter().find(|a| a.name.eq_ignore_ascii_case(query)))
        .or_else(|| {
            let lowered = query.to_lowercase();
            accounts.iter().find(|a| a.name.to_lowercase() == lowered)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Account> {
        serde_json::from_str(
            r#"[{"id": 1, "name": "Наличные", "balance": "1000.00"},
                {"id": "2", "name": "Card", "balance": 5000}]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_deserialize() {
        let accounts = sample();
        assert_eq!(accounts[0].id.as_str(), "1");
        assert_eq!(accounts[0].balance.cents(), 100_000);
        assert_eq!(accounts[1].balance.cents(), 500_000);
    }

    #[test]
    fn test_find_account() {
        let accounts = sample();
        assert_eq!(find_account(&accounts, "2").unwrap().name, "Card");
        assert_eq!(find_account(&accounts, "card").unwrap().id.as_str(), "2");
        assert_eq!(find_account(&accounts, "наличные").unwrap().id.as_str(), "1");
        assert!(find_account(&accounts, "Savings").is_none());
    }

    #[test]
    fn test_new_account_payload() {
        let payload = NewAccount::new("  Savings ", Money::from_cents(1500));
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["name"], "Savings");
        assert_eq!(json["balance"], "15.00");
    }
}
