//! In-memory [`BudgetApi`] for tests
//!
//! Records every write so tests can assert on the payloads the UI sent.

use std::cell::RefCell;

use async_trait::async_trait;
use chrono::Utc;

use super::BudgetApi;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{
    Account, AccountId, Category, CategoryId, Expense, ExpenseId, Income, IncomeId, Money,
    NewAccount, NewCategory, NewExpense, NewIncome, SummaryItem,
};

#[derive(Default)]
pub struct FakeApi {
    pub accounts: Vec<Account>,
    pub categories: Vec<Category>,
    pub fail_writes: Option<(u16, String)>,
    pub fail_reads: bool,
    pub expenses: RefCell<Vec<NewExpense>>,
    pub incomes: RefCell<Vec<NewIncome>>,
    pub new_accounts: RefCell<Vec<NewAccount>>,
    pub new_categories: RefCell<Vec<NewCategory>>,
    pub deleted_accounts: RefCell<Vec<AccountId>>,
    pub deleted_categories: RefCell<Vec<CategoryId>>,
}

impl FakeApi {
    /// Two accounts and one category
    pub fn with_data() -> Self {
        Self {
            accounts: vec![
                Account {
                    id: AccountId::from(1),
                    name: "Наличные".into(),
                    balance: Money::from_cents(100_000),
                },
                Account {
                    id: AccountId::from(2),
                    name: "Card".into(),
                    balance: Money::zero(),
                },
            ],
            categories: vec![Category {
                id: CategoryId::from(3),
                name: "Food".into(),
            }],
            ..Self::default()
        }
    }

    fn write_result(&self) -> BudgetResult<()> {
        match &self.fail_writes {
            Some((status, detail)) => Err(BudgetError::Api {
                status: *status,
                detail: detail.clone(),
            }),
            None => Ok(()),
        }
    }

    fn read_result(&self) -> BudgetResult<()> {
        if self.fail_reads {
            Err(BudgetError::Http("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl BudgetApi for FakeApi {
    async fn list_expenses(&self) -> BudgetResult<Vec<Expense>> {
        self.read_result()?;
        Ok(Vec::new())
    }

    async fn expense_summary(&self) -> BudgetResult<Vec<SummaryItem>> {
        self.read_result()?;
        Ok(vec![SummaryItem {
            category: Some("Food".into()),
            total: Money::from_cents(5000),
        }])
    }

    async fn create_expense(&self, expense: &NewExpense) -> BudgetResult<Expense> {
        self.write_result()?;
        self.expenses.borrow_mut().push(expense.clone());
        Ok(Expense {
            id: ExpenseId::from(10),
            spent_at: Utc::now(),
            amount: expense.amount,
            description: expense.description.clone(),
            category: None,
            account: None,
        })
    }

    async fn list_incomes(&self) -> BudgetResult<Vec<Income>> {
        self.read_result()?;
        Ok(Vec::new())
    }

    async fn create_income(&self, income: &NewIncome) -> BudgetResult<Income> {
        self.write_result()?;
        self.incomes.borrow_mut().push(income.clone());
        Ok(Income {
            id: IncomeId::from(20),
            received_at: Utc::now(),
            amount: income.amount,
            description: income.description.clone(),
            category: None,
            account: None,
        })
    }

    async fn list_accounts(&self) -> BudgetResult<Vec<Account>> {
        self.read_result()?;
        Ok(self.accounts.clone())
    }

    async fn create_account(&self, account: &NewAccount) -> BudgetResult<Account> {
        self.write_result()?;
        self.new_accounts.borrow_mut().push(account.clone());
        Ok(Account {
            id: AccountId::from(30),
            name: account.name.clone(),
            balance: account.balance,
        })
    }

    async fn delete_account(&self, id: &AccountId) -> BudgetResult<Account> {
        self.write_result()?;
        self.deleted_accounts.borrow_mut().push(id.clone());
        self.accounts
            .iter()
            .find(|a| &a.id == id)
            .cloned()
            .ok_or_else(|| BudgetError::account_not_found(id.as_str()))
    }

    async fn list_categories(&self) -> BudgetResult<Vec<Category>> {
        self.read_result()?;
        Ok(self.categories.clone())
    }

    async fn create_category(&self, category: &NewCategory) -> BudgetResult<Category> {
        self.write_result()?;
        self.new_categories.borrow_mut().push(category.clone());
        Ok(Category {
            id: CategoryId::from(40),
            name: category.name.clone(),
        })
    }

    async fn delete_category(&self, id: &CategoryId) -> BudgetResult<Category> {
        self.write_result()?;
        self.deleted_categories.borrow_mut().push(id.clone());
        self.categories
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or_else(|| BudgetError::category_not_found(id.as_str()))
    }

    async fn health(&self) -> BudgetResult<()> {
        self.read_result()
    }
}
