//! In-memory repositories shared by the service tests.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::budgets::{Budget, BudgetRepositoryTrait, BudgetUpdate, NewBudget};
use crate::errors::{DatabaseError, Error, Result};
use crate::transactions::{
    NewTransaction, Transaction, TransactionRepositoryTrait, TransactionType, TransactionUpdate,
};
use crate::users::{NewUser, User, UserRepositoryTrait};

pub fn expense_at(user_id: &str, category: &str, amount: Decimal, date: DateTime<Utc>) -> Transaction {
    Transaction {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        amount,
        description: format!("{} expense", category),
        category: category.to_string(),
        transaction_type: TransactionType::Expense,
        date,
        created_at: date,
    }
}

#[derive(Default)]
pub struct InMemoryTransactionRepository {
    rows: RwLock<Vec<Transaction>>,
}

impl InMemoryTransactionRepository {
    pub fn seed(&self, transaction: Transaction) {
        self.rows.write().unwrap().push(transaction);
    }

    pub fn len(&self) -> usize {
        self.rows.read().unwrap().len()
    }
}

#[async_trait]
impl TransactionRepositoryTrait for InMemoryTransactionRepository {
    fn get_transactions(&self, user_id: &str) -> Result<Vec<Transaction>> {
        let mut rows: Vec<Transaction> = self
            .rows
            .read()
            .unwrap()
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(rows)
    }

    fn get_transaction(&self, user_id: &str, transaction_id: &str) -> Result<Option<Transaction>> {
        Ok(self
            .rows
            .read()
            .unwrap()
            .iter()
            .find(|t| t.user_id == user_id && t.id == transaction_id)
            .cloned())
    }

    fn get_expenses_since(&self, user_id: &str, since: DateTime<Utc>) -> Result<Vec<Transaction>> {
        let mut rows: Vec<Transaction> = self
            .rows
            .read()
            .unwrap()
            .iter()
            .filter(|t| t.user_id == user_id && t.is_expense() && t.date >= since)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(rows)
    }

    async fn insert_transaction(
        &self,
        user_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<Transaction> {
        let now = Utc::now();
        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            amount: new_transaction.amount,
            description: new_transaction.description,
            category: new_transaction.category,
            transaction_type: new_transaction.transaction_type,
            date: new_transaction.date.unwrap_or(now),
            created_at: now,
        };
        self.seed(transaction.clone());
        Ok(transaction)
    }

    async fn update_transaction(
        &self,
        user_id: &str,
        transaction_id: &str,
        update: TransactionUpdate,
    ) -> Result<Option<Transaction>> {
        let mut rows = self.rows.write().unwrap();
        let Some(row) = rows
            .iter_mut()
            .find(|t| t.user_id == user_id && t.id == transaction_id)
        else {
            return Ok(None);
        };
        *row = update.apply_to(row.clone());
        Ok(Some(row.clone()))
    }

    async fn delete_transaction(&self, user_id: &str, transaction_id: &str) -> Result<usize> {
        let mut rows = self.rows.write().unwrap();
        let before = rows.len();
        rows.retain(|t| !(t.user_id == user_id && t.id == transaction_id));
        Ok(before - rows.len())
    }
}

/// Mirrors the store's unique (user, category) index.
#[derive(Default)]
pub struct InMemoryBudgetRepository {
    rows: RwLock<Vec<Budget>>,
}

#[async_trait]
impl BudgetRepositoryTrait for InMemoryBudgetRepository {
    fn get_budgets(&self, user_id: &str) -> Result<Vec<Budget>> {
        Ok(self
            .rows
            .read()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn insert_budget(&self, user_id: &str, new_budget: NewBudget) -> Result<Budget> {
        let mut rows = self.rows.write().unwrap();
        if rows
            .iter()
            .any(|b| b.user_id == user_id && b.category == new_budget.category)
        {
            return Err(Error::Database(DatabaseError::UniqueViolation(
                "budgets.user_id, budgets.category".to_string(),
            )));
        }
        let budget = Budget {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            period: new_budget.period_or_default(),
            category: new_budget.category,
            limit: new_budget.limit,
            created_at: Utc::now(),
        };
        rows.push(budget.clone());
        Ok(budget)
    }

    async fn update_budget(
        &self,
        user_id: &str,
        budget_id: &str,
        update: BudgetUpdate,
    ) -> Result<Option<Budget>> {
        let mut rows = self.rows.write().unwrap();
        let Some(row) = rows
            .iter_mut()
            .find(|b| b.user_id == user_id && b.id == budget_id)
        else {
            return Ok(None);
        };
        *row = update.apply_to(row.clone());
        Ok(Some(row.clone()))
    }

    async fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<usize> {
        let mut rows = self.rows.write().unwrap();
        let before = rows.len();
        rows.retain(|b| !(b.user_id == user_id && b.id == budget_id));
        Ok(before - rows.len())
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: RwLock<Vec<User>>,
}

#[async_trait]
impl UserRepositoryTrait for InMemoryUserRepository {
    fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        Ok(self
            .rows
            .read()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id)
            .cloned())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .rows
            .read()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn insert_user(&self, new_user: NewUser) -> Result<User> {
        let mut rows = self.rows.write().unwrap();
        if rows.iter().any(|u| u.email == new_user.email) {
            return Err(Error::Database(DatabaseError::UniqueViolation(
                "users.email".to_string(),
            )));
        }
        let user = User {
            id: Uuid::new_v4().to_string(),
            email: new_user.email,
            name: new_user.name,
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
        };
        rows.push(user.clone());
        Ok(user)
    }
}
