use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::transactions_model::{NewTransaction, Transaction, TransactionUpdate};
use crate::errors::Result;

/// Trait for transaction repository operations.
///
/// Every method is scoped by `user_id`; a record owned by another user is
/// indistinguishable from a missing one.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// All of the user's transactions, most recent `date` first.
    fn get_transactions(&self, user_id: &str) -> Result<Vec<Transaction>>;
    fn get_transaction(&self, user_id: &str, transaction_id: &str) -> Result<Option<Transaction>>;
    /// The user's expense transactions dated at or after `since`, oldest first.
    fn get_expenses_since(&self, user_id: &str, since: DateTime<Utc>) -> Result<Vec<Transaction>>;
    async fn insert_transaction(
        &self,
        user_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<Transaction>;
    /// Returns `None` when no matching transaction exists for the user.
    async fn update_transaction(
        &self,
        user_id: &str,
        transaction_id: &str,
        update: TransactionUpdate,
    ) -> Result<Option<Transaction>>;
    /// Returns the number of deleted rows.
    async fn delete_transaction(&self, user_id: &str, transaction_id: &str) -> Result<usize>;
}

/// Trait for transaction service operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    async fn create_transaction(
        &self,
        user_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<Transaction>;
    fn get_transactions(&self, user_id: &str) -> Result<Vec<Transaction>>;
    fn get_transaction(&self, user_id: &str, transaction_id: &str) -> Result<Transaction>;
    async fn update_transaction(
        &self,
        user_id: &str,
        transaction_id: &str,
        update: TransactionUpdate,
    ) -> Result<Transaction>;
    async fn delete_transaction(&self, user_id: &str, transaction_id: &str) -> Result<()>;
}
