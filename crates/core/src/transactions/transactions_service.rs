use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;

use super::transactions_model::{NewTransaction, Transaction, TransactionUpdate};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::errors::{Error, Result};

pub const TRANSACTION_NOT_FOUND: &str = "Transaction not found";

/// Service for managing a user's transactions.
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    pub fn new(repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        TransactionService { repository }
    }
}

fn not_found() -> Error {
    Error::NotFound(TRANSACTION_NOT_FOUND.to_string())
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn create_transaction(
        &self,
        user_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<Transaction> {
        let mut input = new_transaction.normalized()?;
        if input.date.is_none() {
            input.date = Some(Utc::now());
        }
        debug!(
            "Creating {} transaction in '{}' for user {}",
            input.transaction_type, input.category, user_id
        );
        self.repository.insert_transaction(user_id, input).await
    }

    fn get_transactions(&self, user_id: &str) -> Result<Vec<Transaction>> {
        self.repository.get_transactions(user_id)
    }

    fn get_transaction(&self, user_id: &str, transaction_id: &str) -> Result<Transaction> {
        self.repository
            .get_transaction(user_id, transaction_id)?
            .ok_or_else(not_found)
    }

    async fn update_transaction(
        &self,
        user_id: &str,
        transaction_id: &str,
        update: TransactionUpdate,
    ) -> Result<Transaction> {
        let update = update.normalized()?;
        if update.is_empty() {
            return self.get_transaction(user_id, transaction_id);
        }
        self.repository
            .update_transaction(user_id, transaction_id, update)
            .await?
            .ok_or_else(not_found)
    }

    async fn delete_transaction(&self, user_id: &str, transaction_id: &str) -> Result<()> {
        let deleted = self
            .repository
            .delete_transaction(user_id, transaction_id)
            .await?;
        if deleted == 0 {
            return Err(not_found());
        }
        Ok(())
    }
}
