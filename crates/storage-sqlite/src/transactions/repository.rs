use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use spendtrack_core::transactions::{
    NewTransaction, Transaction, TransactionRepositoryTrait, TransactionType, TransactionUpdate,
};
use spendtrack_core::Result;

use super::model::TransactionDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::transactions;
use crate::schema::transactions::dsl::*;

fn into_domain(rows: Vec<TransactionDB>) -> Result<Vec<Transaction>> {
    rows.into_iter().map(Transaction::try_from).collect()
}

pub struct TransactionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TransactionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        TransactionRepository { pool, writer }
    }
}

fn find_owned(
    conn: &mut SqliteConnection,
    owner: &str,
    transaction_id: &str,
) -> Result<Option<TransactionDB>> {
    transactions
        .filter(user_id.eq(owner))
        .filter(id.eq(transaction_id))
        .select(TransactionDB::as_select())
        .first::<TransactionDB>(conn)
        .optional()
        .into_core()
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    fn get_transactions(&self, owner: &str) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = transactions
            .filter(user_id.eq(owner))
            .order((date.desc(), created_at.desc()))
            .select(TransactionDB::as_select())
            .load::<TransactionDB>(&mut conn)
            .into_core()?;
        into_domain(rows)
    }

    fn get_transaction(&self, owner: &str, transaction_id: &str) -> Result<Option<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        find_owned(&mut conn, owner, transaction_id)?
            .map(Transaction::try_from)
            .transpose()
    }

    fn get_expenses_since(&self, owner: &str, since: DateTime<Utc>) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = transactions
            .filter(user_id.eq(owner))
            .filter(transaction_type.eq(TransactionType::Expense.as_str()))
            .filter(date.ge(since.naive_utc()))
            .order((date.asc(), created_at.asc()))
            .select(TransactionDB::as_select())
            .load::<TransactionDB>(&mut conn)
            .into_core()?;
        into_domain(rows)
    }

    async fn insert_transaction(
        &self,
        owner: &str,
        new_transaction: NewTransaction,
    ) -> Result<Transaction> {
        let now = Utc::now();
        let row = TransactionDB::from(&Transaction {
            id: Uuid::new_v4().to_string(),
            user_id: owner.to_string(),
            amount: new_transaction.amount,
            description: new_transaction.description,
            category: new_transaction.category,
            transaction_type: new_transaction.transaction_type,
            date: new_transaction.date.unwrap_or(now),
            created_at: now,
        });

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Transaction> {
                let inserted = diesel::insert_into(transactions::table)
                    .values(&row)
                    .returning(TransactionDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Transaction::try_from(inserted)
            })
            .await
    }

    async fn update_transaction(
        &self,
        owner: &str,
        transaction_id: &str,
        update: TransactionUpdate,
    ) -> Result<Option<Transaction>> {
        let owner = owner.to_string();
        let transaction_id = transaction_id.to_string();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Option<Transaction>> {
                let Some(existing) = find_owned(conn, &owner, &transaction_id)? else {
                    return Ok(None);
                };
                let merged = update.apply_to(Transaction::try_from(existing)?);
                let changes = TransactionDB::from(&merged);

                let updated = diesel::update(
                    transactions
                        .filter(user_id.eq(&owner))
                        .filter(id.eq(&transaction_id)),
                )
                .set(&changes)
                .returning(TransactionDB::as_returning())
                .get_result(conn)
                .into_core()?;
                Transaction::try_from(updated).map(Some)
            })
            .await
    }

    async fn delete_transaction(&self, owner: &str, transaction_id: &str) -> Result<usize> {
        let owner = owner.to_string();
        let transaction_id = transaction_id.to_string();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(
                    transactions
                        .filter(user_id.eq(&owner))
                        .filter(id.eq(&transaction_id)),
                )
                .execute(conn)
                .into_core()
            })
            .await
    }
}
