//! Database models for transactions.

use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;

use spendtrack_core::errors::{DatabaseError, Error, Result};
use spendtrack_core::transactions::{Transaction, TransactionType};

/// Database model for transactions. Amounts are stored as text to keep
/// their exact decimal representation.
#[derive(Queryable, Selectable, Insertable, Identifiable, AsChangeset, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TransactionDB {
    pub id: String,
    pub user_id: String,
    pub amount: String,
    pub description: String,
    pub category: String,
    pub transaction_type: String,
    pub date: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

pub(crate) fn parse_stored_decimal(value: &str, field_name: &str) -> Result<Decimal> {
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|e| {
            log::error!("Stored {} '{}' is not a decimal: {}", field_name, value, e);
            Error::Database(DatabaseError::Internal(format!(
                "Invalid {} in database: {}",
                field_name, value
            )))
        })
}

impl TryFrom<TransactionDB> for Transaction {
    type Error = Error;

    fn try_from(db: TransactionDB) -> Result<Self> {
        Ok(Transaction {
            amount: parse_stored_decimal(&db.amount, "amount")?,
            transaction_type: TransactionType::from_str(&db.transaction_type)?,
            id: db.id,
            user_id: db.user_id,
            description: db.description,
            category: db.category,
            date: db.date.and_utc(),
            created_at: db.created_at.and_utc(),
        })
    }
}

impl From<&Transaction> for TransactionDB {
    fn from(domain: &Transaction) -> Self {
        TransactionDB {
            id: domain.id.clone(),
            user_id: domain.user_id.clone(),
            amount: domain.amount.to_string(),
            description: domain.description.clone(),
            category: domain.category.clone(),
            transaction_type: domain.transaction_type.as_str().to_string(),
            date: domain.date.naive_utc(),
            created_at: domain.created_at.naive_utc(),
        }
    }
}
