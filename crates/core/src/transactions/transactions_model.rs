//! Transaction domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::utils::time_utils::optional_datetime;

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown transaction type '{}'",
                other
            )))),
        }
    }
}

/// Domain model representing a recorded income or expense.
///
/// The sign of `amount` is not tied to `transaction_type`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "user")]
    pub user_id: String,
    pub amount: Decimal,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }
}

/// Input model for creating a new transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub amount: Decimal,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Defaults to the time of creation when omitted.
    #[serde(default, with = "optional_datetime")]
    pub date: Option<DateTime<Utc>>,
}

impl NewTransaction {
    /// Validates the input and trims text fields.
    pub fn normalized(mut self) -> Result<Self> {
        self.category = self.category.trim().to_string();
        self.description = self.description.trim().to_string();
        if self.category.is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Category cannot be empty".to_string(),
            )));
        }
        Ok(self)
    }
}

/// Input model for updating a transaction.
///
/// Every field is optional; a field left out keeps its stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
    #[serde(default, with = "optional_datetime")]
    pub date: Option<DateTime<Utc>>,
}

impl TransactionUpdate {
    /// Validates the update and trims text fields.
    pub fn normalized(mut self) -> Result<Self> {
        if let Some(category) = self.category.as_mut() {
            *category = category.trim().to_string();
            if category.is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Category cannot be empty".to_string(),
                )));
            }
        }
        if let Some(description) = self.description.as_mut() {
            *description = description.trim().to_string();
        }
        Ok(self)
    }

    /// Overlays the provided fields on top of `existing`.
    pub fn apply_to(self, existing: Transaction) -> Transaction {
        Transaction {
            amount: self.amount.unwrap_or(existing.amount),
            description: self.description.unwrap_or(existing.description),
            category: self.category.unwrap_or(existing.category),
            transaction_type: self.transaction_type.unwrap_or(existing.transaction_type),
            date: self.date.unwrap_or(existing.date),
            ..existing
        }
    }

    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.transaction_type.is_none()
            && self.date.is_none()
    }
}
