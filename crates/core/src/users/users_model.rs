//! User domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Registered user. Transactions and budgets reference it by `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Storage input for a new user; the password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: Option<String>,
    pub password_hash: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUser {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl RegisterUser {
    /// Lowercases the email, trims the name and enforces basic credential rules.
    pub fn normalized(mut self) -> Result<Self> {
        self.email = normalize_email(&self.email);
        if self.email.is_empty() || !self.email.contains('@') {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "A valid email address is required".to_string(),
            )));
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            ))));
        }
        self.name = self
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        Ok(self)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    pub email: String,
    pub password: String,
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
