//! Budget domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::utils::time_utils::{days_before, months_before};

/// Rolling window a spending limit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BudgetPeriod {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl BudgetPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetPeriod::Weekly => "Weekly",
            BudgetPeriod::Monthly => "Monthly",
            BudgetPeriod::Yearly => "Yearly",
        }
    }

    /// Start of the window ending at `now`.
    pub fn window_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            BudgetPeriod::Weekly => days_before(now, 7),
            BudgetPeriod::Monthly => months_before(now, 1),
            BudgetPeriod::Yearly => months_before(now, 12),
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetPeriod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "Weekly" => Ok(BudgetPeriod::Weekly),
            "Monthly" => Ok(BudgetPeriod::Monthly),
            "Yearly" => Ok(BudgetPeriod::Yearly),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown budget period '{}'",
                other
            )))),
        }
    }
}

/// Domain model representing a spending limit for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    #[serde(rename = "user")]
    pub user_id: String,
    pub category: String,
    pub limit: Decimal,
    pub period: BudgetPeriod,
    pub created_at: DateTime<Utc>,
}

/// A budget together with what has been spent in its current window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetWithSpent {
    #[serde(flatten)]
    pub budget: Budget,
    pub spent: Decimal,
}

/// Input model for creating a budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub category: String,
    pub limit: Decimal,
    /// Defaults to `Monthly` when omitted.
    #[serde(default)]
    pub period: Option<BudgetPeriod>,
}

impl NewBudget {
    /// Validates the input and trims the category. The limit is not range checked.
    pub fn normalized(mut self) -> Result<Self> {
        self.category = self.category.trim().to_string();
        if self.category.is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Category cannot be empty".to_string(),
            )));
        }
        Ok(self)
    }

    pub fn period_or_default(&self) -> BudgetPeriod {
        self.period.unwrap_or_default()
    }
}

/// Input model for updating a budget. Only the limit and period may change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUpdate {
    pub limit: Option<Decimal>,
    pub period: Option<BudgetPeriod>,
}

impl BudgetUpdate {
    pub fn apply_to(self, existing: Budget) -> Budget {
        Budget {
            limit: self.limit.unwrap_or(existing.limit),
            period: self.period.unwrap_or(existing.period),
            ..existing
        }
    }
}
