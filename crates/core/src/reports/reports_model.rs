//! Report models returned by the reports endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Expense breakdown for the last seven days.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReport {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_expenses: Decimal,
    /// Sorted by `total`, largest first.
    pub categories: Vec<CategorySummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: String,
    pub total: Decimal,
    pub count: usize,
    /// Whole-number share of the report total; 0 when the total is 0.
    pub percentage: i64,
}

/// Expense breakdown for the last calendar month, split by ISO week.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Sorted by `total`, largest first.
    pub categories: Vec<MonthlyCategorySummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCategorySummary {
    pub category: String,
    pub total: Decimal,
    /// Chronological.
    pub weekly_data: Vec<WeeklyTotal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTotal {
    /// ISO week-numbering year.
    pub year: i32,
    /// ISO week of year (1-53).
    pub week: u32,
    pub total: Decimal,
}
