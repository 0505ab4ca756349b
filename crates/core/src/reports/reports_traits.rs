use super::reports_model::{MonthlyReport, WeeklyReport};
use crate::errors::Result;

/// Trait for report service operations.
pub trait ReportServiceTrait: Send + Sync {
    /// Expenses of the last seven days grouped by category.
    fn weekly_report(&self, user_id: &str) -> Result<WeeklyReport>;
    /// Expenses of the last month grouped by category and ISO week.
    fn monthly_report(&self, user_id: &str) -> Result<MonthlyReport>;
}
