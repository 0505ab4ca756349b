use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::debug;

use super::reports_calculator::{build_monthly_report, build_weekly_report};
use super::reports_model::{MonthlyReport, WeeklyReport};
use super::reports_traits::ReportServiceTrait;
use crate::errors::Result;
use crate::transactions::TransactionRepositoryTrait;
use crate::utils::time_utils::{days_before, months_before};

const WEEKLY_WINDOW_DAYS: i64 = 7;
const MONTHLY_WINDOW_MONTHS: u32 = 1;

pub struct ReportService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl ReportService {
    pub fn new(transaction_repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        ReportService {
            transaction_repository,
        }
    }

    pub(crate) fn weekly_report_at(&self, user_id: &str, now: DateTime<Utc>) -> Result<WeeklyReport> {
        let start = days_before(now, WEEKLY_WINDOW_DAYS);
        let expenses = self
            .transaction_repository
            .get_expenses_since(user_id, start)?;
        debug!(
            "Building weekly report for user {} from {} expenses",
            user_id,
            expenses.len()
        );
        build_weekly_report(&expenses, start, now)
    }

    pub(crate) fn monthly_report_at(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<MonthlyReport> {
        let start = months_before(now, MONTHLY_WINDOW_MONTHS);
        let expenses = self
            .transaction_repository
            .get_expenses_since(user_id, start)?;
        debug!(
            "Building monthly report for user {} from {} expenses",
            user_id,
            expenses.len()
        );
        build_monthly_report(&expenses, start, now)
    }
}

impl ReportServiceTrait for ReportService {
    fn weekly_report(&self, user_id: &str) -> Result<WeeklyReport> {
        self.weekly_report_at(user_id, Utc::now())
    }

    fn monthly_report(&self, user_id: &str) -> Result<MonthlyReport> {
        self.monthly_report_at(user_id, Utc::now())
    }
}
