//! Reports module - weekly and monthly expense breakdowns.

mod reports_calculator;
mod reports_model;
mod reports_service;
mod reports_traits;

pub use reports_calculator::{build_monthly_report, build_weekly_report, percentage_of};
pub use reports_model::{
    CategorySummary, MonthlyCategorySummary, MonthlyReport, WeeklyReport, WeeklyTotal,
};
pub use reports_service::ReportService;
pub use reports_traits::ReportServiceTrait;
