//! Pure aggregation behind the weekly and monthly reports.
//!
//! Both functions only consider expense transactions dated at or after
//! `start`; anything else in the input is ignored. Totals are overflow-checked
//! and fail with `Error::Unexpected` when they leave `Decimal`'s range.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Datelike, Utc};
use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::reports_model::{
    CategorySummary, MonthlyCategorySummary, MonthlyReport, WeeklyReport, WeeklyTotal,
};
use crate::errors::{Error, Result};
use crate::transactions::Transaction;
use crate::utils::decimal_utils::{checked_add, checked_ratio, checked_sum, AMOUNT_OUT_OF_RANGE};

/// `part / whole * 100` rounded half away from zero; 0 when `whole` is 0.
pub fn percentage_of(part: Decimal, whole: Decimal) -> Result<i64> {
    if whole.is_zero() {
        return Ok(0);
    }
    checked_ratio(part, whole, dec!(100))?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| Error::Unexpected(AMOUNT_OUT_OF_RANGE.to_string()))
}

fn by_total_desc(a_total: Decimal, a_name: &str, b_total: Decimal, b_name: &str) -> Ordering {
    b_total.cmp(&a_total).then_with(|| a_name.cmp(b_name))
}

fn in_window<'a>(
    transactions: &'a [Transaction],
    start: DateTime<Utc>,
) -> impl Iterator<Item = &'a Transaction> + 'a {
    transactions
        .iter()
        .filter(move |t| t.is_expense() && t.date >= start)
}

pub fn build_weekly_report(
    transactions: &[Transaction],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<WeeklyReport> {
    let mut groups: HashMap<&str, (Decimal, usize)> = HashMap::new();
    for transaction in in_window(transactions, start) {
        let entry = groups
            .entry(transaction.category.as_str())
            .or_insert((Decimal::ZERO, 0));
        entry.0 = checked_add(entry.0, transaction.amount)?;
        entry.1 += 1;
    }

    let total_expenses = checked_sum(groups.values().map(|(total, _)| *total))?;

    let mut categories = groups
        .into_iter()
        .map(|(category, (total, count))| -> Result<CategorySummary> {
            Ok(CategorySummary {
                category: category.to_string(),
                total,
                count,
                percentage: percentage_of(total, total_expenses)?,
            })
        })
        .collect::<Result<Vec<CategorySummary>>>()?;
    categories.sort_by(|a, b| by_total_desc(a.total, &a.category, b.total, &b.category));

    Ok(WeeklyReport {
        start_date: start,
        end_date: end,
        total_expenses,
        categories,
    })
}

pub fn build_monthly_report(
    transactions: &[Transaction],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<MonthlyReport> {
    // category -> (iso year, iso week) -> total
    let mut groups: HashMap<&str, BTreeMap<(i32, u32), Decimal>> = HashMap::new();
    for transaction in in_window(transactions, start) {
        let iso = transaction.date.iso_week();
        let week_total = groups
            .entry(transaction.category.as_str())
            .or_default()
            .entry((iso.year(), iso.week()))
            .or_insert(Decimal::ZERO);
        *week_total = checked_add(*week_total, transaction.amount)?;
    }

    let mut categories = groups
        .into_iter()
        .map(|(category, weeks)| -> Result<MonthlyCategorySummary> {
            let weekly_data: Vec<WeeklyTotal> = weeks
                .into_iter()
                .map(|((year, week), total)| WeeklyTotal { year, week, total })
                .collect();
            Ok(MonthlyCategorySummary {
                category: category.to_string(),
                total: checked_sum(weekly_data.iter().map(|w| w.total))?,
                weekly_data,
            })
        })
        .collect::<Result<Vec<MonthlyCategorySummary>>>()?;
    categories.sort_by(|a, b| by_total_desc(a.total, &a.category, b.total, &b.category));

    Ok(MonthlyReport {
        start_date: start,
        end_date: end,
        categories,
    })
}
