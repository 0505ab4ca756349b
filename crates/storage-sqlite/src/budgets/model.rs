//! Database models for budgets.

use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;

use spendtrack_core::budgets::{Budget, BudgetPeriod};
use spendtrack_core::errors::Error;

use crate::transactions::model::parse_stored_decimal;

#[derive(Queryable, Selectable, Insertable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::budgets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BudgetDB {
    pub id: String,
    pub user_id: String,
    pub category: String,
    pub limit_amount: String,
    pub period: String,
    pub created_at: NaiveDateTime,
}

impl TryFrom<BudgetDB> for Budget {
    type Error = Error;

    fn try_from(db: BudgetDB) -> Result<Self, Error> {
        Ok(Budget {
            limit: parse_stored_decimal(&db.limit_amount, "limit_amount")?,
            period: BudgetPeriod::from_str(&db.period)?,
            id: db.id,
            user_id: db.user_id,
            category: db.category,
            created_at: db.created_at.and_utc(),
        })
    }
}

impl From<&Budget> for BudgetDB {
    fn from(domain: &Budget) -> Self {
        BudgetDB {
            id: domain.id.clone(),
            user_id: domain.user_id.clone(),
            category: domain.category.clone(),
            limit_amount: domain.limit.to_string(),
            period: domain.period.as_str().to_string(),
            created_at: domain.created_at.naive_utc(),
        }
    }
}
