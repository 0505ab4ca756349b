use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use spendtrack_core::budgets::{Budget, BudgetRepositoryTrait, BudgetUpdate, NewBudget};
use spendtrack_core::Result;

use super::model::BudgetDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::budgets;
use crate::schema::budgets::dsl::*;

pub struct BudgetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BudgetRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        BudgetRepository { pool, writer }
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    fn get_budgets(&self, owner: &str) -> Result<Vec<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        budgets
            .filter(user_id.eq(owner))
            .order((created_at.asc(), id.asc()))
            .select(BudgetDB::as_select())
            .load::<BudgetDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(Budget::try_from)
            .collect()
    }

    async fn insert_budget(&self, owner: &str, new_budget: NewBudget) -> Result<Budget> {
        let row = BudgetDB::from(&Budget {
            id: Uuid::new_v4().to_string(),
            user_id: owner.to_string(),
            period: new_budget.period_or_default(),
            category: new_budget.category,
            limit: new_budget.limit,
            created_at: Utc::now(),
        });

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Budget> {
                let inserted = diesel::insert_into(budgets::table)
                    .values(&row)
                    .returning(BudgetDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Budget::try_from(inserted)
            })
            .await
    }

    async fn update_budget(
        &self,
        owner: &str,
        budget_id: &str,
        update: BudgetUpdate,
    ) -> Result<Option<Budget>> {
        let owner = owner.to_string();
        let budget_id = budget_id.to_string();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Option<Budget>> {
                let existing = budgets
                    .filter(user_id.eq(&owner))
                    .filter(id.eq(&budget_id))
                    .select(BudgetDB::as_select())
                    .first::<BudgetDB>(conn)
                    .optional()
                    .into_core()?;
                let Some(existing) = existing else {
                    return Ok(None);
                };

                let merged = update.apply_to(Budget::try_from(existing)?);
                let updated = diesel::update(budgets.filter(user_id.eq(&owner)).filter(id.eq(&budget_id)))
                    .set((
                        limit_amount.eq(merged.limit.to_string()),
                        period.eq(merged.period.as_str()),
                    ))
                    .returning(BudgetDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Budget::try_from(updated).map(Some)
            })
            .await
    }

    async fn delete_budget(&self, owner: &str, budget_id: &str) -> Result<usize> {
        let owner = owner.to_string();
        let budget_id = budget_id.to_string();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(budgets.filter(user_id.eq(&owner)).filter(id.eq(&budget_id)))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
