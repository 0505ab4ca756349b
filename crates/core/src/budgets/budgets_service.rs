use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info};
use rust_decimal::Decimal;

use super::budgets_model::{Budget, BudgetUpdate, BudgetWithSpent, NewBudget};
use super::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::errors::{Error, Result};
use crate::transactions::{Transaction, TransactionRepositoryTrait};
use crate::utils::decimal_utils::checked_sum;

pub const BUDGET_NOT_FOUND: &str = "Budget not found";
pub const BUDGET_ALREADY_EXISTS: &str = "Budget for this category already exists";

/// Sums the expenses matching the budget's category inside its window ending at `now`.
pub fn calculate_spent(
    budget: &Budget,
    expenses: &[Transaction],
    now: DateTime<Utc>,
) -> Result<Decimal> {
    let start = budget.period.window_start(now);
    checked_sum(
        expenses
            .iter()
            .filter(|t| t.is_expense() && t.category == budget.category && t.date >= start)
            .map(|t| t.amount),
    )
}

/// Service for managing budgets and deriving how much of each has been spent.
pub struct BudgetService {
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl BudgetService {
    pub fn new(
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    ) -> Self {
        BudgetService {
            budget_repository,
            transaction_repository,
        }
    }

    pub(crate) fn get_budgets_at(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<BudgetWithSpent>> {
        let budgets = self.budget_repository.get_budgets(user_id)?;
        let Some(earliest) = budgets.iter().map(|b| b.period.window_start(now)).min() else {
            return Ok(Vec::new());
        };

        // One read covering the widest window, then per-budget filtering.
        let expenses = self
            .transaction_repository
            .get_expenses_since(user_id, earliest)?;

        budgets
            .into_iter()
            .map(|budget| -> Result<BudgetWithSpent> {
                let spent = calculate_spent(&budget, &expenses, now)?;
                Ok(BudgetWithSpent { budget, spent })
            })
            .collect()
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    fn get_budgets(&self, user_id: &str) -> Result<Vec<BudgetWithSpent>> {
        self.get_budgets_at(user_id, Utc::now())
    }

    async fn create_budget(&self, user_id: &str, new_budget: NewBudget) -> Result<Budget> {
        let mut input = new_budget.normalized()?;
        input.period = Some(input.period_or_default());
        debug!(
            "Creating {} budget for '{}' (user {})",
            input.period_or_default(),
            input.category,
            user_id
        );
        self.budget_repository
            .insert_budget(user_id, input)
            .await
            .map_err(|err| {
                let err = err.unique_violation_as_conflict(BUDGET_ALREADY_EXISTS);
                if matches!(err, Error::Conflict(_)) {
                    info!("Rejected duplicate budget category for user {}", user_id);
                }
                err
            })
    }

    async fn update_budget(
        &self,
        user_id: &str,
        budget_id: &str,
        update: BudgetUpdate,
    ) -> Result<Budget> {
        self.budget_repository
            .update_budget(user_id, budget_id, update)
            .await?
            .ok_or_else(|| Error::NotFound(BUDGET_NOT_FOUND.to_string()))
    }

    async fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<()> {
        let deleted = self
            .budget_repository
            .delete_budget(user_id, budget_id)
            .await?;
        if deleted == 0 {
            return Err(Error::NotFound(BUDGET_NOT_FOUND.to_string()));
        }
        Ok(())
    }
}
