use async_trait::async_trait;

use super::budgets_model::{Budget, BudgetUpdate, BudgetWithSpent, NewBudget};
use crate::errors::Result;

/// Trait for budget repository operations, scoped by `user_id`.
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    /// All of the user's budgets in creation order.
    fn get_budgets(&self, user_id: &str) -> Result<Vec<Budget>>;
    /// Fails with `DatabaseError::UniqueViolation` when the user already has a
    /// budget for the category.
    async fn insert_budget(&self, user_id: &str, new_budget: NewBudget) -> Result<Budget>;
    /// Returns `None` when no matching budget exists for the user.
    async fn update_budget(
        &self,
        user_id: &str,
        budget_id: &str,
        update: BudgetUpdate,
    ) -> Result<Option<Budget>>;
    async fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<usize>;
}

/// Trait for budget service operations.
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    fn get_budgets(&self, user_id: &str) -> Result<Vec<BudgetWithSpent>>;
    async fn create_budget(&self, user_id: &str, new_budget: NewBudget) -> Result<Budget>;
    async fn update_budget(
        &self,
        user_id: &str,
        budget_id: &str,
        update: BudgetUpdate,
    ) -> Result<Budget>;
    async fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<()>;
}
