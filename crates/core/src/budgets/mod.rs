//! Budgets module - domain models, services, and traits.

mod budgets_model;
mod budgets_service;
mod budgets_traits;

pub use budgets_model::{Budget, BudgetPeriod, BudgetUpdate, BudgetWithSpent, NewBudget};
pub use budgets_service::{
    calculate_spent, BudgetService, BUDGET_ALREADY_EXISTS, BUDGET_NOT_FOUND,
};
pub use budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
