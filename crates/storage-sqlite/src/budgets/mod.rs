//! SQLite storage implementation for budgets.

mod model;
mod repository;

pub use repository::BudgetRepository;
