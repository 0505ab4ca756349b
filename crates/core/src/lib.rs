//! Spendtrack Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic of the personal finance backend:
//! transactions, per-category budgets with derived spending, and weekly/monthly
//! expense reports. It is database-agnostic and defines repository traits that
//! are implemented by the `storage-sqlite` crate.
//!
//! Every service operation is scoped by the authenticated user's id.

pub mod budgets;
pub mod errors;
pub mod reports;
pub mod transactions;
pub mod users;
pub mod utils;

#[cfg(test)]
mod testing;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
