//! SQLite storage implementation for Spendtrack.
//!
//! This crate is the only place where Diesel appears. It implements the
//! repository traits defined in `spendtrack-core` and owns:
//! - connection pooling and the single-writer actor
//! - embedded Diesel migrations
//! - database model types and their conversions to domain models
//!
//! ```text
//!   core (domain, traits)
//!           │
//!           ▼
//!   storage-sqlite (this crate)
//!           │
//!           ▼
//!       SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod budgets;
pub mod transactions;
pub mod users;

#[cfg(test)]
mod test_support;

pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

pub use errors::{IntoCore, StorageError};

pub use budgets::BudgetRepository;
pub use transactions::TransactionRepository;
pub use users::UserRepository;

// Re-export from spendtrack-core for convenience
pub use spendtrack_core::errors::{DatabaseError, Error, Result};
