//! SQLite storage implementation for transactions.

pub(crate) mod model;
mod repository;

pub use repository::TransactionRepository;
