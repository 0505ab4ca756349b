//! Transactions module - domain models, services, and traits.

mod transactions_model;
mod transactions_service;
mod transactions_traits;

pub use transactions_model::{NewTransaction, Transaction, TransactionType, TransactionUpdate};
pub use transactions_service::{TransactionService, TRANSACTION_NOT_FOUND};
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
