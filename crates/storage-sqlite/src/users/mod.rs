//! SQLite storage implementation for users.

mod model;
mod repository;

pub use repository::UserRepository;
