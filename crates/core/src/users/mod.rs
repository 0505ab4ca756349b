//! Users module - identities that own transactions and budgets.

mod users_model;
mod users_service;
mod users_traits;

pub use users_model::{
    normalize_email, LoginUser, NewUser, RegisterUser, User, MIN_PASSWORD_LENGTH,
};
pub use users_service::{UserService, INVALID_CREDENTIALS, USER_ALREADY_EXISTS, USER_NOT_FOUND};
pub use users_traits::{PasswordHasherTrait, UserRepositoryTrait, UserServiceTrait};
