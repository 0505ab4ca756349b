use async_trait::async_trait;

use super::users_model::{LoginUser, NewUser, RegisterUser, User};
use crate::errors::Result;

#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn get_user(&self, user_id: &str) -> Result<Option<User>>;
    /// `email` must already be normalized.
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    /// Fails with `DatabaseError::UniqueViolation` when the email is taken.
    async fn insert_user(&self, new_user: NewUser) -> Result<User>;
}

/// Password hashing seam; the server plugs in argon2.
pub trait PasswordHasherTrait: Send + Sync {
    fn hash_password(&self, password: &str) -> Result<String>;
    fn verify_password(&self, password: &str, password_hash: &str) -> Result<bool>;
}

#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, input: RegisterUser) -> Result<User>;
    /// Fails with `Error::Unauthorized` for an unknown email or a wrong password.
    fn authenticate(&self, input: LoginUser) -> Result<User>;
    fn get_user(&self, user_id: &str) -> Result<User>;
}
