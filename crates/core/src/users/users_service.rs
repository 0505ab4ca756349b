use std::sync::Arc;

use async_trait::async_trait;
use log::info;

use super::users_model::{normalize_email, LoginUser, NewUser, RegisterUser, User};
use super::users_traits::{PasswordHasherTrait, UserRepositoryTrait, UserServiceTrait};
use crate::errors::{Error, Result};

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const USER_ALREADY_EXISTS: &str = "User already exists";
pub const USER_NOT_FOUND: &str = "User not found";

pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
    hasher: Arc<dyn PasswordHasherTrait>,
}

impl UserService {
    pub fn new(
        repository: Arc<dyn UserRepositoryTrait>,
        hasher: Arc<dyn PasswordHasherTrait>,
    ) -> Self {
        UserService { repository, hasher }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn register(&self, input: RegisterUser) -> Result<User> {
        let input = input.normalized()?;
        if self.repository.find_by_email(&input.email)?.is_some() {
            return Err(Error::Conflict(USER_ALREADY_EXISTS.to_string()));
        }
        let password_hash = self.hasher.hash_password(&input.password)?;
        let user = self
            .repository
            .insert_user(NewUser {
                email: input.email,
                name: input.name,
                password_hash,
            })
            .await
            .map_err(|err| err.unique_violation_as_conflict(USER_ALREADY_EXISTS))?;
        info!("Registered user {}", user.id);
        Ok(user)
    }

    fn authenticate(&self, input: LoginUser) -> Result<User> {
        let email = normalize_email(&input.email);
        let user = self
            .repository
            .find_by_email(&email)?
            .ok_or_else(|| Error::Unauthorized(INVALID_CREDENTIALS.to_string()))?;
        if !self
            .hasher
            .verify_password(&input.password, &user.password_hash)?
        {
            return Err(Error::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }
        Ok(user)
    }

    fn get_user(&self, user_id: &str) -> Result<User> {
        self.repository
            .get_user(user_id)?
            .ok_or_else(|| Error::NotFound(USER_NOT_FOUND.to_string()))
    }
}
