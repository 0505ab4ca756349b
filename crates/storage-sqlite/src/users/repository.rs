use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use spendtrack_core::users::{NewUser, User, UserRepositoryTrait};
use spendtrack_core::Result;

use super::model::UserDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::users;
use crate::schema::users::dsl::*;

pub struct UserRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        UserRepository { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let row = users
            .find(user_id)
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(User::from))
    }

    fn find_by_email(&self, address: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let row = users
            .filter(email.eq(address))
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(User::from))
    }

    async fn insert_user(&self, new_user: NewUser) -> Result<User> {
        let row = UserDB {
            id: Uuid::new_v4().to_string(),
            email: new_user.email,
            name: new_user.name,
            password_hash: new_user.password_hash,
            created_at: Utc::now().naive_utc(),
        };

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let inserted = diesel::insert_into(users::table)
                    .values(&row)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(User::from(inserted))
            })
            .await
    }
}
