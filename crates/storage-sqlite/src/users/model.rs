use chrono::NaiveDateTime;
use diesel::prelude::*;

use spendtrack_core::users::User;

#[derive(Queryable, Selectable, Insertable, Identifiable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        User {
            id: db.id,
            email: db.email,
            name: db.name,
            password_hash: db.password_hash,
            created_at: db.created_at.and_utc(),
        }
    }
}
