//! User entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the users table.
///
/// Carries the password hash; convert to [`domain::models::User`] before
/// handing the row to anything that serializes.
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub phone_no: Option<String>,
    pub address: Option<String>,
    pub password_hash: String,
    pub role_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserEntity> for domain::models::User {
    fn from(entity: UserEntity) -> Self {
        Self {
            user_id: entity.user_id,
            username: entity.username,
            email: entity.email,
            phone_no: entity.phone_no,
            address: entity.address,
            role_id: entity.role_id,
        }
    }
}

/// A user joined with their role name, used to build the request caller.
#[derive(Debug, Clone, FromRow)]
pub struct UserWithRoleEntity {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub phone_no: Option<String>,
    pub address: Option<String>,
    pub role_id: i64,
    pub role_name: String,
}

impl UserWithRoleEntity {
    /// Splits the row into the public user and the role name.
    pub fn into_parts(self) -> (domain::models::User, String) {
        let user = domain::models::User {
            user_id: self.user_id,
            username: self.username,
            email: self.email,
            phone_no: self.phone_no,
            address: self.address,
            role_id: self.role_id,
        };
        (user, self.role_name)
    }
}
