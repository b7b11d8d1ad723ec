//! User repository for database operations.

use domain::models::User;
use sqlx::PgPool;

use super::ReferenceError;
use crate::entities::{UserEntity, UserWithRoleEntity};
use crate::metrics::timed;

/// Column values for inserting or replacing a user.
#[derive(Debug, Clone, Copy)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub phone_no: Option<&'a str>,
    pub address: Option<&'a str>,
    pub password_hash: &'a str,
}

/// Repository for user database operations.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Finds a user by email (case-insensitive), including the password hash.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>, sqlx::Error> {
        timed(
            "find_user_by_email",
            sqlx::query_as::<_, UserEntity>(
                r#"
                SELECT user_id, username, email, phone_no, address, password_hash, role_id,
                       created_at, updated_at
                FROM users
                WHERE LOWER(email) = LOWER($1)
                "#,
            )
            .bind(email)
            .fetch_optional(&self.pool),
        )
        .await
    }

    pub async fn find_by_id(&self, user_id: i64) -> Result<Option<User>, sqlx::Error> {
        let entity = timed(
            "find_user_by_id",
            sqlx::query_as::<_, UserEntity>(
                r#"
                SELECT user_id, username, email, phone_no, address, password_hash, role_id,
                       created_at, updated_at
                FROM users
                WHERE user_id = $1
                "#,
            )
            .bind(user_id)
            .fetch_optional(&self.pool),
        )
        .await?;

        Ok(entity.map(Into::into))
    }

    /// Loads a user together with their role name.
    pub async fn find_with_role(
        &self,
        user_id: i64,
    ) -> Result<Option<UserWithRoleEntity>, sqlx::Error> {
        timed(
            "find_user_with_role",
            sqlx::query_as::<_, UserWithRoleEntity>(
                r#"
                SELECT u.user_id, u.username, u.email, u.phone_no, u.address, u.role_id,
                       r.role_name
                FROM users u
                JOIN role r ON r.role_id = u.role_id
                WHERE u.user_id = $1
                "#,
            )
            .bind(user_id)
            .fetch_optional(&self.pool),
        )
        .await
    }

    pub async fn list(&self) -> Result<Vec<User>, sqlx::Error> {
        let entities = timed(
            "list_users",
            sqlx::query_as::<_, UserEntity>(
                r#"
                SELECT user_id, username, email, phone_no, address, password_hash, role_id,
                       created_at, updated_at
                FROM users
                ORDER BY user_id
                "#,
            )
            .fetch_all(&self.pool),
        )
        .await?;

        Ok(entities.into_iter().map(Into::into).collect())
    }

    /// Inserts a user attached to the role with the given name.
    ///
    /// Fails with [`ReferenceError::Missing`] if no such role exists.
    pub async fn create_with_role_name(
        &self,
        user: NewUser<'_>,
        role_name: &str,
    ) -> Result<User, ReferenceError> {
        let mut tx = self.pool.begin().await?;

        let role_id = timed(
            "lock_role_by_name",
            sqlx::query_scalar::<_, i64>(
                "SELECT role_id FROM role WHERE role_name = $1 FOR KEY SHARE",
            )
            .bind(role_name)
            .fetch_optional(&mut *tx),
        )
        .await?
        .ok_or(ReferenceError::Missing("Role"))?;

        let entity = timed(
            "create_user",
            sqlx::query_as::<_, UserEntity>(
                r#"
                INSERT INTO users (username, email, phone_no, address, password_hash, role_id)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING user_id, username, email, phone_no, address, password_hash, role_id,
                          created_at, updated_at
                "#,
            )
            .bind(user.username)
            .bind(user.email)
            .bind(user.phone_no)
            .bind(user.address)
            .bind(user.password_hash)
            .bind(role_id)
            .fetch_one(&mut *tx),
        )
        .await?;

        tx.commit().await?;
        Ok(entity.into())
    }

    /// Replaces every column of a user. Returns `Ok(None)` if the user does not exist.
    pub async fn update(
        &self,
        user_id: i64,
        user: NewUser<'_>,
        role_id: i64,
    ) -> Result<Option<User>, ReferenceError> {
        let mut tx = self.pool.begin().await?;

        let role_exists = timed(
            "lock_role_by_id",
            sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS(SELECT 1 FROM role WHERE role_id = $1 FOR KEY SHARE)",
            )
            .bind(role_id)
            .fetch_one(&mut *tx),
        )
        .await?;

        if !role_exists {
            return Err(ReferenceError::Missing("Role"));
        }

        let entity = timed(
            "update_user",
            sqlx::query_as::<_, UserEntity>(
                r#"
                UPDATE users
                SET username = $2, email = $3, phone_no = $4, address = $5,
                    password_hash = $6, role_id = $7, updated_at = NOW()
                WHERE user_id = $1
                RETURNING user_id, username, email, phone_no, address, password_hash, role_id,
                          created_at, updated_at
                "#,
            )
            .bind(user_id)
            .bind(user.username)
            .bind(user.email)
            .bind(user.phone_no)
            .bind(user.address)
            .bind(user.password_hash)
            .bind(role_id)
            .fetch_optional(&mut *tx),
        )
        .await?;

        tx.commit().await?;
        Ok(entity.map(Into::into))
    }

    pub async fn delete(&self, user_id: i64) -> Result<bool, sqlx::Error> {
        let result = timed(
            "delete_user",
            sqlx::query("DELETE FROM users WHERE user_id = $1")
                .bind(user_id)
                .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        timed(
            "count_users",
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users").fetch_one(&self.pool),
        )
        .await
    }
}
