//! Role repository for database operations.

use domain::models::{Permission, Role};
use sqlx::PgPool;

use crate::entities::{PermissionEntity, RoleEntity};
use crate::metrics::timed;

/// Repository for role database operations.
#[derive(Clone)]
pub struct RoleRepository {
    pool: PgPool,
}

impl RoleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, role_name: &str) -> Result<Role, sqlx::Error> {
        let entity = timed(
            "create_role",
            sqlx::query_as::<_, RoleEntity>(
                "INSERT INTO role (role_name) VALUES ($1) RETURNING role_id, role_name",
            )
            .bind(role_name)
            .fetch_one(&self.pool),
        )
        .await?;

        Ok(entity.into())
    }

    /// Returns the role with this name, creating it if needed.
    pub async fn ensure(&self, role_name: &str) -> Result<Role, sqlx::Error> {
        let entity = timed(
            "ensure_role",
            sqlx::query_as::<_, RoleEntity>(
                r#"
                INSERT INTO role (role_name) VALUES ($1)
                ON CONFLICT (role_name) DO UPDATE SET role_name = EXCLUDED.role_name
                RETURNING role_id, role_name
                "#,
            )
            .bind(role_name)
            .fetch_one(&self.pool),
        )
        .await?;

        Ok(entity.into())
    }

    pub async fn list(&self) -> Result<Vec<Role>, sqlx::Error> {
        let entities = timed(
            "list_roles",
            sqlx::query_as::<_, RoleEntity>("SELECT role_id, role_name FROM role ORDER BY role_id")
                .fetch_all(&self.pool),
        )
        .await?;

        Ok(entities.into_iter().map(Into::into).collect())
    }

    pub async fn find_by_id(&self, role_id: i64) -> Result<Option<Role>, sqlx::Error> {
        let entity = timed(
            "find_role_by_id",
            sqlx::query_as::<_, RoleEntity>("SELECT role_id, role_name FROM role WHERE role_id = $1")
                .bind(role_id)
                .fetch_optional(&self.pool),
        )
        .await?;

        Ok(entity.map(Into::into))
    }

    pub async fn update(&self, role_id: i64, role_name: &str) -> Result<Option<Role>, sqlx::Error> {
        let entity = timed(
            "update_role",
            sqlx::query_as::<_, RoleEntity>(
                "UPDATE role SET role_name = $2 WHERE role_id = $1 RETURNING role_id, role_name",
            )
            .bind(role_id)
            .bind(role_name)
            .fetch_optional(&self.pool),
        )
        .await?;

        Ok(entity.map(Into::into))
    }

    /// Deletes a role. Its grants go with it; users holding it block the delete.
    pub async fn delete(&self, role_id: i64) -> Result<bool, sqlx::Error> {
        let result = timed(
            "delete_role",
            sqlx::query("DELETE FROM role WHERE role_id = $1")
                .bind(role_id)
                .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Permissions granted to a role, ordered by id.
    pub async fn permissions(&self, role_id: i64) -> Result<Vec<Permission>, sqlx::Error> {
        let entities = timed(
            "list_role_permissions",
            sqlx::query_as::<_, PermissionEntity>(
                r#"
                SELECT p.permission_id, p.permission_name, p.description
                FROM permission p
                JOIN role_permission rp ON rp.permission_id = p.permission_id
                WHERE rp.role_id = $1
                ORDER BY p.permission_id
                "#,
            )
            .bind(role_id)
            .fetch_all(&self.pool),
        )
        .await?;

        Ok(entities.into_iter().map(Into::into).collect())
    }
}
