//! Permission repository for database operations.

use domain::models::{Permission, PermissionRequest};
use sqlx::PgPool;

use crate::entities::PermissionEntity;
use crate::metrics::timed;

/// Repository for permission database operations.
#[derive(Clone)]
pub struct PermissionRepository {
    pool: PgPool,
}

impl PermissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: &PermissionRequest) -> Result<Permission, sqlx::Error> {
        let entity = timed(
            "create_permission",
            sqlx::query_as::<_, PermissionEntity>(
                r#"
                INSERT INTO permission (permission_name, description)
                VALUES ($1, $2)
                RETURNING permission_id, permission_name, description
                "#,
            )
            .bind(&input.permission_name)
            .bind(&input.description)
            .fetch_one(&self.pool),
        )
        .await?;

        Ok(entity.into())
    }

    /// Inserts the permission if its name is new. Existing descriptions are kept.
    pub async fn ensure(&self, name: &str, description: &str) -> Result<Permission, sqlx::Error> {
        let entity = timed(
            "ensure_permission",
            sqlx::query_as::<_, PermissionEntity>(
                r#"
                INSERT INTO permission (permission_name, description)
                VALUES ($1, $2)
                ON CONFLICT (permission_name)
                DO UPDATE SET description = COALESCE(permission.description, EXCLUDED.description)
                RETURNING permission_id, permission_name, description
                "#,
            )
            .bind(name)
            .bind(description)
            .fetch_one(&self.pool),
        )
        .await?;

        Ok(entity.into())
    }

    pub async fn list(&self) -> Result<Vec<Permission>, sqlx::Error> {
        let entities = timed(
            "list_permissions",
            sqlx::query_as::<_, PermissionEntity>(
                r#"
                SELECT permission_id, permission_name, description
                FROM permission
                ORDER BY permission_id
                "#,
            )
            .fetch_all(&self.pool),
        )
        .await?;

        Ok(entities.into_iter().map(Into::into).collect())
    }

    pub async fn find_by_id(&self, permission_id: i64) -> Result<Option<Permission>, sqlx::Error> {
        let entity = timed(
            "find_permission_by_id",
            sqlx::query_as::<_, PermissionEntity>(
                r#"
                SELECT permission_id, permission_name, description
                FROM permission
                WHERE permission_id = $1
                "#,
            )
            .bind(permission_id)
            .fetch_optional(&self.pool),
        )
        .await?;

        Ok(entity.map(Into::into))
    }

    pub async fn update(
        &self,
        permission_id: i64,
        input: &PermissionRequest,
    ) -> Result<Option<Permission>, sqlx::Error> {
        let entity = timed(
            "update_permission",
            sqlx::query_as::<_, PermissionEntity>(
                r#"
                UPDATE permission
                SET permission_name = $2, description = $3
                WHERE permission_id = $1
                RETURNING permission_id, permission_name, description
                "#,
            )
            .bind(permission_id)
            .bind(&input.permission_name)
            .bind(&input.description)
            .fetch_optional(&self.pool),
        )
        .await?;

        Ok(entity.map(Into::into))
    }

    pub async fn delete(&self, permission_id: i64) -> Result<bool, sqlx::Error> {
        let result = timed(
            "delete_permission",
            sqlx::query("DELETE FROM permission WHERE permission_id = $1")
                .bind(permission_id)
                .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Names of every permission granted to a role.
    pub async fn names_for_role(&self, role_id: i64) -> Result<Vec<String>, sqlx::Error> {
        timed(
            "permission_names_for_role",
            sqlx::query_scalar::<_, String>(
                r#"
                SELECT p.permission_name
                FROM role_permission rp
                JOIN permission p ON p.permission_id = rp.permission_id
                WHERE rp.role_id = $1
                "#,
            )
            .bind(role_id)
            .fetch_all(&self.pool),
        )
        .await
    }
}
