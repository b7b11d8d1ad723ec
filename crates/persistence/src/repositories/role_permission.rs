//! Role/permission grant repository.

use domain::models::RolePermission;
use sqlx::PgPool;

use super::{first_missing, ReferenceError};
use crate::entities::RolePermissionEntity;
use crate::metrics::timed;

/// Repository for the role_permission join table.
#[derive(Clone)]
pub struct RolePermissionRepository {
    pool: PgPool,
}

impl RolePermissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Grants a permission to a role. An existing grant is a unique violation.
    pub async fn grant(
        &self,
        role_id: i64,
        permission_id: i64,
    ) -> Result<RolePermission, ReferenceError> {
        let mut tx = self.pool.begin().await?;

        let (role_exists, permission_exists) = timed(
            "lock_grant_references",
            sqlx::query_as::<_, (bool, bool)>(
                r#"
                SELECT
                    EXISTS(SELECT 1 FROM role WHERE role_id = $1 FOR KEY SHARE),
                    EXISTS(SELECT 1 FROM permission WHERE permission_id = $2 FOR KEY SHARE)
                "#,
            )
            .bind(role_id)
            .bind(permission_id)
            .fetch_one(&mut *tx),
        )
        .await?;

        first_missing(&[(role_exists, "Role"), (permission_exists, "Permission")])?;

        let entity = timed(
            "grant_permission",
            sqlx::query_as::<_, RolePermissionEntity>(
                r#"
                INSERT INTO role_permission (role_id, permission_id)
                VALUES ($1, $2)
                RETURNING role_id, permission_id
                "#,
            )
            .bind(role_id)
            .bind(permission_id)
            .fetch_one(&mut *tx),
        )
        .await?;

        tx.commit().await?;
        Ok(entity.into())
    }

    /// Grants every named permission to a role, skipping grants that exist.
    /// Returns the number of new grants.
    pub async fn grant_by_names(&self, role_id: i64, names: &[String]) -> Result<u64, sqlx::Error> {
        let result = timed(
            "grant_permissions_by_name",
            sqlx::query(
                r#"
                INSERT INTO role_permission (role_id, permission_id)
                SELECT $1, permission_id FROM permission WHERE permission_name = ANY($2)
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(role_id)
            .bind(names)
            .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn list(&self) -> Result<Vec<RolePermission>, sqlx::Error> {
        let entities = timed(
            "list_grants",
            sqlx::query_as::<_, RolePermissionEntity>(
                "SELECT role_id, permission_id FROM role_permission ORDER BY role_id, permission_id",
            )
            .fetch_all(&self.pool),
        )
        .await?;

        Ok(entities.into_iter().map(Into::into).collect())
    }

    pub async fn find(
        &self,
        role_id: i64,
        permission_id: i64,
    ) -> Result<Option<RolePermission>, sqlx::Error> {
        let entity = timed(
            "find_grant",
            sqlx::query_as::<_, RolePermissionEntity>(
                r#"
                SELECT role_id, permission_id
                FROM role_permission
                WHERE role_id = $1 AND permission_id = $2
                "#,
            )
            .bind(role_id)
            .bind(permission_id)
            .fetch_optional(&self.pool),
        )
        .await?;

        Ok(entity.map(Into::into))
    }

    /// Every grant of one permission, ordered by role.
    pub async fn list_by_permission(
        &self,
        permission_id: i64,
    ) -> Result<Vec<RolePermission>, sqlx::Error> {
        let entities = timed(
            "list_grants_by_permission",
            sqlx::query_as::<_, RolePermissionEntity>(
                r#"
                SELECT role_id, permission_id
                FROM role_permission
                WHERE permission_id = $1
                ORDER BY role_id
                "#,
            )
            .bind(permission_id)
            .fetch_all(&self.pool),
        )
        .await?;

        Ok(entities.into_iter().map(Into::into).collect())
    }

    pub async fn revoke(&self, role_id: i64, permission_id: i64) -> Result<bool, sqlx::Error> {
        let result = timed(
            "revoke_grant",
            sqlx::query("DELETE FROM role_permission WHERE role_id = $1 AND permission_id = $2")
                .bind(role_id)
                .bind(permission_id)
                .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
