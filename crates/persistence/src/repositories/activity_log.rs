//! Activity log repository for database operations.

use chrono::{DateTime, Utc};
use domain::models::ActivityLog;
use sqlx::PgPool;

use super::ReferenceError;
use crate::entities::ActivityLogEntity;
use crate::metrics::timed;

/// Repository for activity log database operations.
#[derive(Clone)]
pub struct ActivityLogRepository {
    pool: PgPool,
}

impl ActivityLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Records an action for an existing user. Without a timestamp the row
    /// is stamped with the database clock.
    pub async fn create(
        &self,
        user_id: i64,
        action: &str,
        timestamp: Option<DateTime<Utc>>,
    ) -> Result<ActivityLog, ReferenceError> {
        let mut tx = self.pool.begin().await?;

        let user_exists = timed(
            "lock_activity_user",
            sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS(SELECT 1 FROM users WHERE user_id = $1 FOR KEY SHARE)",
            )
            .bind(user_id)
            .fetch_one(&mut *tx),
        )
        .await?;

        if !user_exists {
            return Err(ReferenceError::Missing("User"));
        }

        let entity = timed(
            "create_activity_log",
            sqlx::query_as::<_, ActivityLogEntity>(
                r#"
                INSERT INTO activitylog (action, user_id, "timestamp")
                VALUES ($1, $2, COALESCE($3, NOW()))
                RETURNING log_id, action, "timestamp", user_id
                "#,
            )
            .bind(action)
            .bind(user_id)
            .bind(timestamp)
            .fetch_one(&mut *tx),
        )
        .await?;

        tx.commit().await?;
        Ok(entity.into())
    }

    pub async fn list(&self) -> Result<Vec<ActivityLog>, sqlx::Error> {
        let entities = timed(
            "list_activity_logs",
            sqlx::query_as::<_, ActivityLogEntity>(
                r#"SELECT log_id, action, "timestamp", user_id FROM activitylog ORDER BY log_id"#,
            )
            .fetch_all(&self.pool),
        )
        .await?;

        Ok(entities.into_iter().map(Into::into).collect())
    }

    pub async fn find_by_id(&self, log_id: i64) -> Result<Option<ActivityLog>, sqlx::Error> {
        let entity = timed(
            "find_activity_log_by_id",
            sqlx::query_as::<_, ActivityLogEntity>(
                r#"SELECT log_id, action, "timestamp", user_id FROM activitylog WHERE log_id = $1"#,
            )
            .bind(log_id)
            .fetch_optional(&self.pool),
        )
        .await?;

        Ok(entity.map(Into::into))
    }

    pub async fn delete(&self, log_id: i64) -> Result<bool, sqlx::Error> {
        let result = timed(
            "delete_activity_log",
            sqlx::query("DELETE FROM activitylog WHERE log_id = $1")
                .bind(log_id)
                .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
