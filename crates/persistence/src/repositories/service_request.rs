//! Service request repository for database operations.

use domain::models::{ServiceRequest, ServiceRequestPayload};
use sqlx::{PgPool, Postgres, Transaction};

use super::{first_missing, ReferenceError};
use crate::entities::{RequestStatusDb, RequestTypeDb, ServiceRequestEntity};
use crate::metrics::timed;

/// Repository for the requests table.
#[derive(Clone)]
pub struct ServiceRequestRepository {
    pool: PgPool,
}

impl ServiceRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn lock_references(
        tx: &mut Transaction<'_, Postgres>,
        input: &ServiceRequestPayload,
    ) -> Result<(), ReferenceError> {
        let (user_exists, wastebin_exists) = timed(
            "lock_request_references",
            sqlx::query_as::<_, (bool, bool)>(
                r#"
                SELECT
                    EXISTS(SELECT 1 FROM users WHERE user_id = $1 FOR KEY SHARE),
                    EXISTS(SELECT 1 FROM wastebin WHERE wastebin_id = $2 FOR KEY SHARE)
                "#,
            )
            .bind(input.user_id)
            .bind(input.wastebin_id)
            .fetch_one(&mut **tx),
        )
        .await?;

        first_missing(&[(user_exists, "User"), (wastebin_exists, "Wastebin")])
    }

    pub async fn create(
        &self,
        input: &ServiceRequestPayload,
    ) -> Result<ServiceRequest, ReferenceError> {
        let mut tx = self.pool.begin().await?;
        Self::lock_references(&mut tx, input).await?;

        let entity = timed(
            "create_request",
            sqlx::query_as::<_, ServiceRequestEntity>(
                r#"
                INSERT INTO requests (request_type, request_status, user_id, wastebin_id)
                VALUES ($1, $2, $3, $4)
                RETURNING request_id, request_type, request_status, user_id, wastebin_id
                "#,
            )
            .bind(RequestTypeDb::from(input.request_type))
            .bind(RequestStatusDb::from(input.request_status))
            .bind(input.user_id)
            .bind(input.wastebin_id)
            .fetch_one(&mut *tx),
        )
        .await?;

        tx.commit().await?;
        Ok(entity.into())
    }

    pub async fn list(&self) -> Result<Vec<ServiceRequest>, sqlx::Error> {
        let entities = timed(
            "list_requests",
            sqlx::query_as::<_, ServiceRequestEntity>(
                r#"
                SELECT request_id, request_type, request_status, user_id, wastebin_id
                FROM requests
                ORDER BY request_id
                "#,
            )
            .fetch_all(&self.pool),
        )
        .await?;

        Ok(entities.into_iter().map(Into::into).collect())
    }

    pub async fn find_by_id(&self, request_id: i64) -> Result<Option<ServiceRequest>, sqlx::Error> {
        let entity = timed(
            "find_request_by_id",
            sqlx::query_as::<_, ServiceRequestEntity>(
                r#"
                SELECT request_id, request_type, request_status, user_id, wastebin_id
                FROM requests
                WHERE request_id = $1
                "#,
            )
            .bind(request_id)
            .fetch_optional(&self.pool),
        )
        .await?;

        Ok(entity.map(Into::into))
    }

    pub async fn update(
        &self,
        request_id: i64,
        input: &ServiceRequestPayload,
    ) -> Result<Option<ServiceRequest>, ReferenceError> {
        let mut tx = self.pool.begin().await?;
        Self::lock_references(&mut tx, input).await?;

        let entity = timed(
            "update_request",
            sqlx::query_as::<_, ServiceRequestEntity>(
                r#"
                UPDATE requests
                SET request_type = $2, request_status = $3, user_id = $4, wastebin_id = $5
                WHERE request_id = $1
                RETURNING request_id, request_type, request_status, user_id, wastebin_id
                "#,
            )
            .bind(request_id)
            .bind(RequestTypeDb::from(input.request_type))
            .bind(RequestStatusDb::from(input.request_status))
            .bind(input.user_id)
            .bind(input.wastebin_id)
            .fetch_optional(&mut *tx),
        )
        .await?;

        tx.commit().await?;
        Ok(entity.map(Into::into))
    }

    pub async fn delete(&self, request_id: i64) -> Result<bool, sqlx::Error> {
        let result = timed(
            "delete_request",
            sqlx::query("DELETE FROM requests WHERE request_id = $1")
                .bind(request_id)
                .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        timed(
            "count_requests",
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM requests").fetch_one(&self.pool),
        )
        .await
    }

    /// Number of requests whose status is exactly `pending`.
    pub async fn count_pending(&self) -> Result<i64, sqlx::Error> {
        timed(
            "count_pending_requests",
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM requests WHERE request_status = $1")
                .bind(RequestStatusDb::Pending)
                .fetch_one(&self.pool),
        )
        .await
    }
}
