//! Collection repository for database operations.

use domain::models::{Collection, CollectionRequest};
use sqlx::{PgPool, Postgres, Transaction};

use super::{first_missing, ReferenceError};
use crate::entities::{CollectionEntity, CompletionStatusDb};
use crate::metrics::timed;

/// Repository for collection database operations.
#[derive(Clone)]
pub struct CollectionRepository {
    pool: PgPool,
}

impl CollectionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn lock_references(
        tx: &mut Transaction<'_, Postgres>,
        input: &CollectionRequest,
    ) -> Result<(), ReferenceError> {
        let (schedule_exists, route_exists) = timed(
            "lock_collection_references",
            sqlx::query_as::<_, (bool, bool)>(
                r#"
                SELECT
                    EXISTS(SELECT 1 FROM collectionschedule WHERE schedule_id = $1 FOR KEY SHARE),
                    EXISTS(SELECT 1 FROM route WHERE route_id = $2 FOR KEY SHARE)
                "#,
            )
            .bind(input.schedule_id)
            .bind(input.route_id)
            .fetch_one(&mut **tx),
        )
        .await?;

        first_missing(&[
            (schedule_exists, "Collection schedule"),
            (route_exists, "Route"),
        ])
    }

    pub async fn create(&self, input: &CollectionRequest) -> Result<Collection, ReferenceError> {
        let mut tx = self.pool.begin().await?;
        Self::lock_references(&mut tx, input).await?;

        let entity = timed(
            "create_collection",
            sqlx::query_as::<_, CollectionEntity>(
                r#"
                INSERT INTO collection (completion_status, schedule_id, route_id)
                VALUES ($1, $2, $3)
                RETURNING collection_id, completion_status, schedule_id, route_id
                "#,
            )
            .bind(CompletionStatusDb::from(input.completion_status))
            .bind(input.schedule_id)
            .bind(input.route_id)
            .fetch_one(&mut *tx),
        )
        .await?;

        tx.commit().await?;
        Ok(entity.into())
    }

    pub async fn list(&self) -> Result<Vec<Collection>, sqlx::Error> {
        let entities = timed(
            "list_collections",
            sqlx::query_as::<_, CollectionEntity>(
                r#"
                SELECT collection_id, completion_status, schedule_id, route_id
                FROM collection
                ORDER BY collection_id
                "#,
            )
            .fetch_all(&self.pool),
        )
        .await?;

        Ok(entities.into_iter().map(Into::into).collect())
    }

    pub async fn find_by_id(&self, collection_id: i64) -> Result<Option<Collection>, sqlx::Error> {
        let entity = timed(
            "find_collection_by_id",
            sqlx::query_as::<_, CollectionEntity>(
                r#"
                SELECT collection_id, completion_status, schedule_id, route_id
                FROM collection
                WHERE collection_id = $1
                "#,
            )
            .bind(collection_id)
            .fetch_optional(&self.pool),
        )
        .await?;

        Ok(entity.map(Into::into))
    }

    pub async fn update(
        &self,
        collection_id: i64,
        input: &CollectionRequest,
    ) -> Result<Option<Collection>, ReferenceError> {
        let mut tx = self.pool.begin().await?;
        Self::lock_references(&mut tx, input).await?;

        let entity = timed(
            "update_collection",
            sqlx::query_as::<_, CollectionEntity>(
                r#"
                UPDATE collection
                SET completion_status = $2, schedule_id = $3, route_id = $4
                WHERE collection_id = $1
                RETURNING collection_id, completion_status, schedule_id, route_id
                "#,
            )
            .bind(collection_id)
            .bind(CompletionStatusDb::from(input.completion_status))
            .bind(input.schedule_id)
            .bind(input.route_id)
            .fetch_optional(&mut *tx),
        )
        .await?;

        tx.commit().await?;
        Ok(entity.map(Into::into))
    }

    pub async fn delete(&self, collection_id: i64) -> Result<bool, sqlx::Error> {
        let result = timed(
            "delete_collection",
            sqlx::query("DELETE FROM collection WHERE collection_id = $1")
                .bind(collection_id)
                .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        timed(
            "count_collections",
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM collection").fetch_one(&self.pool),
        )
        .await
    }

    /// Number of collections whose status is exactly `completed`.
    pub async fn count_completed(&self) -> Result<i64, sqlx::Error> {
        timed(
            "count_completed_collections",
            sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM collection WHERE completion_status = $1",
            )
            .bind(CompletionStatusDb::Completed)
            .fetch_one(&self.pool),
        )
        .await
    }
}
