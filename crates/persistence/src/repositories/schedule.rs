//! Collection schedule repository for database operations.

use domain::models::{CollectionSchedule, ScheduleRequest};
use sqlx::{PgPool, Postgres, Transaction};

use super::{first_missing, ReferenceError};
use crate::entities::CollectionScheduleEntity;
use crate::metrics::timed;

/// Repository for collection schedule database operations.
#[derive(Clone)]
pub struct ScheduleRepository {
    pool: PgPool,
}

impl ScheduleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Locks the referenced bin and truck, failing on the first one missing.
    async fn lock_references(
        tx: &mut Transaction<'_, Postgres>,
        input: &ScheduleRequest,
    ) -> Result<(), ReferenceError> {
        let (wastebin_exists, truck_exists) = timed(
            "lock_schedule_references",
            sqlx::query_as::<_, (bool, bool)>(
                r#"
                SELECT
                    EXISTS(SELECT 1 FROM wastebin WHERE wastebin_id = $1 FOR KEY SHARE),
                    EXISTS(SELECT 1 FROM garbagetruck WHERE truck_id = $2 FOR KEY SHARE)
                "#,
            )
            .bind(input.wastebin_id)
            .bind(input.truck_id)
            .fetch_one(&mut **tx),
        )
        .await?;

        first_missing(&[(wastebin_exists, "Wastebin"), (truck_exists, "Garbage truck")])
    }

    pub async fn create(
        &self,
        input: &ScheduleRequest,
    ) -> Result<CollectionSchedule, ReferenceError> {
        let mut tx = self.pool.begin().await?;
        Self::lock_references(&mut tx, input).await?;

        let entity = timed(
            "create_schedule",
            sqlx::query_as::<_, CollectionScheduleEntity>(
                r#"
                INSERT INTO collectionschedule (collection_time, wastebin_id, truck_id)
                VALUES ($1, $2, $3)
                RETURNING schedule_id, collection_time, wastebin_id, truck_id
                "#,
            )
            .bind(input.collection_time)
            .bind(input.wastebin_id)
            .bind(input.truck_id)
            .fetch_one(&mut *tx),
        )
        .await?;

        tx.commit().await?;
        Ok(entity.into())
    }

    pub async fn list(&self) -> Result<Vec<CollectionSchedule>, sqlx::Error> {
        let entities = timed(
            "list_schedules",
            sqlx::query_as::<_, CollectionScheduleEntity>(
                r#"
                SELECT schedule_id, collection_time, wastebin_id, truck_id
                FROM collectionschedule
                ORDER BY schedule_id
                "#,
            )
            .fetch_all(&self.pool),
        )
        .await?;

        Ok(entities.into_iter().map(Into::into).collect())
    }

    pub async fn find_by_id(
        &self,
        schedule_id: i64,
    ) -> Result<Option<CollectionSchedule>, sqlx::Error> {
        let entity = timed(
            "find_schedule_by_id",
            sqlx::query_as::<_, CollectionScheduleEntity>(
                r#"
                SELECT schedule_id, collection_time, wastebin_id, truck_id
                FROM collectionschedule
                WHERE schedule_id = $1
                "#,
            )
            .bind(schedule_id)
            .fetch_optional(&self.pool),
        )
        .await?;

        Ok(entity.map(Into::into))
    }

    /// Returns `Ok(None)` when the schedule itself does not exist.
    pub async fn update(
        &self,
        schedule_id: i64,
        input: &ScheduleRequest,
    ) -> Result<Option<CollectionSchedule>, ReferenceError> {
        let mut tx = self.pool.begin().await?;
        Self::lock_references(&mut tx, input).await?;

        let entity = timed(
            "update_schedule",
            sqlx::query_as::<_, CollectionScheduleEntity>(
                r#"
                UPDATE collectionschedule
                SET collection_time = $2, wastebin_id = $3, truck_id = $4
                WHERE schedule_id = $1
                RETURNING schedule_id, collection_time, wastebin_id, truck_id
                "#,
            )
            .bind(schedule_id)
            .bind(input.collection_time)
            .bind(input.wastebin_id)
            .bind(input.truck_id)
            .fetch_optional(&mut *tx),
        )
        .await?;

        tx.commit().await?;
        Ok(entity.map(Into::into))
    }

    pub async fn delete(&self, schedule_id: i64) -> Result<bool, sqlx::Error> {
        let result = timed(
            "delete_schedule",
            sqlx::query("DELETE FROM collectionschedule WHERE schedule_id = $1")
                .bind(schedule_id)
                .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
