//! Wastebin repository for database operations.

use domain::models::{Wastebin, WastebinRequest};
use sqlx::PgPool;

use crate::entities::{WastebinEntity, WastebinStatusDb};
use crate::metrics::timed;

/// Repository for wastebin database operations.
#[derive(Clone)]
pub struct WastebinRepository {
    pool: PgPool,
}

impl WastebinRepository {
    /// Creates a new WastebinRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: &WastebinRequest) -> Result<Wastebin, sqlx::Error> {
        let entity = timed(
            "create_wastebin",
            sqlx::query_as::<_, WastebinEntity>(
                r#"
                INSERT INTO wastebin (bin_location, bin_status, bin_capacity)
                VALUES ($1, $2, $3)
                RETURNING wastebin_id, bin_location, bin_status, bin_capacity
                "#,
            )
            .bind(&input.bin_location)
            .bind(WastebinStatusDb::from(input.bin_status))
            .bind(input.bin_capacity)
            .fetch_one(&self.pool),
        )
        .await?;

        Ok(entity.into())
    }

    pub async fn list(&self) -> Result<Vec<Wastebin>, sqlx::Error> {
        let entities = timed(
            "list_wastebins",
            sqlx::query_as::<_, WastebinEntity>(
                r#"
                SELECT wastebin_id, bin_location, bin_status, bin_capacity
                FROM wastebin
                ORDER BY wastebin_id
                "#,
            )
            .fetch_all(&self.pool),
        )
        .await?;

        Ok(entities.into_iter().map(Into::into).collect())
    }

    pub async fn find_by_id(&self, wastebin_id: i64) -> Result<Option<Wastebin>, sqlx::Error> {
        let entity = timed(
            "find_wastebin_by_id",
            sqlx::query_as::<_, WastebinEntity>(
                r#"
                SELECT wastebin_id, bin_location, bin_status, bin_capacity
                FROM wastebin
                WHERE wastebin_id = $1
                "#,
            )
            .bind(wastebin_id)
            .fetch_optional(&self.pool),
        )
        .await?;

        Ok(entity.map(Into::into))
    }

    /// Replaces every mutable field. Returns `None` if the bin does not exist.
    pub async fn update(
        &self,
        wastebin_id: i64,
        input: &WastebinRequest,
    ) -> Result<Option<Wastebin>, sqlx::Error> {
        let entity = timed(
            "update_wastebin",
            sqlx::query_as::<_, WastebinEntity>(
                r#"
                UPDATE wastebin
                SET bin_location = $2, bin_status = $3, bin_capacity = $4
                WHERE wastebin_id = $1
                RETURNING wastebin_id, bin_location, bin_status, bin_capacity
                "#,
            )
            .bind(wastebin_id)
            .bind(&input.bin_location)
            .bind(WastebinStatusDb::from(input.bin_status))
            .bind(input.bin_capacity)
            .fetch_optional(&self.pool),
        )
        .await?;

        Ok(entity.map(Into::into))
    }

    /// Returns `true` if a row was removed.
    pub async fn delete(&self, wastebin_id: i64) -> Result<bool, sqlx::Error> {
        let result = timed(
            "delete_wastebin",
            sqlx::query("DELETE FROM wastebin WHERE wastebin_id = $1")
                .bind(wastebin_id)
                .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        timed(
            "count_wastebins",
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM wastebin").fetch_one(&self.pool),
        )
        .await
    }
}
