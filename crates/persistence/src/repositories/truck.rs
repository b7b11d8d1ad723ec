//! Garbage truck repository for database operations.

use domain::models::{GarbageTruck, GarbageTruckRequest};
use sqlx::PgPool;

use crate::entities::{GarbageTruckEntity, TruckStatusDb};
use crate::metrics::timed;

/// Repository for garbage truck database operations.
#[derive(Clone)]
pub struct GarbageTruckRepository {
    pool: PgPool,
}

impl GarbageTruckRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: &GarbageTruckRequest) -> Result<GarbageTruck, sqlx::Error> {
        let entity = timed(
            "create_truck",
            sqlx::query_as::<_, GarbageTruckEntity>(
                r#"
                INSERT INTO garbagetruck (truck_capacity, truck_status, license_plate)
                VALUES ($1, $2, $3)
                RETURNING truck_id, truck_capacity, truck_status, license_plate
                "#,
            )
            .bind(input.truck_capacity)
            .bind(TruckStatusDb::from(input.truck_status))
            .bind(input.license_plate.trim())
            .fetch_one(&self.pool),
        )
        .await?;

        Ok(entity.into())
    }

    pub async fn list(&self) -> Result<Vec<GarbageTruck>, sqlx::Error> {
        let entities = timed(
            "list_trucks",
            sqlx::query_as::<_, GarbageTruckEntity>(
                r#"
                SELECT truck_id, truck_capacity, truck_status, license_plate
                FROM garbagetruck
                ORDER BY truck_id
                "#,
            )
            .fetch_all(&self.pool),
        )
        .await?;

        Ok(entities.into_iter().map(Into::into).collect())
    }

    pub async fn find_by_id(&self, truck_id: i64) -> Result<Option<GarbageTruck>, sqlx::Error> {
        let entity = timed(
            "find_truck_by_id",
            sqlx::query_as::<_, GarbageTruckEntity>(
                r#"
                SELECT truck_id, truck_capacity, truck_status, license_plate
                FROM garbagetruck
                WHERE truck_id = $1
                "#,
            )
            .bind(truck_id)
            .fetch_optional(&self.pool),
        )
        .await?;

        Ok(entity.map(Into::into))
    }

    pub async fn update(
        &self,
        truck_id: i64,
        input: &GarbageTruckRequest,
    ) -> Result<Option<GarbageTruck>, sqlx::Error> {
        let entity = timed(
            "update_truck",
            sqlx::query_as::<_, GarbageTruckEntity>(
                r#"
                UPDATE garbagetruck
                SET truck_capacity = $2, truck_status = $3, license_plate = $4
                WHERE truck_id = $1
                RETURNING truck_id, truck_capacity, truck_status, license_plate
                "#,
            )
            .bind(truck_id)
            .bind(input.truck_capacity)
            .bind(TruckStatusDb::from(input.truck_status))
            .bind(input.license_plate.trim())
            .fetch_optional(&self.pool),
        )
        .await?;

        Ok(entity.map(Into::into))
    }

    pub async fn delete(&self, truck_id: i64) -> Result<bool, sqlx::Error> {
        let result = timed(
            "delete_truck",
            sqlx::query("DELETE FROM garbagetruck WHERE truck_id = $1")
                .bind(truck_id)
                .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        timed(
            "count_trucks",
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM garbagetruck").fetch_one(&self.pool),
        )
        .await
    }
}
