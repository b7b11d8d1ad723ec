//! Route repository for database operations.

use domain::models::{Route, RouteRequest};
use sqlx::PgPool;

use crate::entities::RouteEntity;
use crate::metrics::timed;

/// Repository for route database operations.
#[derive(Clone)]
pub struct RouteRepository {
    pool: PgPool,
}

impl RouteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: &RouteRequest) -> Result<Route, sqlx::Error> {
        let entity = timed(
            "create_route",
            sqlx::query_as::<_, RouteEntity>(
                r#"
                INSERT INTO route (route_name, optimized_path)
                VALUES ($1, $2)
                RETURNING route_id, route_name, optimized_path
                "#,
            )
            .bind(&input.route_name)
            .bind(&input.optimized_path)
            .fetch_one(&self.pool),
        )
        .await?;

        Ok(entity.into())
    }

    pub async fn list(&self) -> Result<Vec<Route>, sqlx::Error> {
        let entities = timed(
            "list_routes",
            sqlx::query_as::<_, RouteEntity>(
                "SELECT route_id, route_name, optimized_path FROM route ORDER BY route_id",
            )
            .fetch_all(&self.pool),
        )
        .await?;

        Ok(entities.into_iter().map(Into::into).collect())
    }

    pub async fn find_by_id(&self, route_id: i64) -> Result<Option<Route>, sqlx::Error> {
        let entity = timed(
            "find_route_by_id",
            sqlx::query_as::<_, RouteEntity>(
                "SELECT route_id, route_name, optimized_path FROM route WHERE route_id = $1",
            )
            .bind(route_id)
            .fetch_optional(&self.pool),
        )
        .await?;

        Ok(entity.map(Into::into))
    }

    pub async fn update(
        &self,
        route_id: i64,
        input: &RouteRequest,
    ) -> Result<Option<Route>, sqlx::Error> {
        let entity = timed(
            "update_route",
            sqlx::query_as::<_, RouteEntity>(
                r#"
                UPDATE route
                SET route_name = $2, optimized_path = $3
                WHERE route_id = $1
                RETURNING route_id, route_name, optimized_path
                "#,
            )
            .bind(route_id)
            .bind(&input.route_name)
            .bind(&input.optimized_path)
            .fetch_optional(&self.pool),
        )
        .await?;

        Ok(entity.map(Into::into))
    }

    pub async fn delete(&self, route_id: i64) -> Result<bool, sqlx::Error> {
        let result = timed(
            "delete_route",
            sqlx::query("DELETE FROM route WHERE route_id = $1")
                .bind(route_id)
                .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        timed(
            "count_routes",
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM route").fetch_one(&self.pool),
        )
        .await
    }
}
