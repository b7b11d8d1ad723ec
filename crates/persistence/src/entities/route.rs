//! Route entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the route table.
#[derive(Debug, Clone, FromRow)]
pub struct RouteEntity {
    pub route_id: i64,
    pub route_name: String,
    pub optimized_path: Option<String>,
}

impl From<RouteEntity> for domain::models::Route {
    fn from(entity: RouteEntity) -> Self {
        Self {
            route_id: entity.route_id,
            route_name: entity.route_name,
            optimized_path: entity.optimized_path,
        }
    }
}
