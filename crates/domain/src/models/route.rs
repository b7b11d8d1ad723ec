//! Collection route domain models.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A named route. `optimized_path` is stored as provided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub route_id: i64,
    pub route_name: String,
    pub optimized_path: Option<String>,
}

/// Request body for creating or replacing a route.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RouteRequest {
    #[validate(
        length(min = 1, max = 100, message = "Route name must be 1-100 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub route_name: String,

    #[validate(length(max = 10000, message = "Optimized path must be at most 10000 characters"))]
    #[serde(default)]
    pub optimized_path: Option<String>,
}
