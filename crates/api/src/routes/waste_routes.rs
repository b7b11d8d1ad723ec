//! Handlers for truck routes (the `route` table).

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use domain::models::{CountResponse, CreatedResponse, MessageResponse, RouteRequest};
use persistence::repositories::RouteRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Path, ValidatedJson};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/route", get(list_routes).post(create_route))
        .route("/api/route/total", get(count_routes))
        .route(
            "/api/route/:id",
            get(get_route).put(update_route).delete(delete_route),
        )
}

fn repo(state: &AppState) -> RouteRepository {
    RouteRepository::new(state.pool.clone())
}

async fn list_routes(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(repo(&state).list().await?))
}

async fn count_routes(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let total = repo(&state).count().await?;
    Ok(Json(CountResponse { total }))
}

async fn get_route(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let route = repo(&state)
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Route not found".to_string()))?;
    Ok(Json(route))
}

async fn create_route(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RouteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let route = repo(&state).create(&request).await?;

    info!(route_id = route.route_id, name = %route.route_name, "Route created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Route created successfully", route.route_id)),
    ))
}

async fn update_route(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<RouteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let route = repo(&state)
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Route not found".to_string()))?;

    info!(route_id = route.route_id, "Route updated");

    Ok(Json(MessageResponse::new("Route updated successfully")))
}

async fn delete_route(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = repo(&state)
        .delete(id)
        .await
        .map_err(ApiError::on_delete("Route"))?;

    if !deleted {
        return Err(ApiError::NotFound("Route not found".to_string()));
    }

    info!(route_id = id, "Route deleted");
    Ok(Json(MessageResponse::new("Route deleted successfully")))
}
