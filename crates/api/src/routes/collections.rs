//! Collection route handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use domain::models::{CollectionRequest, CountResponse, CreatedResponse, MessageResponse};
use persistence::repositories::CollectionRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Path, ValidatedJson};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/collection", get(list_collections).post(create_collection))
        .route("/api/collection/total", get(count_collections))
        .route("/api/collection/completed", get(count_completed))
        .route(
            "/api/collection/:id",
            get(get_collection)
                .put(update_collection)
                .delete(delete_collection),
        )
}

fn repo(state: &AppState) -> CollectionRepository {
    CollectionRepository::new(state.pool.clone())
}

async fn list_collections(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(repo(&state).list().await?))
}

async fn count_collections(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let total = repo(&state).count().await?;
    Ok(Json(CountResponse { total }))
}

/// GET /api/collection/completed
///
/// Counts collections whose status is exactly `completed`.
async fn count_completed(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let total = repo(&state).count_completed().await?;
    Ok(Json(CountResponse { total }))
}

async fn get_collection(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let collection = repo(&state)
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Collection not found".to_string()))?;
    Ok(Json(collection))
}

async fn create_collection(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CollectionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let collection = repo(&state).create(&request).await?;

    info!(
        collection_id = collection.collection_id,
        schedule_id = collection.schedule_id,
        route_id = collection.route_id,
        "Collection created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(
            "Collection created successfully",
            collection.collection_id,
        )),
    ))
}

async fn update_collection(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<CollectionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let collection = repo(&state)
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Collection not found".to_string()))?;

    info!(
        collection_id = collection.collection_id,
        status = %collection.completion_status,
        "Collection updated"
    );

    Ok(Json(MessageResponse::new("Collection updated successfully")))
}

async fn delete_collection(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = repo(&state)
        .delete(id)
        .await
        .map_err(ApiError::on_delete("Collection"))?;

    if !deleted {
        return Err(ApiError::NotFound("Collection not found".to_string()));
    }

    info!(collection_id = id, "Collection deleted");
    Ok(Json(MessageResponse::new("Collection deleted successfully")))
}
