use axum::{middleware, routing::get, Router};
use domain::services::Resource;
use shared::jwt::{JwtConfig, JwtError};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, require_capability, require_user_auth,
    security_headers_middleware, trace_id, CapabilityGuard,
};
use crate::routes::{
    activity_logs, collections, health, permissions, requests, role_permissions, roles,
    schedules, trucks, users, waste_routes, wastebins,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub jwt: Arc<JwtConfig>,
}

impl AppState {
    /// Builds the shared state, parsing the RSA keys once.
    pub fn new(config: Config, pool: PgPool) -> Result<Self, JwtError> {
        let jwt = JwtConfig::from_rsa_pem(
            &config.jwt.private_key,
            &config.jwt.public_key,
            config.jwt.access_token_expiry_secs,
            config.jwt.leeway_secs,
        )?;

        Ok(Self {
            pool,
            config: Arc::new(config),
            jwt: Arc::new(jwt),
        })
    }
}

/// Applies authentication and the capability check for `resource`.
/// Layers added last run first, so authentication precedes the check.
fn guarded(state: &AppState, resource: Resource, router: Router<AppState>) -> Router<AppState> {
    router
        .route_layer(middleware::from_fn_with_state(
            CapabilityGuard::new(state.clone(), resource),
            require_capability,
        ))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_user_auth,
        ))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        // Development default: any origin.
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

pub fn create_app(config: Config, pool: PgPool) -> Result<Router, JwtError> {
    let state = AppState::new(config, pool)?;
    Ok(build_router(state))
}

pub fn build_router(state: AppState) -> Router {
    let config = state.config.clone();

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler))
        .merge(users::public_router());

    let self_routes = users::self_router().route_layer(middleware::from_fn_with_state(
        state.clone(),
        require_user_auth,
    ));

    let resource_routes = Router::new()
        .merge(guarded(&state, Resource::User, users::router()))
        .merge(guarded(&state, Resource::Role, roles::router()))
        .merge(guarded(&state, Resource::Role, role_permissions::router()))
        .merge(guarded(&state, Resource::Permission, permissions::router()))
        .merge(guarded(&state, Resource::Wastebin, wastebins::router()))
        .merge(guarded(&state, Resource::Truck, trucks::router()))
        .merge(guarded(&state, Resource::Route, waste_routes::router()))
        .merge(guarded(&state, Resource::Schedule, schedules::router()))
        .merge(guarded(&state, Resource::Collection, collections::router()))
        .merge(guarded(&state, Resource::Request, requests::router()))
        .merge(guarded(&state, Resource::Activity, activity_logs::router()));

    Router::new()
        .merge(public_routes)
        .merge(self_routes)
        .merge(resource_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn_with_state(
            config.security.hsts_enabled,
            security_headers_middleware,
        ))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors_layer(&config.security.cors_origins))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_with_origins_builds() {
        let _ = cors_layer(&["https://ops.city.example".to_string()]);
        let _ = cors_layer(&[]);
    }
}
