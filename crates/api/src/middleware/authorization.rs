//! Capability enforcement for resource routes.
//!
//! Each resource group is guarded by `<resource>:read` for safe methods and
//! `<resource>:write` for everything else. The check runs after
//! `require_user_auth` and before the handler.

use axum::{
    body::Body,
    extract::{OriginalUri, State},
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use domain::services::{Action, Capability, Resource};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_mutation;
use crate::middleware::trace_id::get_request_id;
use crate::middleware::user_auth::Caller;
use crate::services::activity;

/// Middleware state: the shared app state plus the guarded resource.
#[derive(Clone)]
pub struct CapabilityGuard {
    pub state: AppState,
    pub resource: Resource,
}

impl CapabilityGuard {
    pub fn new(state: AppState, resource: Resource) -> Self {
        Self { state, resource }
    }
}

/// Rejects the request with `403` unless the caller holds the capability
/// for this route, and records an activity entry after successful writes.
pub async fn require_capability(
    State(guard): State<CapabilityGuard>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let Some(caller) = req.extensions().get::<Caller>().cloned() else {
        return ApiError::Unauthorized("Authentication required".to_string()).into_response();
    };

    let action = Action::for_method(req.method().as_str());
    let capability = Capability::new(guard.resource, action);

    if !caller.permissions.allows(capability) {
        tracing::info!(
            request_id = %get_request_id(req.extensions()),
            user_id = caller.user_id,
            role = %caller.role_name,
            capability = %capability,
            "Capability denied"
        );
        return ApiError::Forbidden(format!("Missing permission {}", capability)).into_response();
    }

    if action == Action::Read {
        return next.run(req).await;
    }

    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<OriginalUri>()
        .map(|uri| uri.path().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let response = next.run(req).await;

    if response.status().is_success() {
        record_mutation(guard.resource.as_str(), mutation_label(&method));
        // Writes to the log itself are not logged again.
        if guard.state.config.activity.record_mutations && guard.resource != Resource::Activity {
            let action = format!("{} {}", method, path);
            activity::record(&guard.state.pool, caller.user_id, &action).await;
        }
    }

    response
}

fn mutation_label(method: &axum::http::Method) -> &'static str {
    match method.as_str() {
        "POST" => "create",
        "PUT" | "PATCH" => "update",
        "DELETE" => "delete",
        _ => "other",
    }
}
