//! HTTP route handlers, one module per resource.

pub mod activity_logs;
pub mod collections;
pub mod health;
pub mod permissions;
pub mod requests;
pub mod role_permissions;
pub mod roles;
pub mod schedules;
pub mod trucks;
pub mod users;
pub mod waste_routes;
pub mod wastebins;
