//! Application services used by route handlers and startup.

pub mod activity;
pub mod admin_bootstrap;
pub mod auth;

pub use admin_bootstrap::{bootstrap_admin, BootstrapError, BootstrapReport};
pub use auth::{AuthError, AuthService};
