//! Repository implementations for database operations.
//!
//! Writes that reference other rows run the existence checks and the write
//! in one transaction, locking the referenced rows `FOR KEY SHARE` so they
//! cannot be deleted before commit.

use thiserror::Error;

pub mod activity_log;
pub mod collection;
pub mod permission;
pub mod role;
pub mod role_permission;
pub mod route;
pub mod schedule;
pub mod service_request;
pub mod truck;
pub mod user;
pub mod wastebin;

pub use activity_log::ActivityLogRepository;
pub use collection::CollectionRepository;
pub use permission::PermissionRepository;
pub use role::RoleRepository;
pub use role_permission::RolePermissionRepository;
pub use route::RouteRepository;
pub use schedule::ScheduleRepository;
pub use service_request::ServiceRequestRepository;
pub use truck::GarbageTruckRepository;
pub use user::{NewUser, UserRepository};
pub use wastebin::WastebinRepository;

/// Error from a write that depends on other rows existing.
#[derive(Debug, Error)]
pub enum ReferenceError {
    /// A referenced row does not exist. Holds the entity name, e.g. `"Wastebin"`.
    #[error("{0} not found")]
    Missing(&'static str),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Picks the first missing reference from an ordered list of existence flags.
pub(crate) fn first_missing(checks: &[(bool, &'static str)]) -> Result<(), ReferenceError> {
    match checks.iter().find(|(exists, _)| !exists) {
        Some((_, entity)) => Err(ReferenceError::Missing(entity)),
        None => Ok(()),
    }
}
