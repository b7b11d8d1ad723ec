//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod activity_log;
pub mod collection;
pub mod permission;
pub mod role;
pub mod route;
pub mod schedule;
pub mod service_request;
pub mod truck;
pub mod user;
pub mod wastebin;

pub use activity_log::ActivityLogEntity;
pub use collection::{CollectionEntity, CompletionStatusDb};
pub use permission::{PermissionEntity, RolePermissionEntity};
pub use role::RoleEntity;
pub use route::RouteEntity;
pub use schedule::CollectionScheduleEntity;
pub use service_request::{RequestStatusDb, RequestTypeDb, ServiceRequestEntity};
pub use truck::{GarbageTruckEntity, TruckStatusDb};
pub use user::{UserEntity, UserWithRoleEntity};
pub use wastebin::{WastebinEntity, WastebinStatusDb};
