//! Domain models for the Waste Manager.

pub mod activity_log;
pub mod collection;
pub mod common;
pub mod permission;
pub mod role;
pub mod route;
pub mod schedule;
pub mod service_request;
pub mod truck;
pub mod user;
pub mod wastebin;

pub use activity_log::{ActivityLog, CreateActivityLogRequest};
pub use collection::{Collection, CollectionRequest, CompletionStatus};
pub use common::{CountResponse, CreatedResponse, MessageResponse};
pub use permission::{GrantPermissionRequest, Permission, PermissionRequest, RolePermission};
pub use role::{Role, RoleRequest, ADMIN_ROLE_NAME};
pub use route::{Route, RouteRequest};
pub use schedule::{CollectionSchedule, ScheduleRequest};
pub use service_request::{RequestStatus, RequestType, ServiceRequest, ServiceRequestPayload};
pub use truck::{GarbageTruck, GarbageTruckRequest, TruckStatus};
pub use user::{
    CurrentUserResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
    UpdateUserRequest, User, MAX_USERNAME_LEN,
};
pub use wastebin::{Wastebin, WastebinRequest, WastebinStatus};
