//! Permission and role/permission grant models.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A permission, named by capability slug such as `wastebin:write`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub permission_id: i64,
    pub permission_name: String,
    pub description: Option<String>,
}

/// Request body for creating or replacing a permission.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PermissionRequest {
    #[validate(
        length(min = 1, max = 100, message = "Permission name must be 1-100 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub permission_name: String,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    #[serde(default)]
    pub description: Option<String>,
}

/// A grant of one permission to one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePermission {
    pub role_id: i64,
    pub permission_id: i64,
}

/// Request body for `POST /api/role/permission`.
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct GrantPermissionRequest {
    #[validate(range(min = 1, message = "role_id must be positive"))]
    pub role_id: i64,
    #[validate(range(min = 1, message = "permission_id must be positive"))]
    pub permission_id: i64,
}
