//! Permission and role/permission grant entities.

use sqlx::FromRow;

/// Database row mapping for the permission table.
#[derive(Debug, Clone, FromRow)]
pub struct PermissionEntity {
    pub permission_id: i64,
    pub permission_name: String,
    pub description: Option<String>,
}

impl From<PermissionEntity> for domain::models::Permission {
    fn from(entity: PermissionEntity) -> Self {
        Self {
            permission_id: entity.permission_id,
            permission_name: entity.permission_name,
            description: entity.description,
        }
    }
}

/// Database row mapping for the role_permission table.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct RolePermissionEntity {
    pub role_id: i64,
    pub permission_id: i64,
}

impl From<RolePermissionEntity> for domain::models::RolePermission {
    fn from(entity: RolePermissionEntity) -> Self {
        Self {
            role_id: entity.role_id,
            permission_id: entity.permission_id,
        }
    }
}
