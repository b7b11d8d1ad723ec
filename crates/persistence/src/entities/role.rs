//! Role entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the role table.
#[derive(Debug, Clone, FromRow)]
pub struct RoleEntity {
    pub role_id: i64,
    pub role_name: String,
}

impl From<RoleEntity> for domain::models::Role {
    fn from(entity: RoleEntity) -> Self {
        Self {
            role_id: entity.role_id,
            role_name: entity.role_name,
        }
    }
}
