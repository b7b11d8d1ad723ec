//! Activity log entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the activitylog table.
#[derive(Debug, Clone, FromRow)]
pub struct ActivityLogEntity {
    pub log_id: i64,
    pub action: String,
    pub timestamp: DateTime<Utc>,
    pub user_id: i64,
}

impl From<ActivityLogEntity> for domain::models::ActivityLog {
    fn from(entity: ActivityLogEntity) -> Self {
        Self {
            log_id: entity.log_id,
            action: entity.action,
            timestamp: entity.timestamp,
            user_id: entity.user_id,
        }
    }
}
