//! Collection schedule entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the collectionschedule table.
#[derive(Debug, Clone, FromRow)]
pub struct CollectionScheduleEntity {
    pub schedule_id: i64,
    pub collection_time: DateTime<Utc>,
    pub wastebin_id: i64,
    pub truck_id: i64,
}

impl From<CollectionScheduleEntity> for domain::models::CollectionSchedule {
    fn from(entity: CollectionScheduleEntity) -> Self {
        Self {
            schedule_id: entity.schedule_id,
            collection_time: entity.collection_time,
            wastebin_id: entity.wastebin_id,
            truck_id: entity.truck_id,
        }
    }
}
