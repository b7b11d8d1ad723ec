//! Collection entity (database row mapping).

use domain::models::CompletionStatus;
use sqlx::FromRow;

/// Database enum for completion_status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "completion_status", rename_all = "kebab-case")]
pub enum CompletionStatusDb {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl From<CompletionStatusDb> for CompletionStatus {
    fn from(db: CompletionStatusDb) -> Self {
        match db {
            CompletionStatusDb::Pending => Self::Pending,
            CompletionStatusDb::InProgress => Self::InProgress,
            CompletionStatusDb::Completed => Self::Completed,
            CompletionStatusDb::Cancelled => Self::Cancelled,
        }
    }
}

impl From<CompletionStatus> for CompletionStatusDb {
    fn from(status: CompletionStatus) -> Self {
        match status {
            CompletionStatus::Pending => Self::Pending,
            CompletionStatus::InProgress => Self::InProgress,
            CompletionStatus::Completed => Self::Completed,
            CompletionStatus::Cancelled => Self::Cancelled,
        }
    }
}

/// Database row mapping for the collection table.
#[derive(Debug, Clone, FromRow)]
pub struct CollectionEntity {
    pub collection_id: i64,
    pub completion_status: CompletionStatusDb,
    pub schedule_id: i64,
    pub route_id: i64,
}

impl From<CollectionEntity> for domain::models::Collection {
    fn from(entity: CollectionEntity) -> Self {
        Self {
            collection_id: entity.collection_id,
            completion_status: entity.completion_status.into(),
            schedule_id: entity.schedule_id,
            route_id: entity.route_id,
        }
    }
}
