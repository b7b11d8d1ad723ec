//! Service request entity (database row mapping).

use domain::models::{RequestStatus, RequestType};
use sqlx::FromRow;

/// Database enum for request_type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "request_type", rename_all = "lowercase")]
pub enum RequestTypeDb {
    Collection,
    Maintenance,
    Replacement,
    Relocation,
}

impl From<RequestTypeDb> for RequestType {
    fn from(db: RequestTypeDb) -> Self {
        match db {
            RequestTypeDb::Collection => Self::Collection,
            RequestTypeDb::Maintenance => Self::Maintenance,
            RequestTypeDb::Replacement => Self::Replacement,
            RequestTypeDb::Relocation => Self::Relocation,
        }
    }
}

impl From<RequestType> for RequestTypeDb {
    fn from(kind: RequestType) -> Self {
        match kind {
            RequestType::Collection => Self::Collection,
            RequestType::Maintenance => Self::Maintenance,
            RequestType::Replacement => Self::Replacement,
            RequestType::Relocation => Self::Relocation,
        }
    }
}

/// Database enum for request_status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "request_status", rename_all = "kebab-case")]
pub enum RequestStatusDb {
    Pending,
    InProgress,
    Completed,
    Rejected,
}

impl From<RequestStatusDb> for RequestStatus {
    fn from(db: RequestStatusDb) -> Self {
        match db {
            RequestStatusDb::Pending => Self::Pending,
            RequestStatusDb::InProgress => Self::InProgress,
            RequestStatusDb::Completed => Self::Completed,
            RequestStatusDb::Rejected => Self::Rejected,
        }
    }
}

impl From<RequestStatus> for RequestStatusDb {
    fn from(status: RequestStatus) -> Self {
        match status {
            RequestStatus::Pending => Self::Pending,
            RequestStatus::InProgress => Self::InProgress,
            RequestStatus::Completed => Self::Completed,
            RequestStatus::Rejected => Self::Rejected,
        }
    }
}

/// Database row mapping for the requests table.
#[derive(Debug, Clone, FromRow)]
pub struct ServiceRequestEntity {
    pub request_id: i64,
    pub request_type: RequestTypeDb,
    pub request_status: RequestStatusDb,
    pub user_id: i64,
    pub wastebin_id: i64,
}

impl From<ServiceRequestEntity> for domain::models::ServiceRequest {
    fn from(entity: ServiceRequestEntity) -> Self {
        Self {
            request_id: entity.request_id,
            request_type: entity.request_type.into(),
            request_status: entity.request_status.into(),
            user_id: entity.user_id,
            wastebin_id: entity.wastebin_id,
        }
    }
}
