//! Garbage truck entity (database row mapping).

use domain::models::TruckStatus;
use sqlx::FromRow;

/// Database enum for truck_status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "truck_status", rename_all = "kebab-case")]
pub enum TruckStatusDb {
    Available,
    InUse,
    Maintenance,
    OutOfService,
}

impl From<TruckStatusDb> for TruckStatus {
    fn from(db: TruckStatusDb) -> Self {
        match db {
            TruckStatusDb::Available => Self::Available,
            TruckStatusDb::InUse => Self::InUse,
            TruckStatusDb::Maintenance => Self::Maintenance,
            TruckStatusDb::OutOfService => Self::OutOfService,
        }
    }
}

impl From<TruckStatus> for TruckStatusDb {
    fn from(status: TruckStatus) -> Self {
        match status {
            TruckStatus::Available => Self::Available,
            TruckStatus::InUse => Self::InUse,
            TruckStatus::Maintenance => Self::Maintenance,
            TruckStatus::OutOfService => Self::OutOfService,
        }
    }
}

/// Database row mapping for the garbagetruck table.
#[derive(Debug, Clone, FromRow)]
pub struct GarbageTruckEntity {
    pub truck_id: i64,
    pub truck_capacity: i32,
    pub truck_status: TruckStatusDb,
    pub license_plate: String,
}

impl From<GarbageTruckEntity> for domain::models::GarbageTruck {
    fn from(entity: GarbageTruckEntity) -> Self {
        Self {
            truck_id: entity.truck_id,
            truck_capacity: entity.truck_capacity,
            truck_status: entity.truck_status.into(),
            license_plate: entity.license_plate,
        }
    }
}
