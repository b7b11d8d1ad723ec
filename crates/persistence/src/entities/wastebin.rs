//! Wastebin entity (database row mapping).

use domain::models::WastebinStatus;
use sqlx::FromRow;

/// Database enum for wastebin_status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "wastebin_status", rename_all = "kebab-case")]
pub enum WastebinStatusDb {
    Empty,
    HalfFull,
    Full,
    Maintenance,
}

impl From<WastebinStatusDb> for WastebinStatus {
    fn from(db: WastebinStatusDb) -> Self {
        match db {
            WastebinStatusDb::Empty => Self::Empty,
            WastebinStatusDb::HalfFull => Self::HalfFull,
            WastebinStatusDb::Full => Self::Full,
            WastebinStatusDb::Maintenance => Self::Maintenance,
        }
    }
}

impl From<WastebinStatus> for WastebinStatusDb {
    fn from(status: WastebinStatus) -> Self {
        match status {
            WastebinStatus::Empty => Self::Empty,
            WastebinStatus::HalfFull => Self::HalfFull,
            WastebinStatus::Full => Self::Full,
            WastebinStatus::Maintenance => Self::Maintenance,
        }
    }
}

/// Database row mapping for the wastebin table.
#[derive(Debug, Clone, FromRow)]
pub struct WastebinEntity {
    pub wastebin_id: i64,
    pub bin_location: String,
    pub bin_status: WastebinStatusDb,
    pub bin_capacity: i32,
}

impl From<WastebinEntity> for domain::models::Wastebin {
    fn from(entity: WastebinEntity) -> Self {
        Self {
            wastebin_id: entity.wastebin_id,
            bin_location: entity.bin_location,
            bin_status: entity.bin_status.into(),
            bin_capacity: entity.bin_capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping_is_bijective() {
        for status in WastebinStatus::all() {
            let db = WastebinStatusDb::from(*status);
            assert_eq!(WastebinStatus::from(db), *status);
        }
    }
}
