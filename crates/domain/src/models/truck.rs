//! Garbage truck domain models.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

/// Operational state of a truck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TruckStatus {
    Available,
    InUse,
    Maintenance,
    OutOfService,
}

impl TruckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TruckStatus::Available => "available",
            TruckStatus::InUse => "in-use",
            TruckStatus::Maintenance => "maintenance",
            TruckStatus::OutOfService => "out-of-service",
        }
    }

    pub fn all() -> &'static [TruckStatus] {
        &[
            TruckStatus::Available,
            TruckStatus::InUse,
            TruckStatus::Maintenance,
            TruckStatus::OutOfService,
        ]
    }
}

impl FromStr for TruckStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "available" => Ok(TruckStatus::Available),
            "in-use" => Ok(TruckStatus::InUse),
            "maintenance" => Ok(TruckStatus::Maintenance),
            "out-of-service" => Ok(TruckStatus::OutOfService),
            _ => Err(format!("Unknown truck status: {}", s)),
        }
    }
}

impl std::fmt::Display for TruckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A garbage truck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarbageTruck {
    pub truck_id: i64,
    pub truck_capacity: i32,
    pub truck_status: TruckStatus,
    pub license_plate: String,
}

/// Request body for creating or replacing a truck.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GarbageTruckRequest {
    #[validate(range(min = 0, message = "Capacity must not be negative"))]
    pub truck_capacity: i32,

    pub truck_status: TruckStatus,

    #[validate(custom(function = "shared::validation::validate_license_plate"))]
    pub license_plate: String,
}
