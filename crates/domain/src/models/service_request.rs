//! Service request domain models.
//!
//! A service request is raised by a user against a bin, e.g. asking for an
//! extra pickup or a repair.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

/// What the user is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestType {
    Collection,
    Maintenance,
    Replacement,
    Relocation,
}

impl FromStr for RequestType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "collection" => Ok(RequestType::Collection),
            "maintenance" => Ok(RequestType::Maintenance),
            "replacement" => Ok(RequestType::Replacement),
            "relocation" => Ok(RequestType::Relocation),
            _ => Err(format!("Unknown request type: {}", s)),
        }
    }
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestType::Collection => write!(f, "collection"),
            RequestType::Maintenance => write!(f, "maintenance"),
            RequestType::Replacement => write!(f, "replacement"),
            RequestType::Relocation => write!(f, "relocation"),
        }
    }
}

/// Handling state of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestStatus {
    Pending,
    InProgress,
    Completed,
    Rejected,
}

impl FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "pending" => Ok(RequestStatus::Pending),
            "in-progress" => Ok(RequestStatus::InProgress),
            "completed" => Ok(RequestStatus::Completed),
            "rejected" => Ok(RequestStatus::Rejected),
            _ => Err(format!("Unknown request status: {}", s)),
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestStatus::Pending => write!(f, "pending"),
            RequestStatus::InProgress => write!(f, "in-progress"),
            RequestStatus::Completed => write!(f, "completed"),
            RequestStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A user's service request against a bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub request_id: i64,
    pub request_type: RequestType,
    pub request_status: RequestStatus,
    pub user_id: i64,
    pub wastebin_id: i64,
}

/// Request body for creating or replacing a service request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ServiceRequestPayload {
    pub request_type: RequestType,

    pub request_status: RequestStatus,

    #[validate(range(min = 1, message = "user_id must be positive"))]
    pub user_id: i64,

    #[validate(range(min = 1, message = "wastebin_id must be positive"))]
    pub wastebin_id: i64,
}
