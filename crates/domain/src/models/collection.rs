//! Collection domain models.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

/// Progress of a collection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompletionStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl CompletionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionStatus::Pending => "pending",
            CompletionStatus::InProgress => "in-progress",
            CompletionStatus::Completed => "completed",
            CompletionStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for CompletionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "pending" => Ok(CompletionStatus::Pending),
            "in-progress" => Ok(CompletionStatus::InProgress),
            "completed" => Ok(CompletionStatus::Completed),
            "cancelled" => Ok(CompletionStatus::Cancelled),
            _ => Err(format!("Unknown completion status: {}", s)),
        }
    }
}

impl std::fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Execution of a schedule along a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub collection_id: i64,
    pub completion_status: CompletionStatus,
    pub schedule_id: i64,
    pub route_id: i64,
}

/// Request body for creating or replacing a collection.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CollectionRequest {
    pub completion_status: CompletionStatus,

    #[validate(range(min = 1, message = "schedule_id must be positive"))]
    pub schedule_id: i64,

    #[validate(range(min = 1, message = "route_id must be positive"))]
    pub route_id: i64,
}
