//! Activity log domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One recorded action by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub log_id: i64,
    pub action: String,
    pub timestamp: DateTime<Utc>,
    pub user_id: i64,
}

/// Request body for `POST /api/activityLog`. When `timestamp` is omitted
/// the server stamps the row.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateActivityLogRequest {
    #[validate(length(min = 1, max = 500, message = "Action must be 1-500 characters"))]
    pub action: String,

    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,

    #[validate(range(min = 1, message = "user_id must be positive"))]
    pub user_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_validation() {
        let req: CreateActivityLogRequest =
            serde_json::from_str(r#"{"action":"Emptied bin 4","user_id":2}"#).unwrap();
        assert!(req.validate().is_ok());
        assert!(req.timestamp.is_none());

        let empty = CreateActivityLogRequest {
            action: String::new(),
            timestamp: None,
            user_id: 2,
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_create_request_accepts_client_timestamp() {
        let req: CreateActivityLogRequest = serde_json::from_str(
            r#"{"action":"Emptied bin 4","timestamp":"2024-03-01T10:00:00Z","user_id":2}"#,
        )
        .unwrap();
        assert_eq!(
            req.timestamp.unwrap().to_rfc3339(),
            "2024-03-01T10:00:00+00:00"
        );

        let bad = serde_json::from_str::<CreateActivityLogRequest>(
            r#"{"action":"Emptied bin 4","timestamp":"yesterday","user_id":2}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_activity_log_serialization() {
        let log = ActivityLog {
            log_id: 1,
            action: "POST /api/wastebin".to_string(),
            timestamp: DateTime::parse_from_rfc3339("2024-03-01T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            user_id: 2,
        };
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["action"], "POST /api/wastebin");
        assert_eq!(json["timestamp"], "2024-03-01T10:00:00Z");
    }
}
