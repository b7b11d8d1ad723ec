//! Collection schedule domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A planned pickup of one bin by one truck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSchedule {
    pub schedule_id: i64,
    pub collection_time: DateTime<Utc>,
    pub wastebin_id: i64,
    pub truck_id: i64,
}

/// Request body for creating or replacing a schedule.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ScheduleRequest {
    pub collection_time: DateTime<Utc>,

    #[validate(range(min = 1, message = "wastebin_id must be positive"))]
    pub wastebin_id: i64,

    #[validate(range(min = 1, message = "truck_id must be positive"))]
    pub truck_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_request_parses_rfc3339() {
        let req: ScheduleRequest = serde_json::from_str(
            r#"{"collection_time":"2024-05-01T06:30:00Z","wastebin_id":3,"truck_id":1}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.collection_time.to_rfc3339(), "2024-05-01T06:30:00+00:00");
    }

    #[test]
    fn test_schedule_request_rejects_bad_time() {
        let result = serde_json::from_str::<ScheduleRequest>(
            r#"{"collection_time":"tomorrow","wastebin_id":3,"truck_id":1}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_schedule_request_ids_positive() {
        let req: ScheduleRequest = serde_json::from_str(
            r#"{"collection_time":"2024-05-01T06:30:00Z","wastebin_id":0,"truck_id":-2}"#,
        )
        .unwrap();
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("wastebin_id"));
        assert!(fields.contains_key("truck_id"));
    }
}
