//! Waste bin domain models.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

/// Fill state of a bin. Any state may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WastebinStatus {
    Empty,
    HalfFull,
    Full,
    Maintenance,
}

impl WastebinStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WastebinStatus::Empty => "empty",
            WastebinStatus::HalfFull => "half-full",
            WastebinStatus::Full => "full",
            WastebinStatus::Maintenance => "maintenance",
        }
    }

    pub fn all() -> &'static [WastebinStatus] {
        &[
            WastebinStatus::Empty,
            WastebinStatus::HalfFull,
            WastebinStatus::Full,
            WastebinStatus::Maintenance,
        ]
    }
}

impl FromStr for WastebinStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase().replace('_', "-");
        Self::all()
            .iter()
            .copied()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| format!("Unknown wastebin status: {}", s))
    }
}

impl std::fmt::Display for WastebinStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A waste bin at a fixed location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wastebin {
    pub wastebin_id: i64,
    pub bin_location: String,
    pub bin_status: WastebinStatus,
    pub bin_capacity: i32,
}

/// Request body for creating or replacing a wastebin.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WastebinRequest {
    #[validate(
        length(min = 1, max = 255, message = "Location must be 1-255 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub bin_location: String,

    pub bin_status: WastebinStatus,

    #[validate(range(min = 0, message = "Capacity must not be negative"))]
    pub bin_capacity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&WastebinStatus::HalfFull).unwrap(),
            "\"half-full\""
        );
        let status: WastebinStatus = serde_json::from_str("\"maintenance\"").unwrap();
        assert_eq!(status, WastebinStatus::Maintenance);
    }

    #[test]
    fn test_status_unknown_rejected() {
        assert!(serde_json::from_str::<WastebinStatus>("\"overflowing\"").is_err());
        assert!(WastebinStatus::from_str("overflowing").is_err());
    }

    #[test]
    fn test_status_from_str_lenient_case() {
        assert_eq!(WastebinStatus::from_str("HALF_FULL").unwrap(), WastebinStatus::HalfFull);
        assert_eq!(WastebinStatus::from_str("full").unwrap(), WastebinStatus::Full);
    }

    #[test]
    fn test_display_matches_serde() {
        for status in WastebinStatus::all() {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
    }

    #[test]
    fn test_request_validation() {
        let req: WastebinRequest = serde_json::from_str(
            r#"{"bin_location":"Market Square","bin_status":"empty","bin_capacity":240}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());

        let negative = WastebinRequest {
            bin_capacity: -1,
            ..req.clone()
        };
        assert!(negative.validate().is_err());

        let blank = WastebinRequest {
            bin_location: " ".to_string(),
            ..req
        };
        assert!(blank.validate().is_err());
    }
}
