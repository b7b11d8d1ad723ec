//! Role domain models.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Name of the built-in role that holds every catalog permission.
pub const ADMIN_ROLE_NAME: &str = "admin";

/// A named role. Users belong to exactly one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub role_id: i64,
    pub role_name: String,
}

/// Request body for creating or replacing a role.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RoleRequest {
    #[validate(
        length(min = 1, max = 50, message = "Role name must be 1-50 characters"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub role_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        let role = Role {
            role_id: 2,
            role_name: "collector".to_string(),
        };
        let json = serde_json::to_value(&role).unwrap();
        assert_eq!(json["role_id"], 2);
        assert_eq!(json["role_name"], "collector");
    }

    #[test]
    fn test_role_request_validation() {
        let ok: RoleRequest = serde_json::from_str(r#"{"role_name":"dispatcher"}"#).unwrap();
        assert!(ok.validate().is_ok());

        let blank = RoleRequest {
            role_name: "   ".to_string(),
        };
        assert!(blank.validate().is_err());

        let long = RoleRequest {
            role_name: "x".repeat(51),
        };
        assert!(long.validate().is_err());
    }

    #[test]
    fn test_role_request_requires_name() {
        assert!(serde_json::from_str::<RoleRequest>("{}").is_err());
    }
}
