//! User domain models and authentication DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Width of `users.username`.
pub const MAX_USERNAME_LEN: usize = 100;

/// A user account. The password hash never leaves the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub phone_no: Option<String>,
    pub address: Option<String>,
    pub role_id: i64,
}

/// Request body for `POST /api/users/login`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Successful login: the user row plus a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: User,
    pub token: String,
    pub expires_in: i64,
}

/// Request body for `POST /api/users/register`.
///
/// `usertype` is a role name; the user is attached to that role.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    // 49 + space + 49 fits `users.username`.
    #[validate(length(min = 1, max = 49, message = "First name must be 1-49 characters"))]
    pub firstname: String,

    #[validate(length(min = 1, max = 49, message = "Last name must be 1-49 characters"))]
    pub lastname: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(custom(function = "shared::validation::validate_phone"))]
    #[serde(default)]
    pub phone: Option<String>,

    #[validate(length(max = 255, message = "Address must be at most 255 characters"))]
    #[serde(default)]
    pub address: Option<String>,

    #[validate(length(min = 1, max = 50, message = "User type must be 1-50 characters"))]
    pub usertype: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
}

impl RegisterRequest {
    /// Display name stored as `username`.
    pub fn username(&self) -> String {
        format!("{} {}", self.firstname.trim(), self.lastname.trim())
    }
}

/// Response for a successful registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: User,
}

/// Request body for `PUT /api/users/:id`. Replaces every field.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100, message = "Username must be 1-100 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(custom(function = "shared::validation::validate_phone"))]
    #[serde(default)]
    pub phone_no: Option<String>,

    #[validate(length(max = 255, message = "Address must be at most 255 characters"))]
    #[serde(default)]
    pub address: Option<String>,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,

    #[validate(range(min = 1, message = "role_id must be positive"))]
    pub role_id: i64,
}

/// Response for `GET /api/users/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub user: User,
    pub role_name: String,
    pub permissions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            firstname: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: Some("+44 20 7946 0000".to_string()),
            address: Some("12 Analytical Row".to_string()),
            usertype: "collector".to_string(),
            password: "difference-engine".to_string(),
        }
    }

    #[test]
    fn test_user_serialization_has_no_password() {
        let user = User {
            user_id: 1,
            username: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone_no: None,
            address: None,
            role_id: 2,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["role_id"], 2);
    }

    #[test]
    fn test_register_username_joins_names() {
        let mut req = register_request();
        req.firstname = " Ada ".to_string();
        assert_eq!(req.username(), "Ada Lovelace");
    }

    #[test]
    fn test_register_validation() {
        assert!(register_request().validate().is_ok());

        let mut bad_email = register_request();
        bad_email.email = "not-an-email".to_string();
        assert!(bad_email.validate().is_err());

        let mut short_password = register_request();
        short_password.password = "short".to_string();
        let errors = short_password.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));

        let mut bad_phone = register_request();
        bad_phone.phone = Some("phone".to_string());
        assert!(bad_phone.validate().is_err());
    }

    #[test]
    fn test_register_optional_contact_fields() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"firstname":"A","lastname":"B","email":"a@b.io","usertype":"resident","password":"password1"}"#,
        )
        .unwrap();
        assert!(req.phone.is_none());
        assert!(req.address.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_register_longest_names_fit_username_column() {
        let mut req = register_request();
        req.firstname = "a".repeat(49);
        req.lastname = "b".repeat(49);
        assert!(req.validate().is_ok());
        assert!(req.username().chars().count() <= MAX_USERNAME_LEN);

        req.firstname = "a".repeat(50);
        req.lastname = "b".repeat(50);
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("firstname"));
        assert!(errors.field_errors().contains_key("lastname"));
    }

    #[test]
    fn test_register_phone_longer_than_column_rejected() {
        let mut req = register_request();
        req.phone = Some("(12) (34) (56) (78) (90) (12) (34) (56) (78) (90)".to_string());
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone"));
    }

    #[test]
    fn test_login_validation() {
        let req = LoginRequest {
            email: "ada@example.com".to_string(),
            password: String::new(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_user_validation() {
        let req = UpdateUserRequest {
            username: "Ada L".to_string(),
            email: "ada@example.com".to_string(),
            phone_no: None,
            address: None,
            password: "new-password".to_string(),
            role_id: 0,
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("role_id"));
    }
}
