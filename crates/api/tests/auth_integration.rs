//! Integration tests for login, registration and the current-user endpoint.

mod common;

use axum::http::{Method, StatusCode};
use common::*;
use serde_json::json;

#[tokio::test]
async fn test_admin_login_returns_token_and_user() {
    let test = setup().await;

    let response = test
        .send(get_request("/api/users/me", &test.admin_token))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["user"]["user_id"], test.admin_user_id);
    assert_eq!(body["role_name"], "admin");
    let permissions = body["permissions"].as_array().unwrap();
    assert!(permissions.iter().any(|p| p == "wastebin:write"));
    assert!(permissions.iter().any(|p| p == "activity:read"));
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthorized() {
    let test = setup().await;

    let response = test
        .send(json_request(
            Method::POST,
            "/api/users/login",
            json!({ "email": test.admin_email, "password": "WrongPassword1!" }),
            None,
        ))
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "unauthorized");
    assert!(body.get("user").is_none());
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn test_login_unknown_email_matches_wrong_password() {
    let test = setup().await;

    let unknown = test
        .send(json_request(
            Method::POST,
            "/api/users/login",
            json!({ "email": unique_email(), "password": TEST_PASSWORD }),
            None,
        ))
        .await;
    let wrong = test
        .send(json_request(
            Method::POST,
            "/api/users/login",
            json!({ "email": test.admin_email, "password": "WrongPassword1!" }),
            None,
        ))
        .await;
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        parse_response_body(unknown).await,
        parse_response_body(wrong).await
    );
}

#[tokio::test]
async fn test_register_into_new_role_then_login() {
    let test = setup().await;
    let role_name = format!("dispatcher-{}", unique_suffix());
    create_as_admin(&test, "/api/role", json!({ "role_name": role_name })).await;

    let email = unique_email();
    let response = test
        .send(json_request(
            Method::POST,
            "/api/users/register",
            registration(&email, &role_name),
            None,
        ))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_response_body(response).await;
    assert_eq!(body["message"], "User created successfully");
    assert_eq!(body["user"]["email"], email);

    let login = login(&test.app, &email, TEST_PASSWORD).await;
    assert_eq!(login["message"], "Login successful");
    let token = login["token"].as_str().unwrap();

    let response = test.send(get_request("/api/users/me", token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["role_name"], role_name);
    assert_eq!(body["permissions"], json!([]));
}

#[tokio::test]
async fn test_register_unknown_role_is_not_found() {
    let test = setup().await;

    let response = test
        .send(json_request(
            Method::POST,
            "/api/users/register",
            registration(&unique_email(), &format!("nobody-{}", unique_suffix())),
            None,
        ))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = parse_response_body(response).await;
    assert_eq!(body["message"], "Role not found");
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let test = setup().await;
    let role_name = format!("collector-{}", unique_suffix());
    create_as_admin(&test, "/api/role", json!({ "role_name": role_name })).await;
    let email = unique_email();

    let first = test
        .send(json_request(
            Method::POST,
            "/api/users/register",
            registration(&email, &role_name),
            None,
        ))
        .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = test
        .send(json_request(
            Method::POST,
            "/api/users/register",
            registration(&email.to_uppercase(), &role_name),
            None,
        ))
        .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_admin_requires_user_write() {
    let test = setup().await;

    let anonymous = test
        .send(json_request(
            Method::POST,
            "/api/users/register",
            registration(&unique_email(), "admin"),
            None,
        ))
        .await;
    assert_eq!(anonymous.status(), StatusCode::FORBIDDEN);

    let by_admin = test
        .send(json_request(
            Method::POST,
            "/api/users/register",
            registration(&unique_email(), "admin"),
            Some(&test.admin_token),
        ))
        .await;
    assert_eq!(by_admin.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_register_validation_errors() {
    let test = setup().await;
    let mut body = registration("not-an-email", "admin");
    body["password"] = json!("short");

    let response = test
        .send(json_request(Method::POST, "/api/users/register", body, None))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "validation_error");
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("Invalid email format"));
    assert!(message.contains("Password must be 8-128 characters"));
}

#[tokio::test]
async fn test_invalid_token_is_unauthorized() {
    let test = setup().await;

    let response = test
        .send(get_request("/api/users/me", "not.a.token"))
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = test
        .send(request(Method::GET, "/api/wastebin", None))
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_deleted_user_token_stops_working() {
    let test = setup().await;
    let (user_id, token) = user_with_permissions(&test, &[]).await;

    let response = test
        .send(delete_request(
            &format!("/api/users/{}", user_id),
            &test.admin_token,
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = test.send(get_request("/api/users/me", &token)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_longest_names_fit() {
    let test = setup().await;
    let role_name = format!("sweeper-{}", unique_suffix());
    create_as_admin(&test, "/api/role", json!({ "role_name": role_name })).await;

    let mut body = registration(&unique_email(), &role_name);
    body["firstname"] = json!("F".repeat(49));
    body["lastname"] = json!("L".repeat(49));
    let response = test
        .send(json_request(Method::POST, "/api/users/register", body, None))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_response_body(response).await;
    assert_eq!(body["user"]["username"].as_str().unwrap().len(), 99);

    let mut body = registration(&unique_email(), &role_name);
    body["firstname"] = json!("F".repeat(50));
    body["lastname"] = json!("L".repeat(50));
    let response = test
        .send(json_request(Method::POST, "/api/users/register", body, None))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "validation_error");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("First name must be 1-49 characters"));
}

#[tokio::test]
async fn test_register_overlong_phone_is_bad_request() {
    let test = setup().await;
    let role_name = format!("sweeper-{}", unique_suffix());
    create_as_admin(&test, "/api/role", json!({ "role_name": role_name })).await;
    let email = unique_email();

    let mut body = registration(&email, &role_name);
    body["phone"] = json!("(12) (34) (56) (78) (90) (12) (34) (56) (78) (90)");
    let response = test
        .send(json_request(Method::POST, "/api/users/register", body, None))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Phone number must be at most 32 characters"));

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind(&email)
        .fetch_one(&test.pool)
        .await
        .unwrap();
    assert_eq!(stored, 0);
}
