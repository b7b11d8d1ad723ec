//! Integration tests for the guarded user administration routes.

mod common;

use axum::http::{Method, StatusCode};
use common::*;
use serde_json::{json, Value};

async fn fetch_user(test: &TestApp, user_id: i64) -> Value {
    let response = test
        .send(get_request(&format!("/api/users/{}", user_id), &test.admin_token))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    parse_response_body(response).await
}

fn replacement(email: &str, role_id: i64) -> Value {
    json!({
        "username": "Grace Hopper",
        "email": email,
        "phone_no": "+44 20 7946 0958",
        "address": "Depot Lane 7",
        "password": "N3wDepotP@ss",
        "role_id": role_id,
    })
}

#[tokio::test]
async fn test_list_and_total_include_new_user() {
    let test = setup().await;
    let (user_id, _) = user_with_permissions(&test, &[]).await;

    let response = test.send(get_request("/api/users", &test.admin_token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    let users = body.as_array().unwrap();
    let listed = users.iter().find(|u| u["user_id"] == user_id).unwrap();
    assert!(listed.get("password").is_none());
    assert!(listed.get("password_hash").is_none());

    let response = test
        .send(get_request("/api/users/total", &test.admin_token))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert!(body["total"].as_i64().unwrap() >= 2);
}

#[tokio::test]
async fn test_get_user_by_id() {
    let test = setup().await;

    let body = fetch_user(&test, test.admin_user_id).await;
    assert_eq!(body["email"], test.admin_email.as_str());
    assert_eq!(body["username"], "Test Administrator");

    let response = test
        .send(get_request("/api/users/999999999", &test.admin_token))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = parse_response_body(response).await;
    assert_eq!(body["message"], "User not found");

    let response = test
        .send(get_request("/api/users/not-a-number", &test.admin_token))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_update_user_replaces_every_field() {
    let test = setup().await;
    let (user_id, _) = user_with_permissions(&test, &[]).await;
    let new_role = create_as_admin(
        &test,
        "/api/role",
        json!({ "role_name": format!("planner-{}", unique_suffix()) }),
    )
    .await;
    let new_email = unique_email();

    let response = test
        .send(json_request(
            Method::PUT,
            &format!("/api/users/{}", user_id),
            replacement(&new_email, new_role),
            Some(&test.admin_token),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["message"], "User updated successfully");

    let body = fetch_user(&test, user_id).await;
    assert_eq!(body["username"], "Grace Hopper");
    assert_eq!(body["email"], new_email.as_str());
    assert_eq!(body["phone_no"], "+44 20 7946 0958");
    assert_eq!(body["address"], "Depot Lane 7");
    assert_eq!(body["role_id"], new_role);

    // The password is replaced too.
    let login = login(&test.app, &new_email, "N3wDepotP@ss").await;
    assert_eq!(login["user"]["user_id"], user_id);
}

#[tokio::test]
async fn test_update_user_with_missing_role_writes_nothing() {
    let test = setup().await;
    let (user_id, _) = user_with_permissions(&test, &[]).await;
    let before = fetch_user(&test, user_id).await;

    let response = test
        .send(json_request(
            Method::PUT,
            &format!("/api/users/{}", user_id),
            replacement(&unique_email(), 999_999_999),
            Some(&test.admin_token),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = parse_response_body(response).await;
    assert_eq!(body["message"], "Role not found");

    assert_eq!(fetch_user(&test, user_id).await, before);
}

#[tokio::test]
async fn test_update_user_missing_is_not_found() {
    let test = setup().await;

    let response = test
        .send(json_request(
            Method::PUT,
            "/api/users/999999999",
            replacement(&unique_email(), 1),
            Some(&test.admin_token),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_user_duplicate_email_conflicts() {
    let test = setup().await;
    let (user_id, _) = user_with_permissions(&test, &[]).await;
    let before = fetch_user(&test, user_id).await;
    let role_id = before["role_id"].as_i64().unwrap();

    let response = test
        .send(json_request(
            Method::PUT,
            &format!("/api/users/{}", user_id),
            replacement(&test.admin_email, role_id),
            Some(&test.admin_token),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "conflict");

    assert_eq!(fetch_user(&test, user_id).await, before);
}

#[tokio::test]
async fn test_update_user_overlong_phone_is_bad_request() {
    let test = setup().await;
    let (user_id, _) = user_with_permissions(&test, &[]).await;
    let role_id = fetch_user(&test, user_id).await["role_id"].as_i64().unwrap();

    let mut body = replacement(&unique_email(), role_id);
    body["phone_no"] = json!("(12) (34) (56) (78) (90) (12) (34) (56) (78) (90)");
    let response = test
        .send(json_request(
            Method::PUT,
            &format!("/api/users/{}", user_id),
            body,
            Some(&test.admin_token),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_user_referenced_by_request_conflicts() {
    let test = setup().await;
    let (user_id, _) = user_with_permissions(&test, &[]).await;
    let wastebin_id = create_wastebin(&test).await;
    let request_id = create_as_admin(
        &test,
        "/api/requests",
        json!({
            "request_type": "replacement",
            "request_status": "pending",
            "user_id": user_id,
            "wastebin_id": wastebin_id,
        }),
    )
    .await;
    let uri = format!("/api/users/{}", user_id);

    let response = test.send(delete_request(&uri, &test.admin_token)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = parse_response_body(response).await;
    assert_eq!(body["message"], "User is still referenced");
    fetch_user(&test, user_id).await;

    let response = test
        .send(delete_request(
            &format!("/api/requests/{}", request_id),
            &test.admin_token,
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = test.send(delete_request(&uri, &test.admin_token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = test.send(get_request(&uri, &test.admin_token)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_user_routes_require_user_capabilities() {
    let test = setup().await;
    let (user_id, reader) = user_with_permissions(&test, &["user:read"]).await;

    let response = test
        .send(get_request(&format!("/api/users/{}", user_id), &reader))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = test
        .send(delete_request(&format!("/api/users/{}", user_id), &reader))
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = parse_response_body(response).await;
    assert_eq!(body["message"], "Missing permission user:write");
}
