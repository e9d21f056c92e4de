mod common;

use axum::http::StatusCode;
use common::{ADMIN_PASSWORD, ADMIN_USERNAME, customer_body, login, spawn_server};
use serde_json::Value;

#[tokio::test]
async fn test_health_live() {
    let server = spawn_server(&[]).await;

    let response = server.get("/health/live").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "ok");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let server = spawn_server(&[]).await;

    let response = server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let doc = response.json::<Value>();
    assert_eq!(doc["info"]["title"], "Personalized Diet Planning API");
    assert!(doc["paths"].get("/customers").is_some());
    assert!(doc["paths"].get("/diet-plans/{plan_id}/validate").is_some());
    assert!(doc["paths"].get("/login").is_some());
}

#[tokio::test]
async fn test_routes_are_served_under_root_path() {
    let server = spawn_server(&["--root-path", "/api"]).await;
    let response = server
        .post("/api/login")
        .form(&[("username", ADMIN_USERNAME), ("password", ADMIN_PASSWORD)])
        .await;
    response.assert_status_ok();
    let token = response.json::<Value>()["access_token"]
        .as_str()
        .unwrap()
        .to_string();

    server
        .get("/api/customers")
        .authorization_bearer(&token)
        .await
        .assert_status_ok();

    server
        .get("/customers")
        .authorization_bearer(&token)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_disabled_auth_serves_resources_without_token() {
    let server = spawn_server(&["--auth-mode", "disabled"]).await;

    server.get("/customers").await.assert_status_ok();
    server.get("/diet-plans").await.assert_status_ok();

    let created = server.post("/customers").json(&customer_body("Otto")).await;
    created.assert_status(StatusCode::CREATED);

    server
        .post("/diet-plans/1/validate")
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_disabled_auth_still_rejects_bad_tokens_on_current_user() {
    let server = spawn_server(&["--auth-mode", "disabled"]).await;

    server
        .get("/users/me")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let token = login(&server, ADMIN_USERNAME, ADMIN_PASSWORD).await;
    let me = server.get("/users/me").authorization_bearer(&token).await;
    me.assert_status_ok();
    assert_eq!(me.json::<Value>()["username"], ADMIN_USERNAME);
}

#[tokio::test]
async fn test_without_demo_data_stores_start_empty() {
    let server = spawn_server(&["--demo-data", "false"]).await;
    let token = login(&server, ADMIN_USERNAME, ADMIN_PASSWORD).await;

    let customers = server
        .get("/customers")
        .authorization_bearer(&token)
        .await
        .json::<Vec<Value>>();
    assert!(customers.is_empty());

    let created = server
        .post("/customers")
        .authorization_bearer(&token)
        .json(&customer_body("Pia"))
        .await;
    assert_eq!(created.json::<Value>()["id"], 1);
}

#[tokio::test]
async fn test_without_admin_no_one_can_log_in() {
    let server = spawn_server(&["--no-admin"]).await;

    server
        .post("/login")
        .form(&[("username", ADMIN_USERNAME), ("password", ADMIN_PASSWORD)])
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}
