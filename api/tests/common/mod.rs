#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;
use dietplan_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};
use test_context::AsyncTestContext;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "secret";

/// Builds a server over a freshly seeded service.
pub async fn spawn_server(extra_args: &[&str]) -> TestServer {
    let mut argv = vec![
        "dietplan-api",
        "--metrics",
        "false",
        "--jwt-secret",
        "integration-test-secret",
    ];
    argv.extend_from_slice(extra_args);

    let args = Arc::new(Args::parse_from(argv));
    let app_state = state(args).await.unwrap();

    TestServer::new(router(app_state).unwrap()).unwrap()
}

pub async fn login(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/login")
        .form(&[("username", username), ("password", password)])
        .await;
    response.assert_status_ok();

    response.json::<Value>()["access_token"]
        .as_str()
        .unwrap()
        .to_string()
}

pub fn customer_body(name: &str) -> Value {
    json!({
        "name": name,
        "email": format!("{name}@example.com"),
        "phone": "555-0100",
        "restrictions": [{"type": "Vegan", "description": "No animal products"}],
        "goal": {"calories": 1900, "protein": 100, "carbs": 230, "fat": 60}
    })
}

/// Seeded server in bearer mode plus an admin access token.
pub struct TestApp {
    pub server: TestServer,
    pub token: String,
}

impl TestApp {
    pub async fn with_args(extra_args: &[&str]) -> Self {
        let server = spawn_server(extra_args).await;
        let token = login(&server, ADMIN_USERNAME, ADMIN_PASSWORD).await;

        Self { server, token }
    }
}

impl AsyncTestContext for TestApp {
    async fn setup() -> Self {
        TestApp::with_args(&[]).await
    }
}
