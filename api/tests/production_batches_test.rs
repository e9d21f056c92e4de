mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::{Value, json};
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn test_get_seeded_batch(app: &mut TestApp) {
    let response = app
        .server
        .get("/production-batches/1")
        .authorization_bearer(&app.token)
        .await;

    response.assert_status_ok();
    let batch = response.json::<Value>();
    assert_eq!(batch["productionDate"], "2025-11-17");
    assert_eq!(batch["dietPlans"], json!([1]));
    assert_eq!(
        batch["recipeBatches"],
        json!([
            {"recipeId": 1, "portions": 10},
            {"recipeId": 2, "portions": 10},
            {"recipeId": 3, "portions": 10}
        ])
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_batch_references_are_stored_as_given(app: &mut TestApp) {
    let response = app
        .server
        .post("/production-batches")
        .authorization_bearer(&app.token)
        .json(&json!({
            "productionDate": "2025-12-01",
            "dietPlans": [42],
            "recipeBatches": [{"recipeId": 99, "portions": 5}]
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let batch = response.json::<Value>();
    assert_eq!(batch["id"], 2);
    assert_eq!(batch["dietPlans"], json!([42]));
    assert_eq!(batch["recipeBatches"][0]["recipeId"], 99);
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_batch_lifecycle(app: &mut TestApp) {
    let updated = app
        .server
        .put("/production-batches/1")
        .authorization_bearer(&app.token)
        .json(&json!({
            "productionDate": "2025-11-18",
            "recipeBatches": [{"recipeId": 2, "portions": 25}]
        }))
        .await;
    updated.assert_status_ok();
    let batch = updated.json::<Value>();
    assert_eq!(batch["id"], 1);
    assert_eq!(batch["dietPlans"], json!([]));
    assert_eq!(batch["recipeBatches"], json!([{"recipeId": 2, "portions": 25}]));

    let listed = app
        .server
        .get("/production-batches")
        .authorization_bearer(&app.token)
        .await
        .json::<Vec<Value>>();
    assert_eq!(listed.len(), 1);

    let deleted = app
        .server
        .delete("/production-batches/1")
        .authorization_bearer(&app.token)
        .await;
    deleted.assert_status_ok();
    assert_eq!(
        deleted.json::<Value>()["message"],
        "Production batch deleted successfully"
    );

    let missing = app
        .server
        .get("/production-batches/1")
        .authorization_bearer(&app.token)
        .await;
    missing.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        missing.json::<Value>()["message"],
        "Production batch not found"
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_plan_batch_from_diet_plans(app: &mut TestApp) {
    let second_plan = app
        .server
        .post("/diet-plans")
        .authorization_bearer(&app.token)
        .json(&json!({
            "customerId": 2,
            "date": "2025-11-17",
            "meals": [
                {"type": "LUNCH", "recipeId": 1, "portion": 2},
                {"type": "DINNER", "recipeId": 3}
            ]
        }))
        .await;
    second_plan.assert_status(StatusCode::CREATED);
    let second_plan_id = second_plan.json::<Value>()["id"].as_u64().unwrap();

    let response = app
        .server
        .post("/production-batches/from-diet-plans")
        .authorization_bearer(&app.token)
        .json(&json!({
            "productionDate": "2025-11-17",
            "dietPlans": [1, second_plan_id]
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let batch = response.json::<Value>();
    assert_eq!(batch["dietPlans"], json!([1, second_plan_id]));
    assert_eq!(
        batch["recipeBatches"],
        json!([
            {"recipeId": 2, "portions": 1},
            {"recipeId": 1, "portions": 3},
            {"recipeId": 3, "portions": 2}
        ])
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_plan_batch_with_unknown_plan(app: &mut TestApp) {
    let response = app
        .server
        .post("/production-batches/from-diet-plans")
        .authorization_bearer(&app.token)
        .json(&json!({"productionDate": "2025-11-17", "dietPlans": [1, 77]}))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Diet plan not found");

    let listed = app
        .server
        .get("/production-batches")
        .authorization_bearer(&app.token)
        .await
        .json::<Vec<Value>>();
    assert_eq!(listed.len(), 1);
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_plan_batch_requires_plans(app: &mut TestApp) {
    app.server
        .post("/production-batches/from-diet-plans")
        .authorization_bearer(&app.token)
        .json(&json!({"productionDate": "2025-11-17", "dietPlans": []}))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[test_context(TestApp)]
#[tokio::test]
async fn test_missing_batch_operations(app: &mut TestApp) {
    app.server
        .put("/production-batches/9")
        .authorization_bearer(&app.token)
        .json(&json!({"productionDate": "2025-11-18"}))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    app.server
        .delete("/production-batches/9")
        .authorization_bearer(&app.token)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
