use super::handlers::create_production_batch::{
    __path_create_production_batch, create_production_batch,
};
use super::handlers::delete_production_batch::{
    __path_delete_production_batch, delete_production_batch,
};
use super::handlers::get_production_batch::{__path_get_production_batch, get_production_batch};
use super::handlers::get_production_batches::{
    __path_get_production_batches, get_production_batches,
};
use super::handlers::plan_production_batch::{
    __path_plan_production_batch, plan_production_batch,
};
use super::handlers::update_production_batch::{
    __path_update_production_batch, update_production_batch,
};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_production_batches,
    get_production_batch,
    create_production_batch,
    update_production_batch,
    delete_production_batch,
    plan_production_batch
))]
pub struct ProductionBatchApiDoc;

pub fn production_batch_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/production-batches"),
            get(get_production_batches),
        )
        .route(
            &format!("{root_path}/production-batches"),
            post(create_production_batch),
        )
        .route(
            &format!("{root_path}/production-batches/from-diet-plans"),
            post(plan_production_batch),
        )
        .route(
            &format!("{root_path}/production-batches/{{batch_id}}"),
            get(get_production_batch),
        )
        .route(
            &format!("{root_path}/production-batches/{{batch_id}}"),
            put(update_production_batch),
        )
        .route(
            &format!("{root_path}/production-batches/{{batch_id}}"),
            delete(delete_production_batch),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
