use super::handlers::create_customer::{__path_create_customer, create_customer};
use super::handlers::delete_customer::{__path_delete_customer, delete_customer};
use super::handlers::get_customer::{__path_get_customer, get_customer};
use super::handlers::get_customers::{__path_get_customers, get_customers};
use super::handlers::update_customer::{__path_update_customer, update_customer};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_customers,
    get_customer,
    create_customer,
    update_customer,
    delete_customer
))]
pub struct CustomerApiDoc;

pub fn customer_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/customers"), get(get_customers))
        .route(&format!("{root_path}/customers"), post(create_customer))
        .route(
            &format!("{root_path}/customers/{{customer_id}}"),
            get(get_customer),
        )
        .route(
            &format!("{root_path}/customers/{{customer_id}}"),
            put(update_customer),
        )
        .route(
            &format!("{root_path}/customers/{{customer_id}}"),
            delete(delete_customer),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
