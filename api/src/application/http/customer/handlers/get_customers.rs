use axum::extract::State;
use dietplan_core::domain::customer::{entities::Customer, ports::CustomerService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "",
    tag = "customer",
    summary = "Get customers",
    description = "Lists every customer in insertion order.",
    responses(
        (status = 200, body = Vec<Customer>)
    ),
)]
pub async fn get_customers(
    State(state): State<AppState>,
) -> Result<Response<Vec<Customer>>, ApiError> {
    let customers = state
        .service
        .get_customers()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(customers))
}
