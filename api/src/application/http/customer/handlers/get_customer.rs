use axum::extract::State;
use dietplan_core::domain::customer::{entities::Customer, ports::CustomerService};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiPath},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{customer_id}",
    tag = "customer",
    summary = "Get customer",
    params(
        ("customer_id" = u64, Path, description = "Customer ID"),
    ),
    responses(
        (status = 200, body = Customer),
        (status = 404, description = "Customer not found")
    ),
)]
pub async fn get_customer(
    ApiPath(customer_id): ApiPath<u64>,
    State(state): State<AppState>,
) -> Result<Response<Customer>, ApiError> {
    let customer = state
        .service
        .get_customer(customer_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(customer))
}
