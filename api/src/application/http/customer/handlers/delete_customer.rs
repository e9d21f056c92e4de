use axum::extract::State;
use dietplan_core::domain::customer::ports::CustomerService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiPath},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteCustomerResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{customer_id}",
    tag = "customer",
    summary = "Delete customer",
    description = "Removes the customer. Diet plans referencing it are kept.",
    params(
        ("customer_id" = u64, Path, description = "Customer ID"),
    ),
    responses(
        (status = 200, body = DeleteCustomerResponse),
        (status = 404, description = "Customer not found")
    ),
)]
pub async fn delete_customer(
    ApiPath(customer_id): ApiPath<u64>,
    State(state): State<AppState>,
) -> Result<Response<DeleteCustomerResponse>, ApiError> {
    state
        .service
        .delete_customer(customer_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteCustomerResponse {
        message: "Customer deleted successfully".to_string(),
    }))
}
