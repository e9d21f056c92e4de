use axum::extract::State;
use dietplan_core::domain::customer::{
    entities::Customer, ports::CustomerService, value_objects::UpdateCustomerInput,
};

use crate::application::http::{
    customer::validators::CustomerValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiPath, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    put,
    path = "/{customer_id}",
    tag = "customer",
    summary = "Update customer",
    description = "Replaces every field of the customer. The identifier is kept.",
    params(
        ("customer_id" = u64, Path, description = "Customer ID"),
    ),
    request_body = CustomerValidator,
    responses(
        (status = 200, body = Customer),
        (status = 404, description = "Customer not found")
    ),
)]
pub async fn update_customer(
    ApiPath(customer_id): ApiPath<u64>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CustomerValidator>,
) -> Result<Response<Customer>, ApiError> {
    let customer = state
        .service
        .update_customer(UpdateCustomerInput {
            customer_id,
            name: payload.name,
            email: payload.email,
            phone: payload.phone.unwrap_or_default(),
            restrictions: payload.restrictions,
            goal: payload.goal,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(customer))
}
