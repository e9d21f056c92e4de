use axum::extract::State;
use dietplan_core::domain::customer::{
    entities::Customer, ports::CustomerService, value_objects::CreateCustomerInput,
};

use crate::application::http::{
    customer::validators::CustomerValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "customer",
    summary = "Create customer",
    description = "Stores a new customer and assigns the next identifier.",
    request_body = CustomerValidator,
    responses(
        (status = 201, body = Customer),
        (status = 422, description = "Malformed body")
    ),
)]
pub async fn create_customer(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CustomerValidator>,
) -> Result<Response<Customer>, ApiError> {
    let customer = state
        .service
        .create_customer(CreateCustomerInput {
            name: payload.name,
            email: payload.email,
            phone: payload.phone.unwrap_or_default(),
            restrictions: payload.restrictions,
            goal: payload.goal,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(customer))
}
