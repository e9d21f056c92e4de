use axum::extract::State;
use dietplan_core::domain::{
    authentication::{ports::AuthService, value_objects::RegisterInput},
    user::entities::User,
};

use crate::application::http::{
    authentication::validators::RegisterValidator,
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
    path = "/register",
    tag = "auth",
    summary = "Register user",
    description = "Creates an account. The password is stored hashed and never returned.",
    request_body = RegisterValidator,
    responses(
        (status = 201, body = User),
        (status = 400, description = "Username already registered"),
        (status = 422, description = "Malformed body")
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RegisterValidator>,
) -> Result<Response<User>, ApiError> {
    let user = state
        .service
        .register(RegisterInput {
            username: payload.username,
            password: payload.password,
            email: payload.email,
            full_name: payload.full_name,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(user))
}
