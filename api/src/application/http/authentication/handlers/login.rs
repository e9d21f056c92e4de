use axum::extract::State;
use dietplan_core::domain::authentication::{
    ports::AuthService,
    value_objects::{LoginInput, LoginOutput},
};

use crate::application::http::{
    authentication::validators::LoginValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateForm},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    summary = "Log in",
    description = "Exchanges form credentials for a bearer access token.",
    request_body(content = LoginValidator, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, body = LoginOutput),
        (status = 401, description = "Incorrect username or password"),
        (status = 422, description = "Malformed form")
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateForm(payload): ValidateForm<LoginValidator>,
) -> Result<Response<LoginOutput>, ApiError> {
    let output = state
        .service
        .login(LoginInput {
            username: payload.username,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(output))
}
