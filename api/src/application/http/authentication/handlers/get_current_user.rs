use dietplan_core::domain::user::entities::User;

use crate::application::{
    auth::RequiredIdentity,
    http::server::api_entities::{api_error::ApiError, response::Response},
};

#[utoipa::path(
    get,
    path = "/users/me",
    tag = "auth",
    summary = "Current user",
    description = "Returns the account behind the bearer token.",
    responses(
        (status = 200, body = User),
        (status = 401, description = "Could not validate credentials")
    ),
    security(("bearer" = [])),
)]
pub async fn get_current_user(
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<User>, ApiError> {
    Ok(Response::OK(identity.user().clone()))
}
