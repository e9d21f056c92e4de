use axum::{
    RequestPartsExt,
    extract::{FromRef, FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use dietplan_core::domain::{
    authentication::{
        ports::AuthService,
        value_objects::{AuthorizeRequestInput, Identity},
    },
    common::entities::app_errors::CoreError,
};
use thiserror::Error;
use tracing::{debug, error};

use super::http::server::{
    api_entities::api_error::{ApiError, UNAUTHENTICATED_MESSAGE},
    app_state::AppState,
};
use crate::args::AuthMode;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Token not found")]
    TokenNotFound,
    #[error("Authorization failed")]
    Internal,
}

impl From<CoreError> for AuthError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::TokenExpired => AuthError::TokenExpired,
            CoreError::InvalidToken => AuthError::InvalidToken,
            other => {
                error!("Failed to authorize request: {}", other);
                AuthError::Internal
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::Internal => ApiError::InternalServerError(error.to_string()),
            _ => ApiError::Unauthorized(UNAUTHENTICATED_MESSAGE.to_string()),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        debug!("Rejecting request: {}", self);
        ApiError::from(self).into_response()
    }
}

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Result<String, AuthError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| AuthError::TokenNotFound)?;

    Ok(bearer.token().to_string())
}

async fn resolve_identity(state: &AppState, token: String) -> Result<Identity, AuthError> {
    let output = state
        .service
        .authorize_request(AuthorizeRequestInput { token })
        .await?;

    Ok(output.identity)
}

/// Resource-route guard.
///
/// In `bearer` mode a valid token is mandatory and the caller's [`Identity`]
/// is stored in the request extensions. In `disabled` mode the request always
/// goes through, carrying an identity only when a valid token was sent.
pub async fn auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let (mut parts, body) = req.into_parts();
    let token = extract_token_from_bearer(&mut parts).await;

    let identity = match (state.args.auth.auth_mode, token) {
        (AuthMode::Bearer, Ok(token)) => Some(resolve_identity(&state, token).await?),
        (AuthMode::Bearer, Err(e)) => return Err(e),
        (AuthMode::Disabled, Ok(token)) => resolve_identity(&state, token).await.ok(),
        (AuthMode::Disabled, Err(_)) => None,
    };

    let mut req = Request::from_parts(parts, body);
    if let Some(identity) = identity {
        req.extensions_mut().insert(identity);
    }

    Ok(next.run(req).await)
}

/// Caller identity that must be backed by a valid bearer token, whatever the
/// auth mode.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>().cloned() {
            return Ok(RequiredIdentity(identity));
        }

        let token = extract_token_from_bearer(parts).await?;
        let app_state = AppState::from_ref(state);
        let identity = resolve_identity(&app_state, token).await?;

        parts.extensions.insert(identity.clone());

        Ok(RequiredIdentity(identity))
    }
}
