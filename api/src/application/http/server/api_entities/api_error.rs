use axum::{
    Form, Json,
    extract::{
        FromRequest, FromRequestParts, Path, Query, Request,
        rejection::{FormRejection, JsonRejection},
    },
    http::{HeaderValue, StatusCode, header::WWW_AUTHENTICATE, request::Parts},
    response::{IntoResponse, Response},
};
use dietplan_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::Validate;

pub const UNAUTHENTICATED_MESSAGE: &str = "Could not validate credentials";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    ValidationError(String),
    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub code: String,
    pub message: String,
    pub status: u16,
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "E_UNAUTHORIZED"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "E_NOT_FOUND"),
            ApiError::ValidationError(_) => (StatusCode::UNPROCESSABLE_ENTITY, "E_VALIDATION"),
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL_SERVER_ERROR")
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound(_) => ApiError::NotFound(error.to_string()),
            CoreError::Invalid(message) => ApiError::ValidationError(message),
            CoreError::UsernameTaken => ApiError::BadRequest(error.to_string()),
            CoreError::InvalidCredentials => ApiError::Unauthorized(error.to_string()),
            CoreError::InvalidToken | CoreError::TokenExpired => {
                ApiError::Unauthorized(UNAUTHENTICATED_MESSAGE.to_string())
            }
            CoreError::HashError | CoreError::InternalServerError => {
                error!("Request failed: {}", error);
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.parts();
        let unauthorized = matches!(self, ApiError::Unauthorized(_));

        let body = ApiErrorResponse {
            code: code.to_string(),
            message: self.to_string(),
            status: status.as_u16(),
        };

        let mut response = (status, Json(body)).into_response();
        if unauthorized {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}

/// JSON body extractor that runs `validator` rules. Every rejection, from a
/// missing field to a failed rule, is reported as 422.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::ValidationError(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::ValidationError(errors.to_string()))?;

        Ok(ValidateJson(value))
    }
}

/// Same as [`ValidateJson`] for `application/x-www-form-urlencoded` bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateForm<T>(pub T);

impl<T, S> FromRequest<S> for ValidateForm<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Form<T>: FromRequest<S, Rejection = FormRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::ValidationError(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::ValidationError(errors.to_string()))?;

        Ok(ValidateForm(value))
    }
}

/// Path parameters whose parse failures surface as a 422 [`ApiError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::ValidationError(rejection.body_text()))?;

        Ok(ApiPath(value))
    }
}

/// Query string counterpart of [`ApiPath`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::ValidationError(rejection.body_text()))?;

        Ok(ApiQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use dietplan_core::domain::common::entities::app_errors::EntityKind;

    use super::*;

    #[test]
    fn test_not_found_keeps_entity_name() {
        let error = ApiError::from(CoreError::NotFound(EntityKind::DietPlan));

        assert_eq!(error, ApiError::NotFound("Diet plan not found".to_string()));
    }

    #[test]
    fn test_token_errors_share_one_message() {
        assert_eq!(
            ApiError::from(CoreError::TokenExpired),
            ApiError::from(CoreError::InvalidToken)
        );
    }

    #[test]
    fn test_unauthorized_carries_challenge_header() {
        let response = ApiError::Unauthorized(UNAUTHENTICATED_MESSAGE.to_string()).into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()[WWW_AUTHENTICATE], "Bearer");
    }

    #[test]
    fn test_username_taken_is_bad_request() {
        let response = ApiError::from(CoreError::UsernameTaken).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_path_id_is_validation_error() {
        let app = axum::Router::new().route(
            "/items/{id}",
            axum::routing::get(|ApiPath(id): ApiPath<u64>| async move { id.to_string() }),
        );
        let server = axum_test::TestServer::new(app).unwrap();

        let response = server.get("/items/abc").await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.json::<ApiErrorResponse>().code, "E_VALIDATION");
        server.get("/items/7").await.assert_text("7");
    }

    #[derive(Debug, Deserialize)]
    struct Filter {
        #[allow(dead_code)]
        owner: Option<u64>,
    }

    #[tokio::test]
    async fn test_malformed_query_is_validation_error() {
        let app = axum::Router::new().route(
            "/items",
            axum::routing::get(|ApiQuery(_): ApiQuery<Filter>| async { "ok" }),
        );
        let server = axum_test::TestServer::new(app).unwrap();

        server
            .get("/items")
            .add_query_param("owner", "abc")
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        server.get("/items").await.assert_text("ok");
    }
}
