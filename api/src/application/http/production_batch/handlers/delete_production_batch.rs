use axum::extract::State;
use dietplan_core::domain::production_batch::ports::ProductionBatchService;
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
pub struct DeleteProductionBatchResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{batch_id}",
    tag = "production-batch",
    summary = "Delete production batch",
    params(
        ("batch_id" = u64, Path, description = "Production batch ID"),
    ),
    responses(
        (status = 200, body = DeleteProductionBatchResponse),
        (status = 404, description = "Production batch not found")
    ),
)]
pub async fn delete_production_batch(
    ApiPath(batch_id): ApiPath<u64>,
    State(state): State<AppState>,
) -> Result<Response<DeleteProductionBatchResponse>, ApiError> {
    state
        .service
        .delete_production_batch(batch_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteProductionBatchResponse {
        message: "Production batch deleted successfully".to_string(),
    }))
}
