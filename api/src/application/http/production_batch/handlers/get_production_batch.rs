use axum::extract::State;
use dietplan_core::domain::production_batch::{
    entities::ProductionBatch, ports::ProductionBatchService,
};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiPath},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{batch_id}",
    tag = "production-batch",
    summary = "Get production batch",
    params(
        ("batch_id" = u64, Path, description = "Production batch ID"),
    ),
    responses(
        (status = 200, body = ProductionBatch),
        (status = 404, description = "Production batch not found")
    ),
)]
pub async fn get_production_batch(
    ApiPath(batch_id): ApiPath<u64>,
    State(state): State<AppState>,
) -> Result<Response<ProductionBatch>, ApiError> {
    let batch = state
        .service
        .get_production_batch(batch_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(batch))
}
