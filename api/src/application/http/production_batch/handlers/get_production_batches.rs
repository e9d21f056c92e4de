use axum::extract::State;
use dietplan_core::domain::production_batch::{
    entities::ProductionBatch, ports::ProductionBatchService,
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "",
    tag = "production-batch",
    summary = "Get production batches",
    responses(
        (status = 200, body = Vec<ProductionBatch>)
    ),
)]
pub async fn get_production_batches(
    State(state): State<AppState>,
) -> Result<Response<Vec<ProductionBatch>>, ApiError> {
    let batches = state
        .service
        .get_production_batches()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(batches))
}
