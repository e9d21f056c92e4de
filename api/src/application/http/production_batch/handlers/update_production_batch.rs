use axum::extract::State;
use dietplan_core::domain::production_batch::{
    entities::ProductionBatch, ports::ProductionBatchService,
    value_objects::UpdateProductionBatchInput,
};

use crate::application::http::{
    production_batch::validators::ProductionBatchValidator,
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
    path = "/{batch_id}",
    tag = "production-batch",
    summary = "Update production batch",
    params(
        ("batch_id" = u64, Path, description = "Production batch ID"),
    ),
    request_body = ProductionBatchValidator,
    responses(
        (status = 200, body = ProductionBatch),
        (status = 404, description = "Production batch not found")
    ),
)]
pub async fn update_production_batch(
    ApiPath(batch_id): ApiPath<u64>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ProductionBatchValidator>,
) -> Result<Response<ProductionBatch>, ApiError> {
    let batch = state
        .service
        .update_production_batch(UpdateProductionBatchInput {
            batch_id,
            production_date: payload.production_date,
            diet_plans: payload.diet_plans,
            recipe_batches: payload.recipe_batches,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(batch))
}
