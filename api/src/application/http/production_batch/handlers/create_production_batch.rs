use axum::extract::State;
use dietplan_core::domain::production_batch::{
    entities::ProductionBatch, ports::ProductionBatchService,
    value_objects::CreateProductionBatchInput,
};

use crate::application::http::{
    production_batch::validators::ProductionBatchValidator,
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
    tag = "production-batch",
    summary = "Create production batch",
    description = "Stores the batch as given. Diet plan and recipe ids are not checked.",
    request_body = ProductionBatchValidator,
    responses(
        (status = 201, body = ProductionBatch),
        (status = 422, description = "Malformed body")
    ),
)]
pub async fn create_production_batch(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ProductionBatchValidator>,
) -> Result<Response<ProductionBatch>, ApiError> {
    let batch = state
        .service
        .create_production_batch(CreateProductionBatchInput {
            production_date: payload.production_date,
            diet_plans: payload.diet_plans,
            recipe_batches: payload.recipe_batches,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(batch))
}
