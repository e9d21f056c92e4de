use axum::extract::State;
use dietplan_core::domain::production_batch::{
    entities::ProductionBatch, ports::ProductionBatchService,
    value_objects::PlanProductionBatchInput,
};

use crate::application::http::{
    production_batch::validators::PlanProductionBatchValidator,
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
    path = "/from-diet-plans",
    tag = "production-batch",
    summary = "Plan production batch",
    description = "Creates a batch whose recipe portions are summed from the given diet plans.",
    request_body = PlanProductionBatchValidator,
    responses(
        (status = 201, body = ProductionBatch),
        (status = 404, description = "Diet plan not found"),
        (status = 422, description = "Malformed body")
    ),
)]
pub async fn plan_production_batch(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<PlanProductionBatchValidator>,
) -> Result<Response<ProductionBatch>, ApiError> {
    let batch = state
        .service
        .plan_production_batch(PlanProductionBatchInput {
            production_date: payload.production_date,
            diet_plans: payload.diet_plans,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(batch))
}
