use axum::extract::State;
use dietplan_core::domain::diet_plan::{ports::DietPlanService, value_objects::PlanValidation};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiPath},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    post,
    path = "/{plan_id}/validate",
    tag = "diet-plan",
    summary = "Validate diet plan",
    description = "Checks each nutrient total is within 10% of the customer's goal.",
    params(
        ("plan_id" = u64, Path, description = "Diet plan ID"),
    ),
    responses(
        (status = 200, body = PlanValidation),
        (status = 404, description = "Diet plan or customer not found")
    ),
)]
pub async fn validate_diet_plan(
    ApiPath(plan_id): ApiPath<u64>,
    State(state): State<AppState>,
) -> Result<Response<PlanValidation>, ApiError> {
    let validation = state
        .service
        .validate_diet_plan(plan_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(validation))
}
