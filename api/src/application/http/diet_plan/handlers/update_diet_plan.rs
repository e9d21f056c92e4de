use axum::extract::State;
use dietplan_core::domain::diet_plan::{
    entities::DietPlan, ports::DietPlanService, value_objects::UpdateDietPlanInput,
};

use crate::application::http::{
    diet_plan::validators::DietPlanValidator,
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
    path = "/{plan_id}",
    tag = "diet-plan",
    summary = "Update diet plan",
    description = "Replaces every field of the plan. The customer reference is not re-checked.",
    params(
        ("plan_id" = u64, Path, description = "Diet plan ID"),
    ),
    request_body = DietPlanValidator,
    responses(
        (status = 200, body = DietPlan),
        (status = 404, description = "Diet plan not found")
    ),
)]
pub async fn update_diet_plan(
    ApiPath(plan_id): ApiPath<u64>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<DietPlanValidator>,
) -> Result<Response<DietPlan>, ApiError> {
    let plan = state
        .service
        .update_diet_plan(UpdateDietPlanInput {
            plan_id,
            customer_id: payload.customer_id,
            date: payload.date,
            meals: payload.meals,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(plan))
}
