use axum::extract::State;
use dietplan_core::domain::diet_plan::{entities::DietPlan, ports::DietPlanService};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiPath},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{plan_id}",
    tag = "diet-plan",
    summary = "Get diet plan",
    params(
        ("plan_id" = u64, Path, description = "Diet plan ID"),
    ),
    responses(
        (status = 200, body = DietPlan),
        (status = 404, description = "Diet plan not found")
    ),
)]
pub async fn get_diet_plan(
    ApiPath(plan_id): ApiPath<u64>,
    State(state): State<AppState>,
) -> Result<Response<DietPlan>, ApiError> {
    let plan = state
        .service
        .get_diet_plan(plan_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(plan))
}
