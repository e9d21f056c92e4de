use axum::extract::State;
use dietplan_core::domain::diet_plan::ports::DietPlanService;
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
pub struct DeleteDietPlanResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{plan_id}",
    tag = "diet-plan",
    summary = "Delete diet plan",
    params(
        ("plan_id" = u64, Path, description = "Diet plan ID"),
    ),
    responses(
        (status = 200, body = DeleteDietPlanResponse),
        (status = 404, description = "Diet plan not found")
    ),
)]
pub async fn delete_diet_plan(
    ApiPath(plan_id): ApiPath<u64>,
    State(state): State<AppState>,
) -> Result<Response<DeleteDietPlanResponse>, ApiError> {
    state
        .service
        .delete_diet_plan(plan_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteDietPlanResponse {
        message: "Diet plan deleted successfully".to_string(),
    }))
}
