use axum::extract::State;
use dietplan_core::domain::diet_plan::{
    entities::DietPlan, ports::DietPlanService, value_objects::CreateDietPlanInput,
};

use crate::application::http::{
    diet_plan::validators::DietPlanValidator,
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
    tag = "diet-plan",
    summary = "Create diet plan",
    description = "Stores a diet plan for an existing customer. Meal recipes are not checked.",
    request_body = DietPlanValidator,
    responses(
        (status = 201, body = DietPlan),
        (status = 404, description = "Customer not found"),
        (status = 422, description = "Malformed body")
    ),
)]
pub async fn create_diet_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<DietPlanValidator>,
) -> Result<Response<DietPlan>, ApiError> {
    let plan = state
        .service
        .create_diet_plan(CreateDietPlanInput {
            customer_id: payload.customer_id,
            date: payload.date,
            meals: payload.meals,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(plan))
}
