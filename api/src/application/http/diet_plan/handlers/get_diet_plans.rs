use axum::extract::State;
use dietplan_core::domain::diet_plan::{
    entities::DietPlan, ports::DietPlanService, value_objects::GetDietPlansFilter,
};

use crate::application::http::{
    diet_plan::validators::GetDietPlansQuery,
    server::{
        api_entities::{
            api_error::{ApiError, ApiQuery},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "diet-plan",
    summary = "Get diet plans",
    description = "Lists diet plans, optionally only those of one customer.",
    params(GetDietPlansQuery),
    responses(
        (status = 200, body = Vec<DietPlan>)
    ),
)]
pub async fn get_diet_plans(
    ApiQuery(query): ApiQuery<GetDietPlansQuery>,
    State(state): State<AppState>,
) -> Result<Response<Vec<DietPlan>>, ApiError> {
    let plans = state
        .service
        .get_diet_plans(GetDietPlansFilter {
            customer_id: query.customer_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(plans))
}
