use super::handlers::create_diet_plan::{__path_create_diet_plan, create_diet_plan};
use super::handlers::delete_diet_plan::{__path_delete_diet_plan, delete_diet_plan};
use super::handlers::get_diet_plan::{__path_get_diet_plan, get_diet_plan};
use super::handlers::get_diet_plans::{__path_get_diet_plans, get_diet_plans};
use super::handlers::update_diet_plan::{__path_update_diet_plan, update_diet_plan};
use super::handlers::validate_diet_plan::{__path_validate_diet_plan, validate_diet_plan};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_diet_plans,
    get_diet_plan,
    create_diet_plan,
    update_diet_plan,
    delete_diet_plan,
    validate_diet_plan
))]
pub struct DietPlanApiDoc;

pub fn diet_plan_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/diet-plans"), get(get_diet_plans))
        .route(&format!("{root_path}/diet-plans"), post(create_diet_plan))
        .route(
            &format!("{root_path}/diet-plans/{{plan_id}}"),
            get(get_diet_plan),
        )
        .route(
            &format!("{root_path}/diet-plans/{{plan_id}}"),
            put(update_diet_plan),
        )
        .route(
            &format!("{root_path}/diet-plans/{{plan_id}}"),
            delete(delete_diet_plan),
        )
        .route(
            &format!("{root_path}/diet-plans/{{plan_id}}/validate"),
            post(validate_diet_plan),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
