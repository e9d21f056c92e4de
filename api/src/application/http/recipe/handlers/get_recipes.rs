use axum::extract::State;
use dietplan_core::domain::recipe::{entities::Recipe, ports::RecipeService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "",
    tag = "recipe",
    summary = "Get recipes",
    responses(
        (status = 200, body = Vec<Recipe>)
    ),
)]
pub async fn get_recipes(State(state): State<AppState>) -> Result<Response<Vec<Recipe>>, ApiError> {
    let recipes = state.service.get_recipes().await.map_err(ApiError::from)?;

    Ok(Response::OK(recipes))
}
