use axum::extract::State;
use dietplan_core::domain::recipe::{entities::Recipe, ports::RecipeService};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiPath},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Get recipe",
    params(
        ("recipe_id" = u64, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = Recipe),
        (status = 404, description = "Recipe not found")
    ),
)]
pub async fn get_recipe(
    ApiPath(recipe_id): ApiPath<u64>,
    State(state): State<AppState>,
) -> Result<Response<Recipe>, ApiError> {
    let recipe = state
        .service
        .get_recipe(recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(recipe))
}
