use axum::extract::State;
use dietplan_core::domain::recipe::ports::RecipeService;
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
pub struct DeleteRecipeResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Delete recipe",
    description = "Removes the recipe. Meals pointing at it are skipped when plans are validated.",
    params(
        ("recipe_id" = u64, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = DeleteRecipeResponse),
        (status = 404, description = "Recipe not found")
    ),
)]
pub async fn delete_recipe(
    ApiPath(recipe_id): ApiPath<u64>,
    State(state): State<AppState>,
) -> Result<Response<DeleteRecipeResponse>, ApiError> {
    state
        .service
        .delete_recipe(recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteRecipeResponse {
        message: "Recipe deleted successfully".to_string(),
    }))
}
