use axum::extract::State;
use dietplan_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::UpdateRecipeInput,
};

use crate::application::http::{
    recipe::validators::RecipeValidator,
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
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Update recipe",
    params(
        ("recipe_id" = u64, Path, description = "Recipe ID"),
    ),
    request_body = RecipeValidator,
    responses(
        (status = 200, body = Recipe),
        (status = 404, description = "Recipe not found")
    ),
)]
pub async fn update_recipe(
    ApiPath(recipe_id): ApiPath<u64>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecipeValidator>,
) -> Result<Response<Recipe>, ApiError> {
    let recipe = state
        .service
        .update_recipe(UpdateRecipeInput {
            recipe_id,
            name: payload.name,
            ingredients: payload.ingredients,
            nutrition: payload.nutrition,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(recipe))
}
