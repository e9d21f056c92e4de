use axum::extract::State;
use dietplan_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::CreateRecipeInput,
};

use crate::application::http::{
    recipe::validators::RecipeValidator,
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
    tag = "recipe",
    summary = "Create recipe",
    request_body = RecipeValidator,
    responses(
        (status = 201, body = Recipe),
        (status = 422, description = "Malformed body")
    ),
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecipeValidator>,
) -> Result<Response<Recipe>, ApiError> {
    let recipe = state
        .service
        .create_recipe(CreateRecipeInput {
            name: payload.name,
            ingredients: payload.ingredients,
            nutrition: payload.nutrition,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(recipe))
}
