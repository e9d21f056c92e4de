use tracing::{info, instrument};

use crate::domain::{
    common::{
        entities::app_errors::{CoreError, EntityKind},
        services::Service,
    },
    crypto::ports::HasherRepository,
    customer::ports::CustomerRepository,
    diet_plan::ports::DietPlanRepository,
    jwt::ports::TokenRepository,
    production_batch::ports::ProductionBatchRepository,
    recipe::{
        entities::Recipe,
        ports::{RecipeRepository, RecipeService},
        value_objects::{CreateRecipeInput, UpdateRecipeInput},
    },
    user::ports::UserRepository,
};

impl<C, R, D, P, U, H, T> RecipeService for Service<C, R, D, P, U, H, T>
where
    C: CustomerRepository,
    R: RecipeRepository,
    D: DietPlanRepository,
    P: ProductionBatchRepository,
    U: UserRepository,
    H: HasherRepository,
    T: TokenRepository,
{
    async fn get_recipes(&self) -> Result<Vec<Recipe>, CoreError> {
        self.recipe_repository.fetch_recipes().await
    }

    async fn get_recipe(&self, recipe_id: u64) -> Result<Recipe, CoreError> {
        self.recipe_repository
            .get_recipe_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound(EntityKind::Recipe))
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    async fn create_recipe(&self, input: CreateRecipeInput) -> Result<Recipe, CoreError> {
        let recipe = self.recipe_repository.create_recipe(input).await?;

        info!(recipe_id = recipe.id, "Recipe created");

        Ok(recipe)
    }

    #[instrument(skip(self, input), fields(recipe_id = input.recipe_id))]
    async fn update_recipe(&self, input: UpdateRecipeInput) -> Result<Recipe, CoreError> {
        let recipe = self
            .recipe_repository
            .update_recipe(Recipe::from(input))
            .await?
            .ok_or(CoreError::NotFound(EntityKind::Recipe))?;

        info!("Recipe updated");

        Ok(recipe)
    }

    #[instrument(skip(self))]
    async fn delete_recipe(&self, recipe_id: u64) -> Result<(), CoreError> {
        if !self.recipe_repository.delete_recipe(recipe_id).await? {
            return Err(CoreError::NotFound(EntityKind::Recipe));
        }

        info!("Recipe deleted");

        Ok(())
    }
}
