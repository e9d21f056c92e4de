use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::Recipe, ports::RecipeRepository, value_objects::CreateRecipeInput},
};

use super::store::{InMemoryStore, Record};

impl Record for Recipe {
    type Draft = CreateRecipeInput;

    fn id(&self) -> u64 {
        self.id
    }

    fn assemble(id: u64, draft: CreateRecipeInput) -> Self {
        Recipe::new(id, draft)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryRecipeRepository {
    store: InMemoryStore<Recipe>,
}

impl InMemoryRecipeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecipeRepository for InMemoryRecipeRepository {
    async fn fetch_recipes(&self) -> Result<Vec<Recipe>, CoreError> {
        Ok(self.store.all().await)
    }

    async fn get_recipe_by_id(&self, recipe_id: u64) -> Result<Option<Recipe>, CoreError> {
        Ok(self.store.get(recipe_id).await)
    }

    async fn create_recipe(&self, input: CreateRecipeInput) -> Result<Recipe, CoreError> {
        Ok(self.store.insert(input).await)
    }

    async fn update_recipe(&self, recipe: Recipe) -> Result<Option<Recipe>, CoreError> {
        Ok(self.store.replace(recipe).await)
    }

    async fn delete_recipe(&self, recipe_id: u64) -> Result<bool, CoreError> {
        Ok(self.store.remove(recipe_id).await)
    }
}
