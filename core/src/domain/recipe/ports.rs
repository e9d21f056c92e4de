use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::Recipe,
        value_objects::{CreateRecipeInput, UpdateRecipeInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn get_recipes(&self) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn get_recipe(&self, recipe_id: u64)
    -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn create_recipe(
        &self,
        input: CreateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn update_recipe(
        &self,
        input: UpdateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn delete_recipe(&self, recipe_id: u64) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn fetch_recipes(&self) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn get_recipe_by_id(
        &self,
        recipe_id: u64,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    fn create_recipe(
        &self,
        input: CreateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn update_recipe(
        &self,
        recipe: Recipe,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    fn delete_recipe(&self, recipe_id: u64)
    -> impl Future<Output = Result<bool, CoreError>> + Send;
}
