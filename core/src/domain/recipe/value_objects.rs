use crate::domain::common::entities::macronutrients::Macronutrients;

use super::entities::Recipe;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRecipeInput {
    pub name: String,
    pub ingredients: Vec<String>,
    pub nutrition: Macronutrients,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRecipeInput {
    pub recipe_id: u64,
    pub name: String,
    pub ingredients: Vec<String>,
    pub nutrition: Macronutrients,
}

impl From<UpdateRecipeInput> for Recipe {
    fn from(input: UpdateRecipeInput) -> Self {
        Recipe {
            id: input.recipe_id,
            name: input.name,
            ingredients: input.ingredients,
            nutrition: input.nutrition,
        }
    }
}
