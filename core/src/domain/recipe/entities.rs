use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::macronutrients::Macronutrients;

use super::value_objects::CreateRecipeInput;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: u64,
    pub name: String,
    pub ingredients: Vec<String>,
    /// Per single portion.
    pub nutrition: Macronutrients,
}

impl Recipe {
    pub fn new(id: u64, input: CreateRecipeInput) -> Self {
        Self {
            id,
            name: input.name,
            ingredients: input.ingredients,
            nutrition: input.nutrition,
        }
    }
}
