use dietplan_core::domain::common::entities::macronutrients::Macronutrients;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecipeValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub ingredients: Vec<String>,

    /// Per single portion.
    pub nutrition: Macronutrients,
}
