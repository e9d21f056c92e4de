use dietplan_core::domain::{
    common::entities::macronutrients::Macronutrients, customer::entities::DietaryRestriction,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Customer body for both create and full-replacement update.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CustomerValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub restrictions: Vec<DietaryRestriction>,

    pub goal: Macronutrients,
}
