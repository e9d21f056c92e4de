use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::value_objects::CreateDietPlanInput;

fn default_portion() -> u32 {
    1
}

/// One recipe served at a meal time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Free-form label such as `BREAKFAST` or `SNACK`.
    #[serde(rename = "type")]
    pub meal_type: String,
    pub recipe_id: u64,
    #[serde(default = "default_portion")]
    pub portion: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    pub id: u64,
    pub customer_id: u64,
    /// Kept as given, never parsed.
    pub date: String,
    pub meals: Vec<Meal>,
}

impl DietPlan {
    pub fn new(id: u64, input: CreateDietPlanInput) -> Self {
        Self {
            id,
            customer_id: input.customer_id,
            date: input.date,
            meals: input.meals,
        }
    }
}
