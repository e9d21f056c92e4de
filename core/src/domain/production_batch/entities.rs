use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::value_objects::CreateProductionBatchInput;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeBatch {
    pub recipe_id: u64,
    pub portions: u32,
}

/// Planned production run for one day.
///
/// `diet_plans` and the recipe ids in `recipe_batches` are stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductionBatch {
    pub id: u64,
    pub production_date: String,
    pub diet_plans: Vec<u64>,
    pub recipe_batches: Vec<RecipeBatch>,
}

impl ProductionBatch {
    pub fn new(id: u64, input: CreateProductionBatchInput) -> Self {
        Self {
            id,
            production_date: input.production_date,
            diet_plans: input.diet_plans,
            recipe_batches: input.recipe_batches,
        }
    }
}
