use dietplan_core::domain::production_batch::entities::RecipeBatch;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Production batch body for both create and full-replacement update.
/// Referenced ids are stored as given.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductionBatchValidator {
    pub production_date: String,

    #[serde(default)]
    pub diet_plans: Vec<u64>,

    #[serde(default)]
    pub recipe_batches: Vec<RecipeBatch>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanProductionBatchValidator {
    pub production_date: String,

    #[validate(length(min = 1, message = "at least one diet plan is required"))]
    pub diet_plans: Vec<u64>,
}
