use super::entities::{ProductionBatch, RecipeBatch};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProductionBatchInput {
    pub production_date: String,
    pub diet_plans: Vec<u64>,
    pub recipe_batches: Vec<RecipeBatch>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProductionBatchInput {
    pub batch_id: u64,
    pub production_date: String,
    pub diet_plans: Vec<u64>,
    pub recipe_batches: Vec<RecipeBatch>,
}

impl From<UpdateProductionBatchInput> for ProductionBatch {
    fn from(input: UpdateProductionBatchInput) -> Self {
        ProductionBatch {
            id: input.batch_id,
            production_date: input.production_date,
            diet_plans: input.diet_plans,
            recipe_batches: input.recipe_batches,
        }
    }
}

/// Derive recipe quantities from existing diet plans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanProductionBatchInput {
    pub production_date: String,
    pub diet_plans: Vec<u64>,
}
