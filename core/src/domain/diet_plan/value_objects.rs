use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::macronutrients::Macronutrients;

use super::entities::{DietPlan, Meal};

#[derive(Debug, Clone, Default)]
pub struct GetDietPlansFilter {
    pub customer_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDietPlanInput {
    pub customer_id: u64,
    pub date: String,
    pub meals: Vec<Meal>,
}

/// Replaces every field. The customer reference is not re-checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDietPlanInput {
    pub plan_id: u64,
    pub customer_id: u64,
    pub date: String,
    pub meals: Vec<Meal>,
}

impl From<UpdateDietPlanInput> for DietPlan {
    fn from(input: UpdateDietPlanInput) -> Self {
        DietPlan {
            id: input.plan_id,
            customer_id: input.customer_id,
            date: input.date,
            meals: input.meals,
        }
    }
}

/// Outcome of checking a plan against its customer's goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlanValidation {
    pub valid: bool,
    pub total_nutrition: Macronutrients,
    pub goal: Macronutrients,
    pub differences: Macronutrients,
    /// Always `true`: restrictions are not cross-checked against recipes yet.
    pub restrictions_met: bool,
}
