use dietplan_core::domain::diet_plan::entities::Meal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Diet plan body for both create and full-replacement update.
///
/// `date` is stored verbatim. A negative `portion` fails deserialization.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DietPlanValidator {
    pub customer_id: u64,

    pub date: String,

    #[serde(default)]
    pub meals: Vec<Meal>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct GetDietPlansQuery {
    /// Only plans belonging to this customer.
    pub customer_id: Option<u64>,
}
