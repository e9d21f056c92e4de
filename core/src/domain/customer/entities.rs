use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::macronutrients::Macronutrients;

use super::value_objects::CreateCustomerInput;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DietaryRestriction {
    #[serde(rename = "type")]
    pub restriction_type: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub restrictions: Vec<DietaryRestriction>,
    pub goal: Macronutrients,
}

impl Customer {
    pub fn new(id: u64, input: CreateCustomerInput) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            phone: input.phone,
            restrictions: input.restrictions,
            goal: input.goal,
        }
    }
}
