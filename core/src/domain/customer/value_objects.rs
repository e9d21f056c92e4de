use crate::domain::common::entities::macronutrients::Macronutrients;

use super::entities::{Customer, DietaryRestriction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCustomerInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub restrictions: Vec<DietaryRestriction>,
    pub goal: Macronutrients,
}

/// Full replacement of every mutable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCustomerInput {
    pub customer_id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub restrictions: Vec<DietaryRestriction>,
    pub goal: Macronutrients,
}

impl From<UpdateCustomerInput> for Customer {
    fn from(input: UpdateCustomerInput) -> Self {
        Customer {
            id: input.customer_id,
            name: input.name,
            email: input.email,
            phone: input.phone,
            restrictions: input.restrictions,
            goal: input.goal,
        }
    }
}
