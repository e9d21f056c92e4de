pub mod create_diet_plan;
pub mod delete_diet_plan;
pub mod get_diet_plan;
pub mod get_diet_plans;
pub mod update_diet_plan;
pub mod validate_diet_plan;
