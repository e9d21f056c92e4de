use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diet_plan::{
        entities::DietPlan,
        value_objects::{
            CreateDietPlanInput, GetDietPlansFilter, PlanValidation, UpdateDietPlanInput,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait DietPlanService: Send + Sync {
    fn get_diet_plans(
        &self,
        filter: GetDietPlansFilter,
    ) -> impl Future<Output = Result<Vec<DietPlan>, CoreError>> + Send;

    fn get_diet_plan(&self, plan_id: u64)
    -> impl Future<Output = Result<DietPlan, CoreError>> + Send;

    /// Fails with `NotFound(Customer)` when the customer does not exist.
    fn create_diet_plan(
        &self,
        input: CreateDietPlanInput,
    ) -> impl Future<Output = Result<DietPlan, CoreError>> + Send;

    fn update_diet_plan(
        &self,
        input: UpdateDietPlanInput,
    ) -> impl Future<Output = Result<DietPlan, CoreError>> + Send;

    fn delete_diet_plan(&self, plan_id: u64) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn validate_diet_plan(
        &self,
        plan_id: u64,
    ) -> impl Future<Output = Result<PlanValidation, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait DietPlanRepository: Send + Sync {
    fn fetch_diet_plans(
        &self,
        filter: GetDietPlansFilter,
    ) -> impl Future<Output = Result<Vec<DietPlan>, CoreError>> + Send;

    fn get_diet_plan_by_id(
        &self,
        plan_id: u64,
    ) -> impl Future<Output = Result<Option<DietPlan>, CoreError>> + Send;

    fn create_diet_plan(
        &self,
        input: CreateDietPlanInput,
    ) -> impl Future<Output = Result<DietPlan, CoreError>> + Send;

    fn update_diet_plan(
        &self,
        plan: DietPlan,
    ) -> impl Future<Output = Result<Option<DietPlan>, CoreError>> + Send;

    fn delete_diet_plan(&self, plan_id: u64)
    -> impl Future<Output = Result<bool, CoreError>> + Send;
}
