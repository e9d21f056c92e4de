use crate::domain::{
    common::entities::app_errors::CoreError,
    diet_plan::{
        entities::DietPlan,
        ports::DietPlanRepository,
        value_objects::{CreateDietPlanInput, GetDietPlansFilter},
    },
};

use super::store::{InMemoryStore, Record};

impl Record for DietPlan {
    type Draft = CreateDietPlanInput;

    fn id(&self) -> u64 {
        self.id
    }

    fn assemble(id: u64, draft: CreateDietPlanInput) -> Self {
        DietPlan::new(id, draft)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryDietPlanRepository {
    store: InMemoryStore<DietPlan>,
}

impl InMemoryDietPlanRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DietPlanRepository for InMemoryDietPlanRepository {
    async fn fetch_diet_plans(
        &self,
        filter: GetDietPlansFilter,
    ) -> Result<Vec<DietPlan>, CoreError> {
        let plans = match filter.customer_id {
            Some(customer_id) => {
                self.store
                    .filter(|plan| plan.customer_id == customer_id)
                    .await
            }
            None => self.store.all().await,
        };

        Ok(plans)
    }

    async fn get_diet_plan_by_id(&self, plan_id: u64) -> Result<Option<DietPlan>, CoreError> {
        Ok(self.store.get(plan_id).await)
    }

    async fn create_diet_plan(&self, input: CreateDietPlanInput) -> Result<DietPlan, CoreError> {
        Ok(self.store.insert(input).await)
    }

    async fn update_diet_plan(&self, plan: DietPlan) -> Result<Option<DietPlan>, CoreError> {
        Ok(self.store.replace(plan).await)
    }

    async fn delete_diet_plan(&self, plan_id: u64) -> Result<bool, CoreError> {
        Ok(self.store.remove(plan_id).await)
    }
}
