use tracing::{info, instrument};

use crate::domain::{
    common::{
        entities::app_errors::{CoreError, EntityKind},
        services::Service,
    },
    crypto::ports::HasherRepository,
    customer::ports::CustomerRepository,
    diet_plan::ports::DietPlanRepository,
    jwt::ports::TokenRepository,
    production_batch::{
        entities::ProductionBatch,
        helpers::aggregate_recipe_batches,
        ports::{ProductionBatchRepository, ProductionBatchService},
        value_objects::{
            CreateProductionBatchInput, PlanProductionBatchInput, UpdateProductionBatchInput,
        },
    },
    recipe::ports::RecipeRepository,
    user::ports::UserRepository,
};

impl<C, R, D, P, U, H, T> ProductionBatchService for Service<C, R, D, P, U, H, T>
where
    C: CustomerRepository,
    R: RecipeRepository,
    D: DietPlanRepository,
    P: ProductionBatchRepository,
    U: UserRepository,
    H: HasherRepository,
    T: TokenRepository,
{
    async fn get_production_batches(&self) -> Result<Vec<ProductionBatch>, CoreError> {
        self.production_batch_repository
            .fetch_production_batches()
            .await
    }

    async fn get_production_batch(&self, batch_id: u64) -> Result<ProductionBatch, CoreError> {
        self.production_batch_repository
            .get_production_batch_by_id(batch_id)
            .await?
            .ok_or(CoreError::NotFound(EntityKind::ProductionBatch))
    }

    #[instrument(skip(self, input), fields(production_date = %input.production_date))]
    async fn create_production_batch(
        &self,
        input: CreateProductionBatchInput,
    ) -> Result<ProductionBatch, CoreError> {
        let batch = self
            .production_batch_repository
            .create_production_batch(input)
            .await?;

        info!(batch_id = batch.id, "Production batch created");

        Ok(batch)
    }

    #[instrument(skip(self, input), fields(batch_id = input.batch_id))]
    async fn update_production_batch(
        &self,
        input: UpdateProductionBatchInput,
    ) -> Result<ProductionBatch, CoreError> {
        let batch = self
            .production_batch_repository
            .update_production_batch(ProductionBatch::from(input))
            .await?
            .ok_or(CoreError::NotFound(EntityKind::ProductionBatch))?;

        info!("Production batch updated");

        Ok(batch)
    }

    #[instrument(skip(self))]
    async fn delete_production_batch(&self, batch_id: u64) -> Result<(), CoreError> {
        if !self
            .production_batch_repository
            .delete_production_batch(batch_id)
            .await?
        {
            return Err(CoreError::NotFound(EntityKind::ProductionBatch));
        }

        info!("Production batch deleted");

        Ok(())
    }

    #[instrument(skip(self, input), fields(production_date = %input.production_date))]
    async fn plan_production_batch(
        &self,
        input: PlanProductionBatchInput,
    ) -> Result<ProductionBatch, CoreError> {
        let mut plans = Vec::with_capacity(input.diet_plans.len());
        for plan_id in &input.diet_plans {
            let plan = self
                .diet_plan_repository
                .get_diet_plan_by_id(*plan_id)
                .await?
                .ok_or(CoreError::NotFound(EntityKind::DietPlan))?;
            plans.push(plan);
        }

        let recipe_batches = aggregate_recipe_batches(&plans);

        let batch = self
            .production_batch_repository
            .create_production_batch(CreateProductionBatchInput {
                production_date: input.production_date,
                diet_plans: input.diet_plans,
                recipe_batches,
            })
            .await?;

        info!(
            batch_id = batch.id,
            recipes = batch.recipe_batches.len(),
            "Production batch planned from diet plans"
        );

        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::{
        common::services::MockService,
        diet_plan::entities::{DietPlan, Meal},
        production_batch::entities::RecipeBatch,
    };

    fn plan(id: u64, meals: &[(u64, u32)]) -> DietPlan {
        DietPlan {
            id,
            customer_id: 1,
            date: "2025-11-17".to_string(),
            meals: meals
                .iter()
                .map(|(recipe_id, portion)| Meal {
                    meal_type: "LUNCH".to_string(),
                    recipe_id: *recipe_id,
                    portion: *portion,
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_create_stores_unchecked_references() {
        let mut service = MockService::mocked();
        service.diet_plan_repository.expect_get_diet_plan_by_id().never();
        service
            .production_batch_repository
            .expect_create_production_batch()
            .times(1)
            .returning(|input| Box::pin(async move { Ok(ProductionBatch::new(2, input)) }));

        let batch = service
            .create_production_batch(CreateProductionBatchInput {
                production_date: "2025-12-15".to_string(),
                diet_plans: vec![999],
                recipe_batches: vec![RecipeBatch {
                    recipe_id: 999,
                    portions: 5,
                }],
            })
            .await
            .unwrap();

        assert_eq!(batch.diet_plans, vec![999]);
    }

    #[tokio::test]
    async fn test_plan_batch_sums_portions_across_plans() {
        let mut service = MockService::mocked();
        service
            .diet_plan_repository
            .expect_get_diet_plan_by_id()
            .with(eq(1))
            .returning(|id| Box::pin(async move { Ok(Some(plan(id, &[(2, 1), (1, 1)]))) }));
        service
            .diet_plan_repository
            .expect_get_diet_plan_by_id()
            .with(eq(2))
            .returning(|id| Box::pin(async move { Ok(Some(plan(id, &[(1, 3)]))) }));
        service
            .production_batch_repository
            .expect_create_production_batch()
            .returning(|input| Box::pin(async move { Ok(ProductionBatch::new(2, input)) }));

        let batch = service
            .plan_production_batch(PlanProductionBatchInput {
                production_date: "2025-12-15".to_string(),
                diet_plans: vec![1, 2],
            })
            .await
            .unwrap();

        assert_eq!(
            batch.recipe_batches,
            vec![
                RecipeBatch {
                    recipe_id: 2,
                    portions: 1
                },
                RecipeBatch {
                    recipe_id: 1,
                    portions: 4
                },
            ]
        );
        assert_eq!(batch.diet_plans, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_plan_batch_with_unknown_plan_creates_nothing() {
        let mut service = MockService::mocked();
        service
            .diet_plan_repository
            .expect_get_diet_plan_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        service
            .production_batch_repository
            .expect_create_production_batch()
            .never();

        let result = service
            .plan_production_batch(PlanProductionBatchInput {
                production_date: "2025-12-15".to_string(),
                diet_plans: vec![42],
            })
            .await;

        assert_eq!(result, Err(CoreError::NotFound(EntityKind::DietPlan)));
    }
}
