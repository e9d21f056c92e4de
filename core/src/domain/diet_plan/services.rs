use tracing::{info, instrument};

use crate::domain::{
    common::{
        entities::app_errors::{CoreError, EntityKind},
        services::Service,
    },
    crypto::ports::HasherRepository,
    customer::ports::CustomerRepository,
    diet_plan::{
        entities::DietPlan,
        nutrition::{aggregate_nutrition, evaluate_plan},
        ports::{DietPlanRepository, DietPlanService},
        value_objects::{
            CreateDietPlanInput, GetDietPlansFilter, PlanValidation, UpdateDietPlanInput,
        },
    },
    jwt::ports::TokenRepository,
    production_batch::ports::ProductionBatchRepository,
    recipe::ports::RecipeRepository,
    user::ports::UserRepository,
};

impl<C, R, D, P, U, H, T> DietPlanService for Service<C, R, D, P, U, H, T>
where
    C: CustomerRepository,
    R: RecipeRepository,
    D: DietPlanRepository,
    P: ProductionBatchRepository,
    U: UserRepository,
    H: HasherRepository,
    T: TokenRepository,
{
    async fn get_diet_plans(&self, filter: GetDietPlansFilter) -> Result<Vec<DietPlan>, CoreError> {
        self.diet_plan_repository.fetch_diet_plans(filter).await
    }

    async fn get_diet_plan(&self, plan_id: u64) -> Result<DietPlan, CoreError> {
        self.diet_plan_repository
            .get_diet_plan_by_id(plan_id)
            .await?
            .ok_or(CoreError::NotFound(EntityKind::DietPlan))
    }

    #[instrument(skip(self, input), fields(customer_id = input.customer_id))]
    async fn create_diet_plan(&self, input: CreateDietPlanInput) -> Result<DietPlan, CoreError> {
        self.customer_repository
            .get_customer_by_id(input.customer_id)
            .await?
            .ok_or(CoreError::NotFound(EntityKind::Customer))?;

        let plan = self.diet_plan_repository.create_diet_plan(input).await?;

        info!(plan_id = plan.id, meals = plan.meals.len(), "Diet plan created");

        Ok(plan)
    }

    #[instrument(skip(self, input), fields(plan_id = input.plan_id))]
    async fn update_diet_plan(&self, input: UpdateDietPlanInput) -> Result<DietPlan, CoreError> {
        let plan = self
            .diet_plan_repository
            .update_diet_plan(DietPlan::from(input))
            .await?
            .ok_or(CoreError::NotFound(EntityKind::DietPlan))?;

        info!("Diet plan updated");

        Ok(plan)
    }

    #[instrument(skip(self))]
    async fn delete_diet_plan(&self, plan_id: u64) -> Result<(), CoreError> {
        if !self.diet_plan_repository.delete_diet_plan(plan_id).await? {
            return Err(CoreError::NotFound(EntityKind::DietPlan));
        }

        info!("Diet plan deleted");

        Ok(())
    }

    #[instrument(skip(self))]
    async fn validate_diet_plan(&self, plan_id: u64) -> Result<PlanValidation, CoreError> {
        let plan = self
            .diet_plan_repository
            .get_diet_plan_by_id(plan_id)
            .await?
            .ok_or(CoreError::NotFound(EntityKind::DietPlan))?;

        let customer = self
            .customer_repository
            .get_customer_by_id(plan.customer_id)
            .await?
            .ok_or(CoreError::NotFound(EntityKind::Customer))?;

        let recipes = self.recipe_repository.fetch_recipes().await?;

        let total = aggregate_nutrition(&plan.meals, &recipes);
        let validation = evaluate_plan(total, customer.goal);

        info!(
            customer_id = customer.id,
            valid = validation.valid,
            "Diet plan validated"
        );

        Ok(validation)
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::{
        common::{entities::macronutrients::Macronutrients, services::MockService},
        customer::entities::Customer,
        diet_plan::entities::Meal,
        recipe::entities::Recipe,
    };

    fn customer(id: u64) -> Customer {
        Customer {
            id,
            name: "Alma".to_string(),
            email: "alma@example.com".to_string(),
            phone: String::new(),
            restrictions: vec![],
            goal: Macronutrients::new(1900, 100, 230, 60),
        }
    }

    fn plan(id: u64, customer_id: u64) -> DietPlan {
        DietPlan {
            id,
            customer_id,
            date: "2025-11-17".to_string(),
            meals: vec![
                Meal {
                    meal_type: "BREAKFAST".to_string(),
                    recipe_id: 2,
                    portion: 1,
                },
                Meal {
                    meal_type: "LUNCH".to_string(),
                    recipe_id: 1,
                    portion: 1,
                },
                Meal {
                    meal_type: "DINNER".to_string(),
                    recipe_id: 3,
                    portion: 1,
                },
            ],
        }
    }

    fn recipes() -> Vec<Recipe> {
        [
            (1, Macronutrients::new(350, 40, 15, 18)),
            (2, Macronutrients::new(420, 18, 65, 12)),
            (3, Macronutrients::new(450, 38, 20, 25)),
        ]
        .into_iter()
        .map(|(id, nutrition)| Recipe {
            id,
            name: format!("recipe-{id}"),
            ingredients: vec![],
            nutrition,
        })
        .collect()
    }

    #[tokio::test]
    async fn test_create_diet_plan_requires_existing_customer() {
        let mut service = MockService::mocked();
        service
            .customer_repository
            .expect_get_customer_by_id()
            .with(eq(42))
            .times(1)
            .returning(|_| Box::pin(async { Ok(None) }));
        service.diet_plan_repository.expect_create_diet_plan().never();

        let result = service
            .create_diet_plan(CreateDietPlanInput {
                customer_id: 42,
                date: "2025-12-15".to_string(),
                meals: vec![],
            })
            .await;

        assert_eq!(result, Err(CoreError::NotFound(EntityKind::Customer)));
    }

    #[tokio::test]
    async fn test_validate_diet_plan_reports_totals_and_differences() {
        let mut service = MockService::mocked();
        service
            .diet_plan_repository
            .expect_get_diet_plan_by_id()
            .with(eq(1))
            .returning(|id| Box::pin(async move { Ok(Some(plan(id, 1))) }));
        service
            .customer_repository
            .expect_get_customer_by_id()
            .with(eq(1))
            .returning(|id| Box::pin(async move { Ok(Some(customer(id))) }));
        service
            .recipe_repository
            .expect_fetch_recipes()
            .returning(|| Box::pin(async { Ok(recipes()) }));

        let validation = service.validate_diet_plan(1).await.unwrap();

        assert!(!validation.valid);
        assert!(validation.restrictions_met);
        assert_eq!(
            validation.total_nutrition,
            Macronutrients::new(1220, 96, 100, 55)
        );
        assert_eq!(validation.differences.calories, 680);
    }

    #[tokio::test]
    async fn test_validate_diet_plan_fails_when_customer_is_gone() {
        let mut service = MockService::mocked();
        service
            .diet_plan_repository
            .expect_get_diet_plan_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(plan(id, 9))) }));
        service
            .customer_repository
            .expect_get_customer_by_id()
            .with(eq(9))
            .returning(|_| Box::pin(async { Ok(None) }));
        service.recipe_repository.expect_fetch_recipes().never();

        let result = service.validate_diet_plan(1).await;

        assert_eq!(result, Err(CoreError::NotFound(EntityKind::Customer)));
    }

    #[tokio::test]
    async fn test_validate_unknown_plan_is_not_found() {
        let mut service = MockService::mocked();
        service
            .diet_plan_repository
            .expect_get_diet_plan_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let result = service.validate_diet_plan(404).await;

        assert_eq!(result, Err(CoreError::NotFound(EntityKind::DietPlan)));
    }
}
