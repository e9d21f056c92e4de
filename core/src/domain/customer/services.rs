use tracing::{info, instrument};

use crate::domain::{
    common::{
        entities::app_errors::{CoreError, EntityKind},
        services::Service,
    },
    crypto::ports::HasherRepository,
    customer::{
        entities::Customer,
        ports::{CustomerRepository, CustomerService},
        value_objects::{CreateCustomerInput, UpdateCustomerInput},
    },
    diet_plan::ports::DietPlanRepository,
    jwt::ports::TokenRepository,
    production_batch::ports::ProductionBatchRepository,
    recipe::ports::RecipeRepository,
    user::ports::UserRepository,
};

impl<C, R, D, P, U, H, T> CustomerService for Service<C, R, D, P, U, H, T>
where
    C: CustomerRepository,
    R: RecipeRepository,
    D: DietPlanRepository,
    P: ProductionBatchRepository,
    U: UserRepository,
    H: HasherRepository,
    T: TokenRepository,
{
    async fn get_customers(&self) -> Result<Vec<Customer>, CoreError> {
        self.customer_repository.fetch_customers().await
    }

    async fn get_customer(&self, customer_id: u64) -> Result<Customer, CoreError> {
        self.customer_repository
            .get_customer_by_id(customer_id)
            .await?
            .ok_or(CoreError::NotFound(EntityKind::Customer))
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    async fn create_customer(&self, input: CreateCustomerInput) -> Result<Customer, CoreError> {
        let customer = self.customer_repository.create_customer(input).await?;

        info!(customer_id = customer.id, "Customer created");

        Ok(customer)
    }

    #[instrument(skip(self, input), fields(customer_id = input.customer_id))]
    async fn update_customer(&self, input: UpdateCustomerInput) -> Result<Customer, CoreError> {
        let customer = self
            .customer_repository
            .update_customer(Customer::from(input))
            .await?
            .ok_or(CoreError::NotFound(EntityKind::Customer))?;

        info!("Customer updated");

        Ok(customer)
    }

    /// Diet plans pointing at the customer are left in place.
    #[instrument(skip(self))]
    async fn delete_customer(&self, customer_id: u64) -> Result<(), CoreError> {
        if !self.customer_repository.delete_customer(customer_id).await? {
            return Err(CoreError::NotFound(EntityKind::Customer));
        }

        info!("Customer deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::common::{entities::macronutrients::Macronutrients, services::MockService};

    fn update_input(customer_id: u64) -> UpdateCustomerInput {
        UpdateCustomerInput {
            customer_id,
            name: "Felicia".to_string(),
            email: "felicia@example.com".to_string(),
            phone: String::new(),
            restrictions: vec![],
            goal: Macronutrients::new(2000, 120, 250, 65),
        }
    }

    #[tokio::test]
    async fn test_get_missing_customer_is_not_found() {
        let mut service = MockService::mocked();
        service
            .customer_repository
            .expect_get_customer_by_id()
            .with(eq(999))
            .returning(|_| Box::pin(async { Ok(None) }));

        let result = service.get_customer(999).await;

        assert_eq!(result, Err(CoreError::NotFound(EntityKind::Customer)));
    }

    #[tokio::test]
    async fn test_update_preserves_path_id() {
        let mut service = MockService::mocked();
        service
            .customer_repository
            .expect_update_customer()
            .withf(|customer| customer.id == 2 && customer.name == "Felicia")
            .times(1)
            .returning(|customer| Box::pin(async move { Ok(Some(customer)) }));

        let customer = service.update_customer(update_input(2)).await.unwrap();

        assert_eq!(customer.id, 2);
    }

    #[tokio::test]
    async fn test_update_missing_customer_is_not_found() {
        let mut service = MockService::mocked();
        service
            .customer_repository
            .expect_update_customer()
            .returning(|_| Box::pin(async { Ok(None) }));

        let result = service.update_customer(update_input(999)).await;

        assert_eq!(result, Err(CoreError::NotFound(EntityKind::Customer)));
    }

    #[tokio::test]
    async fn test_delete_missing_customer_is_not_found() {
        let mut service = MockService::mocked();
        service
            .customer_repository
            .expect_delete_customer()
            .with(eq(3))
            .returning(|_| Box::pin(async { Ok(false) }));

        let result = service.delete_customer(3).await;

        assert_eq!(result, Err(CoreError::NotFound(EntityKind::Customer)));
    }
}
