use crate::domain::{
    common::entities::app_errors::CoreError,
    customer::{
        entities::Customer,
        ports::CustomerRepository,
        value_objects::CreateCustomerInput,
    },
};

use super::store::{InMemoryStore, Record};

impl Record for Customer {
    type Draft = CreateCustomerInput;

    fn id(&self) -> u64 {
        self.id
    }

    fn assemble(id: u64, draft: CreateCustomerInput) -> Self {
        Customer::new(id, draft)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryCustomerRepository {
    store: InMemoryStore<Customer>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CustomerRepository for InMemoryCustomerRepository {
    async fn fetch_customers(&self) -> Result<Vec<Customer>, CoreError> {
        Ok(self.store.all().await)
    }

    async fn get_customer_by_id(&self, customer_id: u64) -> Result<Option<Customer>, CoreError> {
        Ok(self.store.get(customer_id).await)
    }

    async fn create_customer(&self, input: CreateCustomerInput) -> Result<Customer, CoreError> {
        Ok(self.store.insert(input).await)
    }

    async fn update_customer(&self, customer: Customer) -> Result<Option<Customer>, CoreError> {
        Ok(self.store.replace(customer).await)
    }

    async fn delete_customer(&self, customer_id: u64) -> Result<bool, CoreError> {
        Ok(self.store.remove(customer_id).await)
    }
}
