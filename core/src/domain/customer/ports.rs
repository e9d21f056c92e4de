use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    customer::{
        entities::Customer,
        value_objects::{CreateCustomerInput, UpdateCustomerInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait CustomerService: Send + Sync {
    fn get_customers(&self) -> impl Future<Output = Result<Vec<Customer>, CoreError>> + Send;

    fn get_customer(
        &self,
        customer_id: u64,
    ) -> impl Future<Output = Result<Customer, CoreError>> + Send;

    fn create_customer(
        &self,
        input: CreateCustomerInput,
    ) -> impl Future<Output = Result<Customer, CoreError>> + Send;

    fn update_customer(
        &self,
        input: UpdateCustomerInput,
    ) -> impl Future<Output = Result<Customer, CoreError>> + Send;

    fn delete_customer(&self, customer_id: u64)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait CustomerRepository: Send + Sync {
    fn fetch_customers(&self) -> impl Future<Output = Result<Vec<Customer>, CoreError>> + Send;

    fn get_customer_by_id(
        &self,
        customer_id: u64,
    ) -> impl Future<Output = Result<Option<Customer>, CoreError>> + Send;

    /// Allocates the next identifier and stores the record.
    fn create_customer(
        &self,
        input: CreateCustomerInput,
    ) -> impl Future<Output = Result<Customer, CoreError>> + Send;

    /// Returns `None` when no customer carries `customer.id`.
    fn update_customer(
        &self,
        customer: Customer,
    ) -> impl Future<Output = Result<Option<Customer>, CoreError>> + Send;

    /// Returns `false` when nothing was removed.
    fn delete_customer(
        &self,
        customer_id: u64,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
