use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    production_batch::{
        entities::ProductionBatch,
        value_objects::{
            CreateProductionBatchInput, PlanProductionBatchInput, UpdateProductionBatchInput,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ProductionBatchService: Send + Sync {
    fn get_production_batches(
        &self,
    ) -> impl Future<Output = Result<Vec<ProductionBatch>, CoreError>> + Send;

    fn get_production_batch(
        &self,
        batch_id: u64,
    ) -> impl Future<Output = Result<ProductionBatch, CoreError>> + Send;

    /// Stores the batch without checking the referenced plans or recipes.
    fn create_production_batch(
        &self,
        input: CreateProductionBatchInput,
    ) -> impl Future<Output = Result<ProductionBatch, CoreError>> + Send;

    fn update_production_batch(
        &self,
        input: UpdateProductionBatchInput,
    ) -> impl Future<Output = Result<ProductionBatch, CoreError>> + Send;

    fn delete_production_batch(
        &self,
        batch_id: u64,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Builds and stores a batch whose recipe quantities come from the given
    /// diet plans. Every plan must exist.
    fn plan_production_batch(
        &self,
        input: PlanProductionBatchInput,
    ) -> impl Future<Output = Result<ProductionBatch, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProductionBatchRepository: Send + Sync {
    fn fetch_production_batches(
        &self,
    ) -> impl Future<Output = Result<Vec<ProductionBatch>, CoreError>> + Send;

    fn get_production_batch_by_id(
        &self,
        batch_id: u64,
    ) -> impl Future<Output = Result<Option<ProductionBatch>, CoreError>> + Send;

    fn create_production_batch(
        &self,
        input: CreateProductionBatchInput,
    ) -> impl Future<Output = Result<ProductionBatch, CoreError>> + Send;

    fn update_production_batch(
        &self,
        batch: ProductionBatch,
    ) -> impl Future<Output = Result<Option<ProductionBatch>, CoreError>> + Send;

    fn delete_production_batch(
        &self,
        batch_id: u64,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
