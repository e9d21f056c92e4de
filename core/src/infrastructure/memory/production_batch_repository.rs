use crate::domain::{
    common::entities::app_errors::CoreError,
    production_batch::{
        entities::ProductionBatch,
        ports::ProductionBatchRepository,
        value_objects::CreateProductionBatchInput,
    },
};

use super::store::{InMemoryStore, Record};

impl Record for ProductionBatch {
    type Draft = CreateProductionBatchInput;

    fn id(&self) -> u64 {
        self.id
    }

    fn assemble(id: u64, draft: CreateProductionBatchInput) -> Self {
        ProductionBatch::new(id, draft)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryProductionBatchRepository {
    store: InMemoryStore<ProductionBatch>,
}

impl InMemoryProductionBatchRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductionBatchRepository for InMemoryProductionBatchRepository {
    async fn fetch_production_batches(&self) -> Result<Vec<ProductionBatch>, CoreError> {
        Ok(self.store.all().await)
    }

    async fn get_production_batch_by_id(
        &self,
        batch_id: u64,
    ) -> Result<Option<ProductionBatch>, CoreError> {
        Ok(self.store.get(batch_id).await)
    }

    async fn create_production_batch(
        &self,
        input: CreateProductionBatchInput,
    ) -> Result<ProductionBatch, CoreError> {
        Ok(self.store.insert(input).await)
    }

    async fn update_production_batch(
        &self,
        batch: ProductionBatch,
    ) -> Result<Option<ProductionBatch>, CoreError> {
        Ok(self.store.replace(batch).await)
    }

    async fn delete_production_batch(&self, batch_id: u64) -> Result<bool, CoreError> {
        Ok(self.store.remove(batch_id).await)
    }
}
