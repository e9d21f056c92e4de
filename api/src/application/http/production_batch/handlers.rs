pub mod create_production_batch;
pub mod delete_production_batch;
pub mod get_production_batch;
pub mod get_production_batches;
pub mod plan_production_batch;
pub mod update_production_batch;
