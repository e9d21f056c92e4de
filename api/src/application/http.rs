pub mod authentication;
pub mod customer;
pub mod diet_plan;
pub mod health;
pub mod production_batch;
pub mod recipe;
pub mod server;
