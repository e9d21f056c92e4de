pub mod authentication;
pub mod common;
pub mod crypto;
pub mod customer;
pub mod diet_plan;
pub mod jwt;
pub mod production_batch;
pub mod recipe;
pub mod user;
