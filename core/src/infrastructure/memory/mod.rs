pub mod customer_repository;
pub mod diet_plan_repository;
pub mod production_batch_repository;
pub mod recipe_repository;
pub mod store;
pub mod user_repository;

pub use customer_repository::InMemoryCustomerRepository;
pub use diet_plan_repository::InMemoryDietPlanRepository;
pub use production_batch_repository::InMemoryProductionBatchRepository;
pub use recipe_repository::InMemoryRecipeRepository;
pub use user_repository::InMemoryUserRepository;
