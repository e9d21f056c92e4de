use tracing::{info, warn};

use crate::{
    domain::{
        authentication::{ports::AuthService, value_objects::RegisterInput},
        common::{
            DietPlanningConfig, entities::app_errors::CoreError, generate_random_string,
            services::Service,
        },
    },
    infrastructure::{
        crypto::Argon2HasherRepository,
        jwt::Hs256TokenRepository,
        memory::{
            InMemoryCustomerRepository, InMemoryDietPlanRepository,
            InMemoryProductionBatchRepository, InMemoryRecipeRepository, InMemoryUserRepository,
        },
        seed::seed_demo_data,
    },
};

pub type DietPlanningService = Service<
    InMemoryCustomerRepository,
    InMemoryRecipeRepository,
    InMemoryDietPlanRepository,
    InMemoryProductionBatchRepository,
    InMemoryUserRepository,
    Argon2HasherRepository,
    Hs256TokenRepository,
>;

/// Wires the in-memory repositories into a [`DietPlanningService`], then
/// applies the seed settings.
pub async fn create_service(config: DietPlanningConfig) -> Result<DietPlanningService, CoreError> {
    let secret = match &config.auth.jwt_secret {
        Some(secret) => secret.clone(),
        None => {
            warn!("No JWT secret configured, generating an ephemeral one");
            generate_random_string(64)
        }
    };

    let customer_repository = InMemoryCustomerRepository::new();
    let recipe_repository = InMemoryRecipeRepository::new();
    let diet_plan_repository = InMemoryDietPlanRepository::new();
    let production_batch_repository = InMemoryProductionBatchRepository::new();

    if config.seed.demo_data {
        seed_demo_data(
            &customer_repository,
            &recipe_repository,
            &diet_plan_repository,
            &production_batch_repository,
        )
        .await?;
    }

    let service = Service::new(
        customer_repository,
        recipe_repository,
        diet_plan_repository,
        production_batch_repository,
        InMemoryUserRepository::new(),
        Argon2HasherRepository::new(),
        Hs256TokenRepository::new(&secret),
        config.auth.clone(),
    );

    if let Some(admin) = config.seed.admin {
        service
            .register(RegisterInput {
                username: admin.username.clone(),
                password: admin.password,
                email: admin.email,
                full_name: admin.full_name,
            })
            .await?;

        info!(username = %admin.username, "Admin account registered");
    }

    Ok(service)
}
