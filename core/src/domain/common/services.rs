use crate::domain::{
    common::AuthConfig, crypto::ports::HasherRepository, customer::ports::CustomerRepository,
    diet_plan::ports::DietPlanRepository, jwt::ports::TokenRepository,
    production_batch::ports::ProductionBatchRepository, recipe::ports::RecipeRepository,
    user::ports::UserRepository,
};

/// Application service.
///
/// Every domain service trait is implemented on this struct, each one only
/// touching the repositories it needs.
#[derive(Clone)]
pub struct Service<C, R, D, P, U, H, T>
where
    C: CustomerRepository,
    R: RecipeRepository,
    D: DietPlanRepository,
    P: ProductionBatchRepository,
    U: UserRepository,
    H: HasherRepository,
    T: TokenRepository,
{
    pub(crate) customer_repository: C,
    pub(crate) recipe_repository: R,
    pub(crate) diet_plan_repository: D,
    pub(crate) production_batch_repository: P,
    pub(crate) user_repository: U,
    pub(crate) hasher_repository: H,
    pub(crate) token_repository: T,
    pub(crate) auth_config: AuthConfig,
}

impl<C, R, D, P, U, H, T> Service<C, R, D, P, U, H, T>
where
    C: CustomerRepository,
    R: RecipeRepository,
    D: DietPlanRepository,
    P: ProductionBatchRepository,
    U: UserRepository,
    H: HasherRepository,
    T: TokenRepository,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        customer_repository: C,
        recipe_repository: R,
        diet_plan_repository: D,
        production_batch_repository: P,
        user_repository: U,
        hasher_repository: H,
        token_repository: T,
        auth_config: AuthConfig,
    ) -> Self {
        Self {
            customer_repository,
            recipe_repository,
            diet_plan_repository,
            production_batch_repository,
            user_repository,
            hasher_repository,
            token_repository,
            auth_config,
        }
    }
}

#[cfg(test)]
pub(crate) type MockService = Service<
    crate::domain::customer::ports::MockCustomerRepository,
    crate::domain::recipe::ports::MockRecipeRepository,
    crate::domain::diet_plan::ports::MockDietPlanRepository,
    crate::domain::production_batch::ports::MockProductionBatchRepository,
    crate::domain::user::ports::MockUserRepository,
    crate::domain::crypto::ports::MockHasherRepository,
    crate::domain::jwt::ports::MockTokenRepository,
>;

#[cfg(test)]
impl MockService {
    /// Service wired with expectation-free mocks.
    pub(crate) fn mocked() -> Self {
        Service::new(
            Default::default(),
            Default::default(),
            Default::default(),
            Default::default(),
            Default::default(),
            Default::default(),
            Default::default(),
            AuthConfig::default(),
        )
    }
}
