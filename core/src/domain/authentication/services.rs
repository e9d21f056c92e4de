use chrono::Duration;
use tracing::{info, instrument, warn};

use crate::domain::{
    authentication::{
        ports::AuthService,
        value_objects::{
            AuthorizeRequestInput, AuthorizeRequestOutput, Identity, LoginInput, LoginOutput,
            RegisterInput,
        },
    },
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    customer::ports::CustomerRepository,
    diet_plan::ports::DietPlanRepository,
    jwt::{entities::JwtClaim, ports::TokenRepository},
    production_batch::ports::ProductionBatchRepository,
    recipe::ports::RecipeRepository,
    user::{entities::User, ports::UserRepository, value_objects::CreateUserRequest},
};

impl<C, R, D, P, U, H, T> AuthService for Service<C, R, D, P, U, H, T>
where
    C: CustomerRepository,
    R: RecipeRepository,
    D: DietPlanRepository,
    P: ProductionBatchRepository,
    U: UserRepository,
    H: HasherRepository,
    T: TokenRepository,
{
    #[instrument(skip(self, input), fields(username = %input.username))]
    async fn register(&self, input: RegisterInput) -> Result<User, CoreError> {
        if self
            .user_repository
            .get_by_username(&input.username)
            .await?
            .is_some()
        {
            return Err(CoreError::UsernameTaken);
        }

        let hashed_password = self.hasher_repository.hash_password(&input.password).await?;

        let user = self
            .user_repository
            .create_user(
                CreateUserRequest {
                    username: input.username,
                    email: input.email,
                    full_name: input.full_name,
                },
                hashed_password,
            )
            .await?;

        info!("User registered");

        Ok(user)
    }

    #[instrument(skip(self, input), fields(username = %input.username))]
    async fn login(&self, input: LoginInput) -> Result<LoginOutput, CoreError> {
        let Some(hash) = self
            .user_repository
            .get_password_hash(&input.username)
            .await?
        else {
            warn!("Login attempt for unknown user");
            return Err(CoreError::InvalidCredentials);
        };

        if !self
            .hasher_repository
            .verify_password(&input.password, &hash)
            .await?
        {
            warn!("Login attempt with wrong password");
            return Err(CoreError::InvalidCredentials);
        }

        let claim = JwtClaim::new(
            input.username,
            Duration::minutes(self.auth_config.token_ttl_minutes),
        );
        let jwt = self.token_repository.generate(&claim)?;

        info!(expires_at = jwt.expires_at, "Access token issued");

        Ok(LoginOutput {
            access_token: jwt.token,
            token_type: "bearer".to_string(),
        })
    }

    async fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> Result<AuthorizeRequestOutput, CoreError> {
        let claim = self.token_repository.verify(&input.token)?;

        let user = self
            .user_repository
            .get_by_username(&claim.sub)
            .await?
            .ok_or(CoreError::InvalidToken)?;

        Ok(AuthorizeRequestOutput {
            identity: Identity::User(user),
        })
    }
}
