use crate::domain::{
    common::entities::app_errors::CoreError,
    jwt::entities::{Jwt, JwtClaim},
};

#[cfg_attr(test, mockall::automock)]
pub trait TokenRepository: Send + Sync {
    fn generate(&self, claim: &JwtClaim) -> Result<Jwt, CoreError>;

    /// Checks signature and expiry. Expired tokens give `TokenExpired`, any
    /// other failure gives `InvalidToken`.
    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError>;
}
