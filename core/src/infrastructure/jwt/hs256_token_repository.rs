use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};
use tracing::{debug, error};

use crate::domain::{
    common::entities::app_errors::CoreError,
    jwt::{
        entities::{Jwt, JwtClaim},
        ports::TokenRepository,
    },
};

/// Symmetric HS256 signer and verifier.
#[derive(Clone)]
pub struct Hs256TokenRepository {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl Hs256TokenRepository {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }
}

impl TokenRepository for Hs256TokenRepository {
    fn generate(&self, claim: &JwtClaim) -> Result<Jwt, CoreError> {
        let token = encode(&Header::new(Algorithm::HS256), claim, &self.encoding_key).map_err(
            |e| {
                error!("Failed to sign token: {}", e);
                CoreError::InternalServerError
            },
        )?;

        Ok(Jwt {
            token,
            expires_at: claim.exp,
        })
    }

    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError> {
        decode::<JwtClaim>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!("Rejected token: {}", e);
                match e.kind() {
                    ErrorKind::ExpiredSignature => CoreError::TokenExpired,
                    _ => CoreError::InvalidToken,
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_generate_then_verify() {
        let repository = Hs256TokenRepository::new("secret");
        let claim = JwtClaim::new("admin".to_string(), Duration::minutes(30));

        let jwt = repository.generate(&claim).unwrap();
        let verified = repository.verify(&jwt.token).unwrap();

        assert_eq!(verified, claim);
        assert_eq!(jwt.expires_at, claim.exp);
    }

    #[test]
    fn test_expired_token() {
        let repository = Hs256TokenRepository::new("secret");
        let claim = JwtClaim::new("admin".to_string(), Duration::minutes(-1));

        let jwt = repository.generate(&claim).unwrap();

        assert_eq!(repository.verify(&jwt.token), Err(CoreError::TokenExpired));
    }

    #[test]
    fn test_foreign_signature_is_rejected() {
        let issuer = Hs256TokenRepository::new("one-secret");
        let verifier = Hs256TokenRepository::new("another-secret");
        let claim = JwtClaim::new("admin".to_string(), Duration::minutes(30));

        let jwt = issuer.generate(&claim).unwrap();

        assert_eq!(verifier.verify(&jwt.token), Err(CoreError::InvalidToken));
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        let repository = Hs256TokenRepository::new("secret");

        assert_eq!(
            repository.verify("invalidtoken123"),
            Err(CoreError::InvalidToken)
        );
    }
}
