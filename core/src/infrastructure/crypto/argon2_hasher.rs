use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{Error as PasswordHashError, SaltString},
};
use rand::rngs::OsRng;
use tracing::error;

use crate::domain::{common::entities::app_errors::CoreError, crypto::ports::HasherRepository};

/// Argon2id with the crate's default cost parameters. Hashing runs on the
/// blocking pool.
#[derive(Debug, Clone, Default)]
pub struct Argon2HasherRepository;

impl Argon2HasherRepository {
    pub fn new() -> Self {
        Self
    }
}

impl HasherRepository for Argon2HasherRepository {
    async fn hash_password(&self, password: &str) -> Result<String, CoreError> {
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);

            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| {
                    error!("Failed to hash password: {}", e);
                    CoreError::HashError
                })
        })
        .await
        .map_err(|e| {
            error!("Hashing task failed: {}", e);
            CoreError::InternalServerError
        })?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, CoreError> {
        let password = password.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&hash).map_err(|e| {
                error!("Stored password hash is unreadable: {}", e);
                CoreError::HashError
            })?;

            match Argon2::default().verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(e) => {
                    error!("Failed to verify password: {}", e);
                    Err(CoreError::HashError)
                }
            }
        })
        .await
        .map_err(|e| {
            error!("Verification task failed: {}", e);
            CoreError::InternalServerError
        })?
    }
}
