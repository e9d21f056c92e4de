use std::fmt;

use thiserror::Error;

/// Kind of record a lookup failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Customer,
    Recipe,
    DietPlan,
    ProductionBatch,
    User,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityKind::Customer => "Customer",
            EntityKind::Recipe => "Recipe",
            EntityKind::DietPlan => "Diet plan",
            EntityKind::ProductionBatch => "Production batch",
            EntityKind::User => "User",
        };

        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("{0} not found")]
    NotFound(EntityKind),

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Username already registered")]
    UsernameTaken,

    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Failed to hash password")]
    HashError,

    #[error("Internal server error")]
    InternalServerError,
}
