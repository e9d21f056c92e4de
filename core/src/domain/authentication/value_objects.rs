use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::user::entities::User;

/// Caller resolved from a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    User(User),
}

impl Identity {
    pub fn user(&self) -> &User {
        match self {
            Identity::User(user) => user,
        }
    }

    pub fn username(&self) -> &str {
        &self.user().username
    }
}

#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoginOutput {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone)]
pub struct AuthorizeRequestInput {
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct AuthorizeRequestOutput {
    pub identity: Identity,
}
