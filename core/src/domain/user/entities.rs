use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::generate_timestamp;

use super::value_objects::CreateUserRequest;

/// Public view of an account. Credential material lives only in the
/// repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(request: CreateUserRequest) -> Self {
        Self {
            username: request.username,
            email: request.email,
            full_name: request.full_name,
            created_at: generate_timestamp(),
        }
    }
}
