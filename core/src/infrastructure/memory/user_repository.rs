use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{entities::User, ports::UserRepository, value_objects::CreateUserRequest},
};

#[derive(Debug, Clone)]
struct Account {
    user: User,
    hashed_password: String,
}

/// Accounts keyed by username.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create_user(
        &self,
        request: CreateUserRequest,
        hashed_password: String,
    ) -> Result<User, CoreError> {
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(&request.username) {
            debug!(username = %request.username, "Username already stored");
            return Err(CoreError::UsernameTaken);
        }

        let user = User::new(request);
        accounts.insert(
            user.username.clone(),
            Account {
                user: user.clone(),
                hashed_password,
            },
        );

        Ok(user)
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, CoreError> {
        Ok(self
            .accounts
            .read()
            .await
            .get(username)
            .map(|account| account.user.clone()))
    }

    async fn get_password_hash(&self, username: &str) -> Result<Option<String>, CoreError> {
        Ok(self
            .accounts
            .read()
            .await
            .get(username)
            .map(|account| account.hashed_password.clone()))
    }
}
