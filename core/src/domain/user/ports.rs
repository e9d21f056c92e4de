use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{entities::User, value_objects::CreateUserRequest},
};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    /// Fails with `UsernameTaken` when the username is already stored.
    fn create_user(
        &self,
        request: CreateUserRequest,
        hashed_password: String,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_password_hash(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;
}
