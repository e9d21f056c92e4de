use std::future::Future;

use crate::domain::{
    authentication::value_objects::{
        AuthorizeRequestInput, AuthorizeRequestOutput, LoginInput, LoginOutput, RegisterInput,
    },
    common::entities::app_errors::CoreError,
    user::entities::User,
};

#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    fn register(&self, input: RegisterInput)
    -> impl Future<Output = Result<User, CoreError>> + Send;

    /// Unknown usernames and wrong passwords both fail with
    /// `InvalidCredentials`.
    fn login(&self, input: LoginInput)
    -> impl Future<Output = Result<LoginOutput, CoreError>> + Send;

    fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> impl Future<Output = Result<AuthorizeRequestOutput, CoreError>> + Send;
}
