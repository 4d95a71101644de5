use crate::{
    dto::{inoutput::User, input},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    ///
    /// ### Returns
    /// User whose email and password match `credentials`
    ///
    /// ### Errors
    /// - [Error::InvalidCredentials] when no user matches
    ///
    async fn login(&self, credentials: input::Credentials) -> Result<User, Error>;

    ///
    /// Registers new user
    ///
    /// ### Errors
    /// - [Error::EmailExists] when email is already taken
    ///
    async fn signup(&self, signup: input::Signup) -> Result<User, Error>;
}
