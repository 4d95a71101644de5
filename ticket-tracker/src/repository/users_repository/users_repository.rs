use crate::{dto::inoutput::User, repository};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    ///
    /// Finds user whose email and password both match exactly
    ///
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, repository::Error>;

    ///
    /// Inserts new user. Id is the number of users after insertion.
    ///
    /// ### Errors
    /// - [repository::Error::InsertUniqueViolation] when email is already taken
    ///
    async fn insert(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, repository::Error>;
}
