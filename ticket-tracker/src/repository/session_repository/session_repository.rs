use crate::{dto::inoutput::User, repository};
use axum::async_trait;

///
/// Slot that remembers the logged in user between application restarts
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    ///
    /// Finds stored session user.
    /// Unparsable session data is removed and reported as no session.
    ///
    async fn load(&self) -> Result<Option<User>, repository::Error>;

    async fn save(&self, user: &User) -> Result<(), repository::Error>;

    async fn clear(&self) -> Result<(), repository::Error>;
}
