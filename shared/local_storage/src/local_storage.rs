use crate::Error;
use async_trait::async_trait;

///
/// Durable string slots addressed by key.
///
/// Every write replaces the whole value of a single slot,
/// so callers observe either the old or the new value.
///
#[async_trait]
pub trait LocalStorage: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>, Error>;

    async fn set_item(&self, key: &str, value: String) -> Result<(), Error>;

    ///
    /// Removing key that does not exist is not an error
    ///
    async fn remove_item(&self, key: &str) -> Result<(), Error>;
}
