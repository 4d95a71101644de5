use crate::{dto::inoutput::Ticket, repository};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    ///
    /// Loads every ticket of the user in insertion order.
    /// Returns empty Vec when user has never saved any ticket.
    ///
    /// ### Errors
    /// - [repository::Error::Serialization] when stored data is corrupted
    ///
    async fn load(&self, user_id: &str) -> Result<Vec<Ticket>, repository::Error>;

    ///
    /// Replaces all stored tickets of the user with `tickets`
    ///
    async fn save(&self, tickets: &[Ticket], user_id: &str) -> Result<(), repository::Error>;
}
