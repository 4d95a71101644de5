use crate::{
    dto::{inoutput::Ticket, input, output},
    error::Error,
    session::SessionContext,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    ///
    /// Makes the user current and loads the user's tickets into memory
    /// unless they are already there.
    ///
    /// ### Returns
    /// [SessionContext] that must be passed to other operations
    ///
    /// ### Errors
    /// - [Error::Unauthenticated] when user_id is empty
    ///
    async fn set_current_user(&self, user_id: &str) -> Result<SessionContext, Error>;

    ///
    /// ### Returns
    /// All tickets of the current user in insertion order
    ///
    /// ### Errors
    /// - [Error::Unauthenticated] when there is no current user
    ///
    async fn list(&self, session: &SessionContext) -> Result<Vec<Ticket>, Error>;

    ///
    /// Creates ticket owned by the current user.
    /// Owner stored in `ticket` is ignored.
    ///
    /// ### Returns
    /// Created ticket with newly assigned id
    ///
    /// ### Errors
    /// - [Error::Unauthenticated] when there is no current user
    ///
    async fn create(
        &self,
        session: &SessionContext,
        ticket: input::NewTicket,
    ) -> Result<Ticket, Error>;

    ///
    /// Overwrites ticket fields that are present in `updates`
    ///
    /// ### Returns
    /// Updated ticket
    ///
    /// ### Errors
    /// - [Error::Unauthenticated] when there is no current user
    /// - [Error::TicketNotFound] when
    ///     - ticket with id does not exist
    ///     - ticket belongs to other user
    ///
    async fn update(
        &self,
        session: &SessionContext,
        id: &str,
        updates: input::TicketUpdate,
    ) -> Result<Ticket, Error>;

    ///
    /// ### Errors
    /// - [Error::Unauthenticated] when there is no current user
    /// - [Error::TicketNotFound] when
    ///     - ticket with id does not exist
    ///     - ticket belongs to other user
    ///
    async fn delete(&self, session: &SessionContext, id: &str) -> Result<(), Error>;

    ///
    /// ### Returns
    /// Number of current user's tickets by status
    ///
    /// ### Errors
    /// - [Error::Unauthenticated] when there is no current user
    ///
    async fn get_stats(&self, session: &SessionContext) -> Result<output::TicketStats, Error>;
}
