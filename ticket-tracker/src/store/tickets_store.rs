use crate::{
    dto::{inoutput::Ticket, input, output},
    error::Error,
    service::tickets_service::TicketsService,
    session::SessionContext,
};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct TicketsState {
    pub tickets: Vec<Ticket>,
    pub stats: output::TicketStats,
    pub is_loading: bool,

    /// Message of the last failed fetch
    pub error: Option<String>,
}

impl Default for TicketsState {
    fn default() -> Self {
        Self {
            tickets: Vec::new(),
            stats: output::TicketStats::default(),
            is_loading: true,
            error: None,
        }
    }
}

///
/// Local copy of the current user's tickets kept in sync
/// with [TicketsService] after every change.
///
pub struct TicketsStore {
    service: Arc<dyn TicketsService>,
    session: Mutex<SessionContext>,
    state: Mutex<TicketsState>,
}

impl TicketsStore {
    pub fn new(service: Arc<dyn TicketsService>) -> Self {
        Self {
            service,
            session: Mutex::new(SessionContext::anonymous()),
            state: Mutex::new(TicketsState::default()),
        }
    }

    pub async fn state(&self) -> TicketsState {
        self.state.lock().await.clone()
    }

    ///
    /// Makes `user_id` current and replaces local tickets.
    /// Failure is stored in [TicketsState::error].
    ///
    pub async fn fetch_tickets(&self, user_id: &str) {
        {
            let mut state = self.state.lock().await;
            state.is_loading = true;
            state.error = None;
        }

        let result = self.load_tickets(user_id).await;

        let mut state = self.state.lock().await;
        match result {
            Ok(tickets) => state.tickets = tickets,
            Err(err) => {
                tracing::error!(%err, "failed to fetch tickets");
                state.error = Some(err.to_string());
            }
        }
        state.is_loading = false;
    }

    ///
    /// Makes `user_id` current and refreshes stats.
    /// Failure is only logged.
    ///
    pub async fn fetch_stats(&self, user_id: &str) {
        match self.load_stats(user_id).await {
            Ok(stats) => self.state.lock().await.stats = stats,
            Err(err) => tracing::error!(%err, "failed to fetch stats"),
        }
    }

    ///
    /// ### Returns
    /// Created ticket
    ///
    /// ### Errors
    /// - [Error::Unauthenticated] when no user was selected
    ///
    pub async fn create_ticket(&self, ticket: input::NewTicket) -> Result<Ticket, Error> {
        let session = self.session().await;
        let ticket = self.service.create(&session, ticket).await?;

        self.state.lock().await.tickets.push(ticket.clone());
        self.fetch_stats(&ticket.user_id).await;

        Ok(ticket)
    }

    ///
    /// ### Returns
    /// Updated ticket
    ///
    /// ### Errors
    /// - [Error::Unauthenticated] when no user was selected
    /// - [Error::TicketNotFound] when ticket does not exist
    ///
    pub async fn update_ticket(
        &self,
        id: &str,
        updates: input::TicketUpdate,
    ) -> Result<Ticket, Error> {
        let session = self.session().await;
        let ticket = self.service.update(&session, id, updates).await?;

        {
            let mut state = self.state.lock().await;
            if let Some(local) = state.tickets.iter_mut().find(|local| local.id == id) {
                *local = ticket.clone();
            }
        }
        self.fetch_stats(&ticket.user_id).await;

        Ok(ticket)
    }

    ///
    /// ### Errors
    /// - [Error::Unauthenticated] when no user was selected
    /// - [Error::TicketNotFound] when ticket does not exist
    ///
    pub async fn delete_ticket(&self, id: &str, user_id: &str) -> Result<(), Error> {
        let session = self.session().await;
        self.service.delete(&session, id).await?;

        self.state
            .lock()
            .await
            .tickets
            .retain(|ticket| ticket.id != id);
        self.fetch_stats(user_id).await;

        Ok(())
    }

    ///
    /// Makes `user_id` current for the following changes.
    /// Local tickets and stats of the previous user are dropped.
    ///
    /// ### Errors
    /// - [Error::Unauthenticated] when user_id is empty
    ///
    pub async fn select_user(&self, user_id: &str) -> Result<SessionContext, Error> {
        let session = self.service.set_current_user(user_id).await?;

        let mut current = self.session.lock().await;
        if current.current_user_id() != session.current_user_id() {
            let mut state = self.state.lock().await;
            state.tickets.clear();
            state.stats = output::TicketStats::default();
        }
        *current = session.clone();

        Ok(session)
    }

    async fn session(&self) -> SessionContext {
        self.session.lock().await.clone()
    }

    async fn load_tickets(&self, user_id: &str) -> Result<Vec<Ticket>, Error> {
        let session = self.select_user(user_id).await?;
        self.service.list(&session).await
    }

    async fn load_stats(&self, user_id: &str) -> Result<output::TicketStats, Error> {
        let session = self.select_user(user_id).await?;
        self.service.get_stats(&session).await
    }
}
