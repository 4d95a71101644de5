use super::{TicketsService, TicketsServiceConfig};
use crate::{
    dto::{inoutput::Ticket, input, output},
    error::Error,
    repository::TicketsRepository,
    session::SessionContext,
};
use axum::async_trait;
use std::{
    collections::{hash_map::Entry, HashMap},
    sync::Arc,
};
use tokio::sync::Mutex;
use uuid::Uuid;

///
/// Ticket service that imitates remote API.
///
/// Tickets are cached in memory per user and every change
/// writes the user's whole collection back to the repository.
///
pub struct TicketsServiceImpl {
    config: TicketsServiceConfig,
    repository: Arc<dyn TicketsRepository>,
    cache: Mutex<HashMap<String, Vec<Ticket>>>,
}

impl TicketsServiceImpl {
    pub fn new(config: TicketsServiceConfig, repository: Arc<dyn TicketsRepository>) -> Self {
        Self {
            config,
            repository,
            cache: Mutex::new(HashMap::new()),
        }
    }

    async fn simulate_network(&self) {
        tokio::time::sleep(self.config.simulated_delay).await;
    }

    async fn user_tickets<'a>(
        &self,
        cache: &'a mut HashMap<String, Vec<Ticket>>,
        user_id: &str,
    ) -> Result<&'a mut Vec<Ticket>, Error> {
        let tickets = match cache.entry(user_id.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let tickets = self.repository.load(user_id).await?;
                tracing::debug!(count = tickets.len(), "cached tickets");
                entry.insert(tickets)
            }
        };

        Ok(tickets)
    }

    ///
    /// Cache is replaced only after `updated` was saved,
    /// so failed save leaves both untouched.
    ///
    async fn persist(
        &self,
        tickets: &mut Vec<Ticket>,
        updated: Vec<Ticket>,
        user_id: &str,
    ) -> Result<(), Error> {
        self.repository.save(&updated, user_id).await?;
        *tickets = updated;

        Ok(())
    }

    fn position(tickets: &[Ticket], id: &str, user_id: &str) -> Result<usize, Error> {
        tickets
            .iter()
            .position(|ticket| ticket.id == id && ticket.user_id == user_id)
            .ok_or(Error::TicketNotFound)
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    async fn set_current_user(&self, user_id: &str) -> Result<SessionContext, Error> {
        let session = SessionContext::for_user(user_id);
        let user_id = session.require_user()?;

        let mut cache = self.cache.lock().await;
        self.user_tickets(&mut cache, user_id).await?;

        Ok(session)
    }

    async fn list(&self, session: &SessionContext) -> Result<Vec<Ticket>, Error> {
        self.simulate_network().await;
        let user_id = session.require_user()?;

        tracing::info!(user_id, "listing tickets");

        let mut cache = self.cache.lock().await;
        let tickets = self.user_tickets(&mut cache, user_id).await?;

        tracing::info!(count = tickets.len(), "listed tickets");

        Ok(tickets.clone())
    }

    async fn create(
        &self,
        session: &SessionContext,
        ticket: input::NewTicket,
    ) -> Result<Ticket, Error> {
        self.simulate_network().await;
        let user_id = session.require_user()?;

        tracing::info!(user_id, "creating ticket");

        let ticket = Ticket {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            title: ticket.title,
            description: ticket.description,
            status: ticket.status,
            priority: ticket.priority,
        };

        let mut cache = self.cache.lock().await;
        let tickets = self.user_tickets(&mut cache, user_id).await?;

        let mut updated = tickets.clone();
        updated.push(ticket.clone());
        self.persist(tickets, updated, user_id).await?;

        tracing::info!(id = %ticket.id, "created ticket");

        Ok(ticket)
    }

    async fn update(
        &self,
        session: &SessionContext,
        id: &str,
        updates: input::TicketUpdate,
    ) -> Result<Ticket, Error> {
        self.simulate_network().await;
        let user_id = session.require_user()?;

        tracing::info!(user_id, id, "updating ticket");
        tracing::trace!(?updates);

        let mut cache = self.cache.lock().await;
        let tickets = self.user_tickets(&mut cache, user_id).await?;
        let index = Self::position(tickets, id, user_id)?;

        let mut updated = tickets.clone();
        let ticket = &mut updated[index];
        if let Some(title) = updates.title {
            ticket.title = title;
        }
        if let Some(description) = updates.description {
            ticket.description = description;
        }
        if let Some(status) = updates.status {
            ticket.status = status;
        }
        if let Some(priority) = updates.priority {
            ticket.priority = priority;
        }
        let ticket = ticket.clone();

        self.persist(tickets, updated, user_id).await?;

        tracing::info!("updated ticket");

        Ok(ticket)
    }

    async fn delete(&self, session: &SessionContext, id: &str) -> Result<(), Error> {
        self.simulate_network().await;
        let user_id = session.require_user()?;

        tracing::info!(user_id, id, "deleting ticket");

        let mut cache = self.cache.lock().await;
        let tickets = self.user_tickets(&mut cache, user_id).await?;
        let index = Self::position(tickets, id, user_id)?;

        let mut updated = tickets.clone();
        updated.remove(index);
        self.persist(tickets, updated, user_id).await?;

        tracing::info!("deleted ticket");

        Ok(())
    }

    async fn get_stats(&self, session: &SessionContext) -> Result<output::TicketStats, Error> {
        self.simulate_network().await;
        let user_id = session.require_user()?;

        let mut cache = self.cache.lock().await;
        let tickets = self.user_tickets(&mut cache, user_id).await?;

        let stats = output::TicketStats::from_tickets(tickets);
        tracing::info!(user_id, total = stats.total, "computed ticket stats");

        Ok(stats)
    }
}
