use super::TicketsRepository;
use crate::{dto::inoutput::Ticket, repository};
use axum::async_trait;
use local_storage::LocalStorage;
use std::sync::Arc;

pub struct TicketsRepositoryImpl {
    storage: Arc<dyn LocalStorage>,
}

impl TicketsRepositoryImpl {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self { storage }
    }

    fn key(user_id: &str) -> String {
        format!("tickets_{user_id}")
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn load(&self, user_id: &str) -> Result<Vec<Ticket>, repository::Error> {
        let key = Self::key(user_id);

        let tickets = match self.storage.get_item(&key).await? {
            Some(json) => serde_json::from_str(&json)?,
            None => Vec::new(),
        };
        tracing::debug!(%key, count = tickets.len(), "loaded tickets");

        Ok(tickets)
    }

    async fn save(&self, tickets: &[Ticket], user_id: &str) -> Result<(), repository::Error> {
        let key = Self::key(user_id);

        let json = serde_json::to_string(tickets)?;
        self.storage.set_item(&key, json).await?;
        tracing::debug!(%key, count = tickets.len(), "saved tickets");

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dto::inoutput::{TicketPriority, TicketStatus};
    use local_storage::MemoryStorage;

    fn ticket(id: &str, user_id: &str) -> Ticket {
        Ticket {
            id: id.to_string(),
            user_id: user_id.to_string(),
            title: format!("ticket {id}"),
            description: String::new(),
            status: TicketStatus::Open,
            priority: TicketPriority::Medium,
        }
    }

    #[tokio::test]
    async fn load_nothing_saved() {
        let repository = TicketsRepositoryImpl::new(Arc::new(MemoryStorage::new()));

        let tickets = repository.load("1").await.unwrap();

        assert!(tickets.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_same_order() {
        let repository = TicketsRepositoryImpl::new(Arc::new(MemoryStorage::new()));
        let tickets = vec![ticket("b", "1"), ticket("a", "1"), ticket("c", "1")];

        repository.save(&tickets, "1").await.unwrap();
        let loaded = repository.load("1").await.unwrap();

        assert_eq!(loaded, tickets);
    }

    #[tokio::test]
    async fn save_overwrites_previous_collection() {
        let repository = TicketsRepositoryImpl::new(Arc::new(MemoryStorage::new()));

        repository
            .save(&[ticket("a", "1"), ticket("b", "1")], "1")
            .await
            .unwrap();
        repository.save(&[ticket("c", "1")], "1").await.unwrap();

        let loaded = repository.load("1").await.unwrap();

        assert_eq!(loaded, vec![ticket("c", "1")]);
    }

    #[tokio::test]
    async fn save_stored_under_user_key() {
        let storage = Arc::new(MemoryStorage::new());
        let repository = TicketsRepositoryImpl::new(storage.clone());

        repository.save(&[ticket("a", "7")], "7").await.unwrap();

        let json = storage.get_item("tickets_7").await.unwrap().unwrap();
        let value = serde_json::from_str::<serde_json::Value>(&json).unwrap();
        assert_eq!(value[0]["userId"], "7");
        assert!(repository.load("8").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn load_corrupted_data() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .set_item("tickets_1", "{not json".to_string())
            .await
            .unwrap();
        let repository = TicketsRepositoryImpl::new(storage);

        let err = repository.load("1").await.unwrap_err();

        assert!(matches!(err, repository::Error::Serialization(_)));
    }
}
