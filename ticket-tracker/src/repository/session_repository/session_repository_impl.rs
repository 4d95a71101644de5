use super::SessionRepository;
use crate::{dto::inoutput::User, repository};
use axum::async_trait;
use local_storage::LocalStorage;
use std::sync::Arc;

const SESSION_KEY: &str = "ticketapp_session";

pub struct SessionRepositoryImpl {
    storage: Arc<dyn LocalStorage>,
}

impl SessionRepositoryImpl {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl SessionRepository for SessionRepositoryImpl {
    async fn load(&self) -> Result<Option<User>, repository::Error> {
        let Some(json) = self.storage.get_item(SESSION_KEY).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<User>(&json) {
            Ok(user) => Ok(Some(user)),
            Err(err) => {
                tracing::error!(%err, "failed to parse session data");
                self.storage.remove_item(SESSION_KEY).await?;
                Ok(None)
            }
        }
    }

    async fn save(&self, user: &User) -> Result<(), repository::Error> {
        let json = serde_json::to_string(user)?;
        self.storage.set_item(SESSION_KEY, json).await?;

        Ok(())
    }

    async fn clear(&self) -> Result<(), repository::Error> {
        self.storage.remove_item(SESSION_KEY).await?;

        Ok(())
    }
}
