use crate::{dto::inoutput::User, error::Error, repository::SessionRepository};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, RwLock,
};

///
/// Holds the logged in user.
///
/// User is mirrored to [SessionRepository] so the session
/// survives application restart.
///
pub struct AuthStore {
    repository: Arc<dyn SessionRepository>,
    user: RwLock<Option<User>>,
    is_loading: AtomicBool,
}

impl AuthStore {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self {
            repository,
            user: RwLock::new(None),
            is_loading: AtomicBool::new(true),
        }
    }

    ///
    /// Restores user from stored session.
    /// Failures are logged and treated as no session.
    ///
    pub async fn initialize(&self) {
        match self.repository.load().await {
            Ok(user) => {
                tracing::info!(restored = user.is_some(), "initialized session");
                self.set_user(user);
            }
            Err(err) => tracing::error!(%err, "failed to restore session"),
        }

        self.is_loading.store(false, Ordering::Release);
    }

    ///
    /// ### Errors
    /// - [Error::Database] when session cannot be stored
    ///
    pub async fn login(&self, user: User) -> Result<(), Error> {
        self.repository.save(&user).await?;

        tracing::info!(id = %user.id, "session started");
        self.set_user(Some(user));

        Ok(())
    }

    ///
    /// User is forgotten even if stored session cannot be removed
    ///
    /// ### Errors
    /// - [Error::Database] when stored session cannot be removed
    ///
    pub async fn logout(&self) -> Result<(), Error> {
        self.set_user(None);
        tracing::info!("session ended");

        self.repository.clear().await?;

        Ok(())
    }

    pub fn user(&self) -> Option<User> {
        match self.user.read() {
            Ok(user) => user.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading.load(Ordering::Acquire)
    }

    fn set_user(&self, user: Option<User>) {
        match self.user.write() {
            Ok(mut guard) => *guard = user,
            Err(poisoned) => *poisoned.into_inner() = user,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repository::{self, MockSessionRepository, SessionRepositoryImpl};
    use local_storage::{LocalStorage, MemoryStorage};

    fn user() -> User {
        User {
            id: "1".to_string(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        }
    }

    fn storage_error() -> repository::Error {
        repository::Error::Storage(local_storage::Error::Io(std::io::Error::other(
            "disk failure",
        )))
    }

    #[tokio::test]
    async fn initialize_no_session() {
        let repository = SessionRepositoryImpl::new(Arc::new(MemoryStorage::new()));
        let store = AuthStore::new(Arc::new(repository));

        assert!(store.is_loading());
        store.initialize().await;

        assert!(!store.is_loading());
        assert_eq!(store.user(), None);
    }

    #[tokio::test]
    async fn initialize_restores_session() {
        let storage = Arc::new(MemoryStorage::new());
        let store = AuthStore::new(Arc::new(SessionRepositoryImpl::new(storage.clone())));
        store.login(user()).await.unwrap();

        let restored = AuthStore::new(Arc::new(SessionRepositoryImpl::new(storage)));
        restored.initialize().await;

        assert_eq!(restored.user(), Some(user()));
    }

    #[tokio::test]
    async fn initialize_corrupted_session() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .set_item("ticketapp_session", "{not json".to_string())
            .await
            .unwrap();
        let store = AuthStore::new(Arc::new(SessionRepositoryImpl::new(storage.clone())));

        store.initialize().await;

        assert_eq!(store.user(), None);
        assert!(!store.is_loading());
        assert_eq!(storage.get_item("ticketapp_session").await.unwrap(), None);
    }

    #[tokio::test]
    async fn initialize_repository_error() {
        let mut repository = MockSessionRepository::new();
        repository.expect_load().returning(|| Err(storage_error()));
        let store = AuthStore::new(Arc::new(repository));

        store.initialize().await;

        assert_eq!(store.user(), None);
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn login_save_error_user_not_set() {
        let mut repository = MockSessionRepository::new();
        repository.expect_save().returning(|_| Err(storage_error()));
        let store = AuthStore::new(Arc::new(repository));

        let result = store.login(user()).await;

        assert!(matches!(result, Err(Error::Database(_))));
        assert_eq!(store.user(), None);
    }

    #[tokio::test]
    async fn logout_clears_session() {
        let storage = Arc::new(MemoryStorage::new());
        let store = AuthStore::new(Arc::new(SessionRepositoryImpl::new(storage.clone())));
        store.login(user()).await.unwrap();

        store.logout().await.unwrap();

        assert_eq!(store.user(), None);
        assert_eq!(storage.get_item("ticketapp_session").await.unwrap(), None);
    }
}
