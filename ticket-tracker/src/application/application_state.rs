use super::ApplicationEnv;
use crate::{
    repository::{SessionRepositoryImpl, TicketsRepositoryImpl, UsersRepositoryImpl},
    service::{
        auth_service::{AuthService, AuthServiceConfig, AuthServiceImpl},
        tickets_service::{TicketsServiceConfig, TicketsServiceImpl},
    },
    store::{AuthStore, TicketsStore},
};
use axum::extract::FromRef;
use local_storage::{FileStorage, LocalStorage};
use std::{sync::Arc, time::Duration};

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub auth_service: Arc<dyn AuthService>,
    pub auth_store: Arc<AuthStore>,
    pub tickets_store: Arc<TicketsStore>,
}

pub async fn create_state(env: &ApplicationEnv) -> anyhow::Result<ApplicationState> {
    tracing::info!(path = %env.storage_path.display(), "opening storage");
    let storage = FileStorage::open(env.storage_path.clone()).await?;

    let state = create_state_with_storage(Arc::new(storage), env.simulated_delay).await;

    Ok(state)
}

///
/// Builds state on top of any storage.
/// Stored session is restored before returning.
///
pub async fn create_state_with_storage(
    storage: Arc<dyn LocalStorage>,
    simulated_delay: Duration,
) -> ApplicationState {
    tracing::info!("creating repositories");
    let tickets_repository = TicketsRepositoryImpl::new(storage.clone());
    let tickets_repository = Arc::new(tickets_repository);

    let session_repository = SessionRepositoryImpl::new(storage);
    let session_repository = Arc::new(session_repository);

    let users_repository = UsersRepositoryImpl::seeded();
    let users_repository = Arc::new(users_repository);

    tracing::info!("creating services");
    let config = AuthServiceConfig { simulated_delay };
    let auth_service = AuthServiceImpl::new(config, users_repository);
    let auth_service = Arc::new(auth_service);

    let config = TicketsServiceConfig { simulated_delay };
    let tickets_service = TicketsServiceImpl::new(config, tickets_repository);
    let tickets_service = Arc::new(tickets_service);

    tracing::info!("creating stores");
    let tickets_store = TicketsStore::new(tickets_service);
    let tickets_store = Arc::new(tickets_store);

    tracing::info!("restoring session");
    let auth_store = AuthStore::new(session_repository);
    auth_store.initialize().await;
    let auth_store = Arc::new(auth_store);

    ApplicationState {
        auth_service,
        auth_store,
        tickets_store,
    }
}
