use super::{AuthService, AuthServiceConfig};
use crate::{
    dto::{inoutput::User, input},
    error::Error,
    repository::{self, UsersRepository},
};
use axum::async_trait;
use std::sync::Arc;

pub struct AuthServiceImpl {
    config: AuthServiceConfig,
    repository: Arc<dyn UsersRepository>,
}

impl AuthServiceImpl {
    pub fn new(config: AuthServiceConfig, repository: Arc<dyn UsersRepository>) -> Self {
        Self { config, repository }
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn login(&self, credentials: input::Credentials) -> Result<User, Error> {
        tokio::time::sleep(self.config.simulated_delay).await;

        tracing::info!(email = %credentials.email, "logging in");

        let user = self
            .repository
            .find_by_credentials(&credentials.email, &credentials.password)
            .await?
            .ok_or(Error::InvalidCredentials)?;

        tracing::info!(id = %user.id, "logged in");

        Ok(user)
    }

    async fn signup(&self, signup: input::Signup) -> Result<User, Error> {
        tokio::time::sleep(self.config.simulated_delay).await;

        tracing::info!(email = %signup.email, "signing up");

        let user = self
            .repository
            .insert(&signup.name, &signup.email, &signup.password)
            .await
            .map_err(|err| match err {
                repository::Error::InsertUniqueViolation => Error::EmailExists,
                err => Error::Database(err),
            })?;

        tracing::info!(id = %user.id, "signed up");

        Ok(user)
    }
}
