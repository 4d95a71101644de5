use super::{UserEntity, UsersRepository};
use crate::{dto::inoutput::User, repository};
use axum::async_trait;
use tokio::sync::Mutex;

///
/// Volatile user registry. Every restart brings back only the seeded users.
///
pub struct UsersRepositoryImpl {
    users: Mutex<Vec<UserEntity>>,
}

impl UsersRepositoryImpl {
    pub fn new(users: Vec<UserEntity>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    ///
    /// Registry containing only the test account
    ///
    pub fn seeded() -> Self {
        Self::new(vec![UserEntity {
            id: "1".to_string(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password: "password123".to_string(),
        }])
    }
}

#[async_trait]
impl UsersRepository for UsersRepositoryImpl {
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, repository::Error> {
        let users = self.users.lock().await;

        let user = users
            .iter()
            .find(|user| user.email == email && user.password == password)
            .map(User::from);

        Ok(user)
    }

    async fn insert(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, repository::Error> {
        let mut users = self.users.lock().await;

        if users.iter().any(|user| user.email == email) {
            return Err(repository::Error::InsertUniqueViolation);
        }

        let entity = UserEntity {
            id: (users.len() + 1).to_string(),
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let user = User::from(&entity);
        users.push(entity);

        Ok(user)
    }
}
