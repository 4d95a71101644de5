use crate::{dto::inoutput::User, error::Error};

///
/// Identifies the user on whose behalf ticket operations run.
///
/// Passed explicitly to every call of [crate::service::tickets_service::TicketsService].
/// Obtain one for a logged in user with
/// [crate::service::tickets_service::TicketsService::set_current_user].
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    current_user_id: Option<String>,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            current_user_id: Some(user_id.into()),
        }
    }

    pub fn current_user_id(&self) -> Option<&str> {
        self.current_user_id.as_deref()
    }

    ///
    /// ### Errors
    /// - [Error::Unauthenticated] when there is no current user
    ///     or the user id is empty
    ///
    pub fn require_user(&self) -> Result<&str, Error> {
        match self.current_user_id() {
            Some(user_id) if !user_id.is_empty() => Ok(user_id),
            _ => Err(Error::Unauthenticated),
        }
    }
}

impl From<&User> for SessionContext {
    fn from(user: &User) -> Self {
        Self::for_user(user.id.clone())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn anonymous_require_user() {
        let session = SessionContext::anonymous();

        assert!(matches!(session.require_user(), Err(Error::Unauthenticated)));
    }

    #[test]
    fn empty_user_id_require_user() {
        let session = SessionContext::for_user("");

        assert!(matches!(session.require_user(), Err(Error::Unauthenticated)));
    }

    #[test]
    fn from_user() {
        let user = User {
            id: "3".to_string(),
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
        };

        let session = SessionContext::from(&user);

        assert_eq!(session.require_user().unwrap(), "3");
    }
}
