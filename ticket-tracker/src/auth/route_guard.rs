use crate::dto::inoutput::User;

/// Where users without a session are sent
pub const LOGIN_PATH: &str = "/auth/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    RedirectToLogin,
}

///
/// Decides whether route can be entered.
///
/// Routes that do not require authentication are always entered.
///
pub fn guard(requires_auth: bool, user: Option<&User>) -> Navigation {
    match (requires_auth, user) {
        (true, None) => Navigation::RedirectToLogin,
        _ => Navigation::Proceed,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn user() -> User {
        User {
            id: "1".to_string(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        }
    }

    #[test]
    fn requires_auth_no_user() {
        assert_eq!(guard(true, None), Navigation::RedirectToLogin);
    }

    #[test]
    fn requires_auth_user() {
        assert_eq!(guard(true, Some(&user())), Navigation::Proceed);
    }

    #[test]
    fn public_route() {
        assert_eq!(guard(false, None), Navigation::Proceed);
        assert_eq!(guard(false, Some(&user())), Navigation::Proceed);
    }
}
