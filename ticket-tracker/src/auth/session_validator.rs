use super::{guard, Navigation, LOGIN_PATH};
use crate::store::AuthStore;
use axum::{
    body::Body,
    http::{Request, Response},
    response::{IntoResponse, Redirect},
};
use std::sync::Arc;
use tower_http::validate_request::ValidateRequest;

///
/// Middleware that lets requests through only when someone is logged in.
/// Logged in [crate::dto::inoutput::User] is added to request extensions,
/// other requests are redirected to the login page.
///
#[derive(Clone)]
pub struct SessionValidator {
    auth_store: Arc<AuthStore>,
}

impl SessionValidator {
    pub fn new(auth_store: Arc<AuthStore>) -> Self {
        Self { auth_store }
    }
}

impl<B> ValidateRequest<B> for SessionValidator {
    type ResponseBody = Body;

    fn validate(&mut self, request: &mut Request<B>) -> Result<(), Response<Self::ResponseBody>> {
        let user = self.auth_store.user();

        match (guard(true, user.as_ref()), user) {
            (Navigation::Proceed, Some(user)) => {
                request.extensions_mut().insert(user);
                Ok(())
            }
            _ => {
                tracing::warn!(uri = %request.uri(), "no session, redirecting to login");
                Err(Redirect::to(LOGIN_PATH).into_response())
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{dto::inoutput::User, repository::SessionRepositoryImpl};
    use axum::{
        http::{header::LOCATION, Method, StatusCode},
        routing::get,
        Extension, Router,
    };
    use local_storage::MemoryStorage;
    use tower::ServiceExt;
    use tower_http::validate_request::ValidateRequestHeaderLayer;

    fn auth_store() -> Arc<AuthStore> {
        let repository = SessionRepositoryImpl::new(Arc::new(MemoryStorage::new()));
        Arc::new(AuthStore::new(Arc::new(repository)))
    }

    fn router(auth_store: Arc<AuthStore>) -> Router {
        Router::new()
            .route(
                "/",
                get(|Extension(user): Extension<User>| async move {
                    if user.id != "1" {
                        return StatusCode::INTERNAL_SERVER_ERROR;
                    }

                    StatusCode::OK
                }),
            )
            .route_layer(ValidateRequestHeaderLayer::custom(SessionValidator::new(
                auth_store,
            )))
    }

    fn request() -> Request<Body> {
        Request::builder()
            .method(Method::GET)
            .uri("/")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn no_session_redirect() {
        let response = router(auth_store()).oneshot(request()).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), LOGIN_PATH);
    }

    #[tokio::test]
    async fn session_request_extension() {
        let auth_store = auth_store();
        auth_store
            .login(User {
                id: "1".to_string(),
                name: "Test User".to_string(),
                email: "test@example.com".to_string(),
            })
            .await
            .unwrap();

        let response = router(auth_store).oneshot(request()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
