use crate::{auth::SessionValidator, store::AuthStore};
use std::sync::Arc;
use tower_http::{
    trace::{HttpMakeClassifier, TraceLayer},
    validate_request::ValidateRequestHeaderLayer,
};

pub struct ApplicationMiddleware {
    pub session: ValidateRequestHeaderLayer<SessionValidator>,
    pub trace: TraceLayer<HttpMakeClassifier>,
}

pub fn create_middleware(auth_store: Arc<AuthStore>) -> ApplicationMiddleware {
    let session = ValidateRequestHeaderLayer::custom(SessionValidator::new(auth_store));
    let trace = TraceLayer::new_for_http();

    ApplicationMiddleware { session, trace }
}
