use super::{ApplicationMiddleware, ApplicationState};
use crate::routing::routing;
use axum::{
    http::{StatusCode, Uri},
    Router,
};

pub fn create_application(
    application_state: ApplicationState,
    application_middleware: ApplicationMiddleware,
) -> Router {
    routing(&application_middleware)
        .fallback(route_not_found)
        .with_state(application_state)
        .layer(application_middleware.trace)
}

async fn route_not_found(uri: Uri) -> StatusCode {
    tracing::warn!(%uri, "route not found");

    StatusCode::NOT_FOUND
}
