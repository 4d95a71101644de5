use crate::{repository, validation::ValidationErrors};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no user logged in")]
    Unauthenticated,

    #[error("ticket not found")]
    TicketNotFound,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("email already exists")]
    EmailExists,

    #[error("validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),

    /// Message recorded by [crate::store::TicketsStore] when fetching failed
    #[error("failed to fetch tickets: {0}")]
    FetchFailed(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        match self {
            Error::Unauthenticated => StatusCode::UNAUTHORIZED.into_response(),
            Error::TicketNotFound => StatusCode::NOT_FOUND.into_response(),
            Error::InvalidCredentials => StatusCode::UNAUTHORIZED.into_response(),
            Error::EmailExists => StatusCode::CONFLICT.into_response(),
            Error::Validation(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response()
            }
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
            Error::FetchFailed(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": message })),
            )
                .into_response(),
        }
    }
}
