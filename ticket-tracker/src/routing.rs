use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    dto::{
        inoutput::{Ticket, User},
        input, output,
    },
    error::Error,
    service::auth_service::AuthService,
    store::{AuthStore, TicketsStore},
    validation,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post},
    Extension, Json, Router,
};
use std::sync::Arc;

pub fn routing(application_middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    Router::new()
        .route("/api/v1/tickets", get(list_tickets).post(create_ticket))
        .route("/api/v1/tickets/stats", get(get_stats))
        .route(
            "/api/v1/tickets/:id",
            patch(update_ticket).delete(delete_ticket),
        )
        .route_layer(application_middleware.session.clone())
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/signup", post(signup))
        .route("/api/v1/auth/logout", post(logout))
        .route("/api/v1/auth/session", get(get_session))
}

async fn login(
    State(auth_service): State<Arc<dyn AuthService>>,
    State(auth_store): State<Arc<AuthStore>>,
    Json(credentials): Json<input::Credentials>,
) -> Result<Json<User>, Error> {
    let user = auth_service.login(credentials).await?;
    auth_store.login(user.clone()).await?;

    Ok(Json(user))
}

async fn signup(
    State(auth_service): State<Arc<dyn AuthService>>,
    State(auth_store): State<Arc<AuthStore>>,
    Json(signup): Json<input::Signup>,
) -> Result<(StatusCode, Json<User>), Error> {
    let user = auth_service.signup(signup).await?;
    auth_store.login(user.clone()).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

async fn logout(State(auth_store): State<Arc<AuthStore>>) -> Result<StatusCode, Error> {
    auth_store.logout().await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn get_session(State(auth_store): State<Arc<AuthStore>>) -> Json<Option<User>> {
    Json(auth_store.user())
}

async fn list_tickets(
    State(tickets_store): State<Arc<TicketsStore>>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<Ticket>>, Error> {
    tickets_store.fetch_tickets(&user.id).await;

    let state = tickets_store.state().await;
    if let Some(error) = state.error {
        return Err(Error::FetchFailed(error));
    }

    Ok(Json(state.tickets))
}

async fn create_ticket(
    State(tickets_store): State<Arc<TicketsStore>>,
    Extension(user): Extension<User>,
    Json(mut form): Json<input::TicketForm>,
) -> Result<(StatusCode, Json<Ticket>), Error> {
    if form.user_id.is_none() {
        form.user_id = Some(user.id.clone());
    }
    let ticket = validation::validate_ticket(&form)?;

    tickets_store.select_user(&user.id).await?;
    let ticket = tickets_store.create_ticket(ticket).await?;

    Ok((StatusCode::CREATED, Json(ticket)))
}

async fn get_stats(
    State(tickets_store): State<Arc<TicketsStore>>,
    Extension(user): Extension<User>,
) -> Json<output::TicketStats> {
    tickets_store.fetch_stats(&user.id).await;

    Json(tickets_store.state().await.stats)
}

async fn update_ticket(
    State(tickets_store): State<Arc<TicketsStore>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
    Json(form): Json<input::TicketUpdateForm>,
) -> Result<Json<Ticket>, Error> {
    let updates = validation::validate_ticket_update(&form)?;

    tickets_store.select_user(&user.id).await?;
    let ticket = tickets_store.update_ticket(&id, updates).await?;

    Ok(Json(ticket))
}

async fn delete_ticket(
    State(tickets_store): State<Arc<TicketsStore>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<StatusCode, Error> {
    tickets_store.select_user(&user.id).await?;
    tickets_store.delete_ticket(&id, &user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
