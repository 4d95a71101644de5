use super::{TicketField, ValidationErrors};
use crate::dto::{
    inoutput::{TicketPriority, TicketStatus},
    input,
};
use std::str::FromStr;

pub const TITLE_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 500;

const TITLE_REQUIRED: &str = "Title is required";
const TITLE_TOO_LONG: &str = "Title must be less than 100 characters";
const DESCRIPTION_TOO_LONG: &str = "Description must be less than 500 characters";
const STATUS_REQUIRED: &str = "Status is required";
const STATUS_INVALID: &str = "Status must be 'open', 'in_progress', or 'closed'";
const PRIORITY_REQUIRED: &str = "Priority is required";
const PRIORITY_INVALID: &str = "Priority must be 'low', 'medium', or 'high'";
const USER_ID_REQUIRED: &str = "User ID is required";

///
/// Validates complete ticket form.
///
/// ### Returns
/// [input::NewTicket] with trimmed title and empty description when it was missing
///
/// ### Errors
/// [ValidationErrors] with messages for every invalid field
///
pub fn validate_ticket(form: &input::TicketForm) -> Result<input::NewTicket, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let title = record(&mut errors, TicketField::Title, title(form.title.as_deref()));
    let description = record(
        &mut errors,
        TicketField::Description,
        description(form.description.as_deref().unwrap_or_default()),
    );
    let status = record(&mut errors, TicketField::Status, status(form.status.as_deref()));
    let priority = record(
        &mut errors,
        TicketField::Priority,
        priority(form.priority.as_deref()),
    );
    let user_id = record(
        &mut errors,
        TicketField::UserId,
        user_id(form.user_id.as_deref()),
    );

    match (title, description, status, priority, user_id) {
        (Some(title), Some(description), Some(status), Some(priority), Some(user_id)) => {
            Ok(input::NewTicket {
                user_id,
                title,
                description,
                status,
                priority,
            })
        }
        _ => Err(errors),
    }
}

///
/// Validates only fields present in the partial update.
///
/// ### Errors
/// [ValidationErrors] with messages for every invalid present field
///
pub fn validate_ticket_update(
    form: &input::TicketUpdateForm,
) -> Result<input::TicketUpdate, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let mut update = input::TicketUpdate::default();

    if let Some(value) = form.title.as_deref() {
        update.title = record(&mut errors, TicketField::Title, title(Some(value)));
    }
    if let Some(value) = form.description.as_deref() {
        update.description = record(&mut errors, TicketField::Description, description(value));
    }
    if let Some(value) = form.status.as_deref() {
        update.status = record(&mut errors, TicketField::Status, status(Some(value)));
    }
    if let Some(value) = form.priority.as_deref() {
        update.priority = record(&mut errors, TicketField::Priority, priority(Some(value)));
    }

    match errors.is_empty() {
        true => Ok(update),
        false => Err(errors),
    }
}

fn record<T>(
    errors: &mut ValidationErrors,
    field: TicketField,
    result: Result<T, &'static str>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(message) => {
            errors.push(field, message);
            None
        }
    }
}

fn title(value: Option<&str>) -> Result<String, &'static str> {
    let title = value.map(str::trim).unwrap_or_default();

    if title.is_empty() {
        return Err(TITLE_REQUIRED);
    }
    if title.chars().count() > TITLE_MAX_LEN {
        return Err(TITLE_TOO_LONG);
    }

    Ok(title.to_string())
}

fn description(value: &str) -> Result<String, &'static str> {
    match value.chars().count() > DESCRIPTION_MAX_LEN {
        true => Err(DESCRIPTION_TOO_LONG),
        false => Ok(value.to_string()),
    }
}

fn status(value: Option<&str>) -> Result<TicketStatus, &'static str> {
    let value = value.ok_or(STATUS_REQUIRED)?;

    TicketStatus::from_str(value).map_err(|_| STATUS_INVALID)
}

fn priority(value: Option<&str>) -> Result<TicketPriority, &'static str> {
    let value = value.ok_or(PRIORITY_REQUIRED)?;

    TicketPriority::from_str(value).map_err(|_| PRIORITY_INVALID)
}

fn user_id(value: Option<&str>) -> Result<String, &'static str> {
    match value {
        Some(user_id) if !user_id.is_empty() => Ok(user_id.to_string()),
        _ => Err(USER_ID_REQUIRED),
    }
}
