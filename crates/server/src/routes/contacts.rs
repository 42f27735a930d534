//! Contact CRUD route handlers.
//!
//! The collection lives at `/todos` for compatibility with the existing
//! front-end. Bodies are [`ContactInput`] JSON; responses are [`Contact`] JSON.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::instrument;

use contact_book_core::{Contact, ContactId, ContactInput, NewContact};

use crate::error::{AppError, Result};
use crate::state::AppState;

const NOT_FOUND_MESSAGE: &str = "Contact not found";

/// Turn the raw body into validated contact fields.
///
/// Malformed JSON and a missing `Content-Type` are reported as 400 like any
/// other invalid payload.
fn validate_body(
    payload: std::result::Result<Json<ContactInput>, JsonRejection>,
) -> Result<NewContact> {
    let Json(input) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    Ok(input.validate()?)
}

/// List every contact.
///
/// GET /todos
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Contact>>> {
    let contacts = state
        .contacts()
        .list_all()
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Error fetching contacts"))?;

    Ok(Json(contacts))
}

/// Create a contact.
///
/// POST /todos
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ContactInput>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let fields = validate_body(payload)
        .inspect_err(|e| tracing::warn!(error = %e, "Error creating contact"))?;

    let contact = state
        .contacts()
        .create(fields)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Error creating contact"))?;

    tracing::info!(contact_id = %contact.id, "Contact created");
    Ok((StatusCode::CREATED, Json(contact)))
}

/// Replace every field of a contact.
///
/// PUT /todos/{id}
///
/// The body is validated with the same rules as create. An id that is not a
/// UUID cannot exist, so it is reported as not found.
#[instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<ContactInput>, JsonRejection>,
) -> Result<Json<Contact>> {
    let fields = validate_body(payload)
        .inspect_err(|e| tracing::warn!(error = %e, "Error updating contact"))?;

    let Some(id) = ContactId::parse(&id) else {
        tracing::warn!("Contact id is not a valid identifier");
        return Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()));
    };

    let updated = state
        .contacts()
        .update(id, fields)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Error updating contact"))?;

    updated.map(Json).ok_or_else(|| {
        tracing::warn!(contact_id = %id, "Contact not found");
        AppError::NotFound(NOT_FOUND_MESSAGE.to_string())
    })
}

/// Delete a contact.
///
/// DELETE /todos/{id}
///
/// Always 204 on success, whether or not the contact existed.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let Some(id) = ContactId::parse(&id) else {
        return Ok(StatusCode::NO_CONTENT);
    };

    state
        .contacts()
        .delete(id)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Error deleting contact"))?;

    Ok(StatusCode::NO_CONTENT)
}
