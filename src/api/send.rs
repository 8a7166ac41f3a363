use crate::api::AppState;
use crate::api::schemas::send::SendRequest;
use crate::error::Result;
use axum::{Json, extract::State, response::IntoResponse};

/// Relays a contact-form submission to the configured inbox.
///
/// # Errors
/// Returns `AppError::Mail` if the mail provider rejects or fails the send;
/// the caller sees a plain 500 without provider detail.
pub async fn send_submission(
    State(state): State<AppState>,

    Json(request): Json<SendRequest>,
) -> Result<impl IntoResponse> {
    state.relay_service.relay(&request.name, &request.email, &request.message).await?;

    Ok("Message sent successfully!")
}
