use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::services::mailer::MailError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Mail provider error: {0}")]
    Mail(#[from] MailError),
    #[error("Internal server error")]
    Internal,
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Provider internals stay server-side; callers only see a generic
        // failure they can retry.
        let (status, message) = match self {
            Self::Mail(e) => {
                tracing::error!(error = %e, "Mail provider error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to send email")
            }
            Self::Internal => {
                tracing::error!("Internal server error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to send email")
            }
        };

        (status, message).into_response()
    }
}
