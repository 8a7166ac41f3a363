use async_trait::async_trait;
use thiserror::Error;

pub mod smtp;

pub use smtp::SmtpMailer;

/// One fully-assembled email, ready to hand to a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}

#[derive(Error, Debug)]
pub enum MailError {
    #[error("Invalid mail address: {0}")]
    InvalidAddress(String),
    #[error("Failed to build message: {0}")]
    Build(String),
    #[error("SMTP transport error: {0}")]
    Transport(String),
}

#[async_trait]
pub trait Mailer: Send + Sync + std::fmt::Debug {
    /// Makes exactly one delivery attempt for the given email.
    ///
    /// # Errors
    /// Returns `MailError::InvalidAddress` if the provider cannot parse an
    /// address, `MailError::Transport` if the provider rejects or fails the
    /// send.
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;

    /// Verifies connectivity to the provider without sending anything.
    ///
    /// # Errors
    /// Returns `MailError::Transport` if the provider is unreachable.
    async fn check(&self) -> Result<(), MailError>;
}
