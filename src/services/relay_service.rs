use crate::services::mailer::{MailError, Mailer, OutboundEmail};
use std::sync::Arc;

/// Forwards contact-form submissions to the configured inbox.
#[derive(Clone, Debug)]
pub struct RelayService {
    mailer: Arc<dyn Mailer>,
    recipient: String,
}

impl RelayService {
    #[must_use]
    pub fn new(mailer: Arc<dyn Mailer>, recipient: String) -> Self {
        Self { mailer, recipient }
    }

    /// Relays one submission as an outbound email.
    ///
    /// The sender is set to the visitor-supplied address (reply-to-style
    /// forwarding, not an authenticated send-as) and the body carries the
    /// message verbatim. Exactly one delivery attempt is made.
    ///
    /// # Errors
    /// Returns `MailError` if the provider rejects or fails the send.
    #[tracing::instrument(err(level = "warn"), skip(self, email, message), fields(from = %email))]
    pub async fn relay(&self, name: &str, email: &str, message: &str) -> Result<(), MailError> {
        let outbound = OutboundEmail {
            from: email.to_owned(),
            to: self.recipient.clone(),
            subject: format!("New Contact: {name}"),
            text: message.to_owned(),
        };

        self.mailer.send(&outbound).await?;
        tracing::info!(to = %self.recipient, "submission relayed");

        Ok(())
    }
}
