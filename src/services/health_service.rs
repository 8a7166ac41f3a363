use crate::services::mailer::Mailer;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct HealthService {
    mailer: Arc<dyn Mailer>,
}

impl HealthService {
    #[must_use]
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }

    /// Checks mail provider connectivity.
    ///
    /// # Errors
    /// Returns a string describing the failure if the provider is unreachable.
    pub async fn check_mailer(&self) -> Result<(), String> {
        self.mailer.check().await.map_err(|e| format!("Mail transport check failed: {e}"))
    }
}
