use crate::api::schemas::send::SendRequest;
use crate::domain::Submission;

/// What a submission attempt resolved to, from the form's point of view.
///
/// A 500 from the relay and an unreachable relay are deliberately collapsed
/// into the same outcome; the form can only offer a retry either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    Failed,
}

/// HTTP client for the relay's single route.
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RelayClient {
    /// `base_url` is the relay root, e.g. `http://localhost:5000`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/send", base_url.trim_end_matches('/')),
        }
    }

    /// Posts one submission to the relay.
    pub async fn submit(&self, submission: &Submission) -> SubmitOutcome {
        let body = SendRequest {
            name: submission.name().to_owned(),
            email: submission.email().to_owned(),
            message: submission.message().to_owned(),
        };

        match self.http.post(&self.endpoint).json(&body).send().await {
            Ok(response) if response.status().is_success() => SubmitOutcome::Delivered,
            Ok(response) => {
                tracing::debug!(status = %response.status(), "relay rejected the submission");
                SubmitOutcome::Failed
            }
            Err(e) => {
                tracing::debug!(error = %e, "relay unreachable");
                SubmitOutcome::Failed
            }
        }
    }
}
