use serde::{Deserialize, Serialize};

/// Body of `POST /send`.
///
/// Absent fields default to empty text and propagate into the outbound mail
/// unchanged; the relay does not re-validate what the form already checked.
#[derive(Debug, Serialize, Deserialize)]
pub struct SendRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}
