use thiserror::Error;

pub const INVALID_STATE_MESSAGE: &str = "Please enter a valid US state name or 2-letter code.";

/// Why a submission did not produce results.
///
/// `Display` is the text shown in the error region.
#[derive(Debug, Error, PartialEq)]
pub enum AlertsError {
    #[error("{}", INVALID_STATE_MESSAGE)]
    Validation,

    /// Non-success HTTP status; `reason` is the status' reason phrase
    #[error("API Error: {reason}")]
    Transport { status: u16, reason: String },

    /// Body was not an alerts collection
    #[error("{0}")]
    Parse(String),

    /// Request never got a response (refused, DNS, timeout)
    #[error("{0}")]
    Network(String),
}

impl From<serde_json::Error> for AlertsError {
    fn from(err: serde_json::Error) -> Self {
        AlertsError::Parse(err.to_string())
    }
}

impl From<reqwest::Error> for AlertsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AlertsError::Parse(err.to_string())
        } else {
            AlertsError::Network(err.to_string())
        }
    }
}
