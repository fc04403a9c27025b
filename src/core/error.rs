//! Error types for the configuration UI

use thiserror::Error;

/// Result type for device client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors from talking to the device's configuration endpoints
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("invalid device URL: {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("device returned {code} {text}")]
    Status { code: u16, text: String },

    #[error("invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Text surfaced to the user when a request fails
    ///
    /// For HTTP failures this is the bare status text, matching what the
    /// device page shows in its alert dialog.
    pub fn status_text(&self) -> String {
        match self {
            ClientError::Status { text, .. } => text.clone(),
            other => other.to_string(),
        }
    }
}
