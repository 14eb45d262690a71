use thiserror::Error;

/// Errors produced by API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, TLS or protocol failure before a response was read.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status. `detail` is the
    /// message from the backend's `{"detail": "..."}` error body, falling
    /// back to the raw body or the status line.
    #[error("{detail}")]
    Backend { status: u16, detail: String },

    /// The response body could not be decoded into the expected type.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request was never sent: form input failed client-side coercion
    /// or validation. The message is user-facing.
    #[error("{0}")]
    Invalid(String),
}

impl ApiError {
    /// The backend-supplied error message, if the failure came from the
    /// backend. The list pages use this for their error banners, falling
    /// back to a fixed per-page string otherwise.
    pub fn backend_detail(&self) -> Option<&str> {
        match self {
            ApiError::Backend { detail, .. } => Some(detail),
            _ => None,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ApiError>;
