use thiserror::Error;

/// Errors that can occur during geocoding operations
#[derive(Error, Debug)]
pub enum GeocodingError {
    #[error("HTTP request error")]
    Transport(#[from] reqwest::Error),
    #[error("Error decoding the provider response")]
    Decode(#[from] serde_json::Error),
    #[error("No results found")]
    NoResults,
    #[error("Query quota exceeded")]
    QuotaExceeded,
    #[error("Request denied: {0}")]
    RequestDenied(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Provider error: {0}")]
    Provider(String),
    #[error("Unknown response status: {0}")]
    UnknownStatus(String),
}

impl GeocodingError {
    /// Whether repeating the same request may succeed.
    ///
    /// Only a transient provider-side failure (`UNKNOWN_ERROR`) qualifies; every other
    /// kind is terminal for the given input.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GeocodingError::Provider(_))
    }
}
