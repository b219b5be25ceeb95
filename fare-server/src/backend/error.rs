//! Fare backend error types.

/// Errors from the fare backend HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-2xx status with its `{ error }` body
    #[error("backend error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a response body
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Response decoded but violated the documented shape
    #[error("invalid backend payload: {message}")]
    InvalidPayload { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = BackendError::Api {
            status: 404,
            message: "route not found".into(),
        };
        assert_eq!(err.to_string(), "backend error 404: route not found");

        let err = BackendError::InvalidPayload {
            message: "stop seq must be positive".into(),
        };
        assert!(err.to_string().contains("invalid backend payload"));
    }
}
