//! Error types and error handling
//!
//! Contact form validation failures are not errors; they travel as
//! [`ValidationErrors`](crate::forms::ValidationErrors). This type covers
//! everything else: configuration, unknown fields, rendering and recording.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Crate error type
#[derive(Debug, Error)]
pub enum PortfolioError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// A field name outside the contact form's fixed set
    #[error("Unknown contact field: {0}")]
    UnknownField(String),

    /// Page template failed to render
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// A submission sink failed to record an accepted message
    #[error("Submission error: {0}")]
    Submission(String),

    /// JSON encoding failed (event payloads)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error (binding the listener, serving)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PortfolioError {
    /// HTTP status this error maps to
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::UnknownField(_) => StatusCode::NOT_FOUND,
            Self::Config(_)
            | Self::Template(_)
            | Self::Submission(_)
            | Self::Serialization(_)
            | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PortfolioError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
            (status, "Something went wrong. Please try again later.").into_response()
        } else {
            (status, self.to_string()).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_field_is_not_found() {
        let err = PortfolioError::UnknownField("phone".into());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Unknown contact field: phone");
    }

    #[test]
    fn test_server_errors_hide_details() {
        let response = PortfolioError::Submission("disk full".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_io_error_converts() {
        let err: PortfolioError = std::io::Error::other("boom").into();
        assert!(matches!(err, PortfolioError::Io(_)));
        assert!(err.to_string().contains("boom"));
    }
}
