//! Error types for the Linode API client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use serde::Deserialize;
use thiserror::Error;

/// The main error type for the Linode API client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Request cancelled")]
    Cancelled,

    // ============================================================================
    // API Errors
    // ============================================================================
    #[error("[{code}] {message}")]
    Api { code: u16, message: String },

    // ============================================================================
    // Serialization Errors
    // ============================================================================
    #[error("Failed to serialize or parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    // ============================================================================
    // Caller Errors
    // ============================================================================
    #[error("Invalid number of options: {count}")]
    InvalidOptions { count: usize },

    #[error("Invalid API path '{path}': contains dot segments")]
    InvalidPath { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an API error
    pub fn api(code: u16, message: impl Into<String>) -> Self {
        Self::Api {
            code,
            message: message.into(),
        }
    }

    /// Build an API error from a non-success response body.
    ///
    /// Understands the `{"errors": [{"reason": .., "field": ..}]}` envelope and
    /// falls back to the raw body, then to the canonical status reason.
    pub fn from_response_body(status: reqwest::StatusCode, body: &[u8]) -> Self {
        let message = match serde_json::from_slice::<ErrorEnvelope>(body) {
            Ok(envelope) if !envelope.errors.is_empty() => envelope
                .errors
                .iter()
                .map(ApiErrorReason::to_string)
                .collect::<Vec<_>>()
                .join("; "),
            _ => {
                let text = String::from_utf8_lossy(body).trim().to_string();
                if text.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                } else {
                    text
                }
            }
        };

        Self::api(status.as_u16(), message)
    }

    /// HTTP status code of an API error, if this is one
    pub fn code(&self) -> Option<u16> {
        match self {
            Error::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Check if this error is a 404 from the API
    pub fn is_not_found(&self) -> bool {
        self.code() == Some(404)
    }
}

/// Error envelope returned by the API for non-success statuses
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    errors: Vec<ApiErrorReason>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorReason {
    reason: String,
    #[serde(default)]
    field: Option<String>,
}

impl std::fmt::Display for ApiErrorReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.field {
            Some(field) if !field.is_empty() => write!(f, "[{field}] {}", self.reason),
            _ => f.write_str(&self.reason),
        }
    }
}

/// Result type alias for the Linode API client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
