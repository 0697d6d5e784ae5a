//! Error types for kbase-core

use thiserror::Error;

use crate::validation::FieldErrors;

/// Result type alias using kbase-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the notes service
#[derive(Error, Debug)]
pub enum Error {
    /// Network or transport failure before a response arrived
    #[error("Request failed: {0}")]
    Transport(String),

    /// Non-success HTTP status
    #[error("Server returned HTTP {status}{}", detail_suffix(.detail))]
    Http { status: u16, detail: Option<String> },

    /// Response body did not have the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Invalid input rejected before any request was made
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Note form failed client-side validation
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|detail| format!(": {detail}"))
        .unwrap_or_default()
}

impl Error {
    /// Server-provided `detail` text, if the failure carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Http { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Message suitable for a toast: the server detail when present, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::InvalidInput(message) => message.clone(),
            _ => self.detail().unwrap_or(fallback).to_string(),
        }
    }
}
