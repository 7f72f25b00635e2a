//! Error types for the metrics check.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while resolving credentials or querying Supabase.
#[derive(Debug, Error)]
pub enum CheckError {
    /// URL or service key missing from the merged environment.
    #[error("Missing Supabase creds")]
    MissingCredentials,

    /// Transport-level failure (DNS, connect, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Supabase answered with a non-success status.
    #[error("Supabase returned {status}: {body}")]
    Service { status: StatusCode, body: String },

    /// Response body was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
