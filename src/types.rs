//! Wire types shared by the client and the renderer.
//!
//! The backend owns these shapes; the client only reads them. Tag values
//! are opaque labels — no enumerated domain is enforced on this side.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by journal API operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Entry text was empty or whitespace-only; no request was issued.
    #[error("entry text is empty; write something first")]
    EmptyText,

    /// The HTTP request could not be sent or completed.
    #[error("request to {path} failed: {message}")]
    Request { path: String, message: String },

    /// The backend returned a non-success HTTP status.
    #[error("{path} returned status {status}")]
    Status { path: String, status: u16, body: String },

    /// The response body could not be deserialized.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

// =============================================================================
// DATA MODEL
// =============================================================================

/// The four-part analysis output for a piece of text.
///
/// Order is significant for display: sentiment, emotion, stress, energy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSet {
    pub sentiment: String,
    pub emotion: String,
    pub stress: String,
    pub energy: String,
}

/// A persisted journal record. Created by the backend at save time; its
/// tag set is computed once and never changes afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Server-assigned, server-formatted timestamp string.
    pub timestamp: String,
    pub text: String,
    pub tags: TagSet,
}
