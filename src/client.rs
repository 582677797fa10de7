//! Journal API client.
//!
//! Thin HTTP wrapper over the four backend endpoints. Response bodies are
//! read as text and handed to pure `parse_*` functions so decoding is
//! testable without a network.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and malformed bodies all surface
//! as [`ApiError`] and propagate to the caller. There is deliberately no
//! retry or recovery here — one action, one round trip.

use std::time::Duration;

use serde_json::json;

use crate::types::{ApiError, Entry, TagSet};

/// Backend base address when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 5;

// =============================================================================
// VALIDATION
// =============================================================================

/// Trim entry text and reject empty input before any request is built.
///
/// This is the only client-side validated failure mode: the backend is
/// never contacted with nothing to analyze.
///
/// # Errors
///
/// Returns [`ApiError::EmptyText`] for empty or whitespace-only input.
pub fn validate_entry_text(text: &str) -> Result<&str, ApiError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ApiError::EmptyText);
    }
    Ok(trimmed)
}

// =============================================================================
// CLIENT
// =============================================================================

/// Typed client for the journal analysis backend.
pub struct JournalClient {
    http: reqwest::Client,
    base_url: String,
}

impl JournalClient {
    /// Build a client against `base_url` (trailing slashes ignored).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ClientBuild`] if the HTTP client cannot be
    /// constructed.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Analyze `text` without saving it. POST `/analyze`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EmptyText`] without issuing a request when
    /// `text` is blank, otherwise [`ApiError`] on transport, status, or
    /// parse failure.
    pub async fn analyze(&self, text: &str) -> Result<TagSet, ApiError> {
        let text = validate_entry_text(text)?;
        let body = self.post_json("/analyze", &json!({ "text": text })).await?;
        parse_analysis(&body)
    }

    /// Analyze and persist `text` as a new entry. POST `/add`.
    ///
    /// The backend answers with the full saved record, tags included.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EmptyText`] without issuing a request when
    /// `text` is blank, otherwise [`ApiError`] on transport, status, or
    /// parse failure.
    pub async fn add(&self, text: &str) -> Result<Entry, ApiError> {
        let text = validate_entry_text(text)?;
        let body = self.post_json("/add", &json!({ "text": text })).await?;
        parse_saved(&body)
    }

    /// Fetch the most recent entries (backend caps the list at three).
    /// GET `/last`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn last(&self) -> Result<Vec<Entry>, ApiError> {
        let body = self.get_json("/last").await?;
        parse_entries(&body)
    }

    /// Fetch every saved entry. GET `/all`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn all(&self) -> Result<Vec<Entry>, ApiError> {
        let body = self.get_json("/all").await?;
        parse_entries(&body)
    }

    async fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<String, ApiError> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "POST");
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Request { path: path.to_owned(), message: e.to_string() })?;
        read_body(path, response).await
    }

    async fn get_json(&self, path: &str) -> Result<String, ApiError> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Request { path: path.to_owned(), message: e.to_string() })?;
        read_body(path, response).await
    }
}

async fn read_body(path: &str, response: reqwest::Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Request { path: path.to_owned(), message: e.to_string() })?;

    if !status.is_success() {
        return Err(ApiError::Status { path: path.to_owned(), status: status.as_u16(), body });
    }
    Ok(body)
}

// =============================================================================
// WIRE TYPES + PARSING
// =============================================================================

#[derive(serde::Deserialize)]
struct AnalyzeResponse {
    analysis: TagSet,
}

#[derive(serde::Deserialize)]
struct AddResponse {
    saved: Entry,
}

#[derive(serde::Deserialize)]
struct EntriesResponse {
    entries: Vec<Entry>,
}

fn parse_analysis(json: &str) -> Result<TagSet, ApiError> {
    let response: AnalyzeResponse =
        serde_json::from_str(json).map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(response.analysis)
}

fn parse_saved(json: &str) -> Result<Entry, ApiError> {
    let response: AddResponse =
        serde_json::from_str(json).map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(response.saved)
}

fn parse_entries(json: &str) -> Result<Vec<Entry>, ApiError> {
    let response: EntriesResponse =
        serde_json::from_str(json).map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(response.entries)
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
