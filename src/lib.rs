//! moodlog — client library for a journal analysis service.
//!
//! The backend analyzes free-text journal entries and answers with four
//! tags (sentiment, emotion, stress, energy). This crate speaks its JSON
//! API and formats the results; it does not analyze or persist anything
//! itself.

pub mod client;
pub mod render;
pub mod types;

pub use client::JournalClient;
pub use types::{ApiError, Entry, TagSet};
