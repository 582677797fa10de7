//! Terminal rendering for tag sets and entry lists.
//!
//! Pure string builders — no IO, no state. The tag order is fixed:
//! sentiment, emotion, stress, energy.

use std::fmt::Write;

use crate::types::{Entry, TagSet};

/// Shown instead of cards when a list view has nothing to display.
pub const NO_ENTRIES_MESSAGE: &str = "No journal entries found.";

/// Title for the recent-entries view.
pub const LAST_ENTRIES_TITLE: &str = "Last 3 Entries";

/// Title for the full-history view.
pub const ALL_ENTRIES_TITLE: &str = "All Entries";

/// Render a tag set as four labeled lines.
#[must_use]
pub fn tag_block(tags: &TagSet) -> String {
    format!(
        "Sentiment : {}\nEmotion   : {}\nStress    : {}\nEnergy    : {}",
        tags.sentiment, tags.emotion, tags.stress, tags.energy
    )
}

/// Render a titled list of entries, one card per entry, or a placeholder
/// message when the list is empty.
#[must_use]
pub fn entry_list(title: &str, entries: &[Entry]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.len()));

    if entries.is_empty() {
        let _ = write!(out, "\n{NO_ENTRIES_MESSAGE}");
        return out;
    }

    for entry in entries {
        let _ = write!(out, "\n{}", entry_card(entry));
    }
    out
}

// Timestamp heading, text body, four tags on one line.
fn entry_card(entry: &Entry) -> String {
    format!(
        "{}\n  {}\n  [{} | {} | {} | {}]\n",
        entry.timestamp,
        entry.text,
        entry.tags.sentiment,
        entry.tags.emotion,
        entry.tags.stress,
        entry.tags.energy
    )
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
