//! Note domain model.
//!
//! # Responsibility
//! - Define the immutable title/content/timestamp record.
//! - Provide the range and keyword predicates used by notebook queries.
//!
//! # Invariants
//! - Fields never change after construction; there are no setters.
//! - `timestamp_ms` is captured at construction and is not caller-settable
//!   through `new`.
//! - Title carries no uniqueness guarantee; duplicate titles are legal.

use crate::clock::{Clock, SystemClock};
use serde::{Deserialize, Serialize};

/// Immutable record of a single note.
///
/// Fields stay private so a shared reference into a notebook can never be
/// used to rewrite stored state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    title: String,
    content: String,
    /// Creation instant in Unix epoch milliseconds.
    timestamp_ms: i64,
}

impl Note {
    /// Creates a note stamped with the current wall-clock time.
    ///
    /// Any text is accepted, including empty strings; construction cannot
    /// fail.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::recorded_at(title, content, SystemClock.now_millis())
    }

    /// Creates a note with a caller-provided creation instant.
    ///
    /// Used by `Notebook` when an injected clock owns time, and by import
    /// paths where the instant already exists externally.
    pub fn recorded_at(
        title: impl Into<String>,
        content: impl Into<String>,
        timestamp_ms: i64,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            timestamp_ms,
        }
    }

    /// Returns the note title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note body text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the creation instant in epoch milliseconds.
    pub fn timestamp_ms(&self) -> i64 {
        self.timestamp_ms
    }

    /// Returns whether the creation instant lies in `[start_ms, end_ms]`.
    ///
    /// Both bounds are inclusive. An inverted interval matches nothing.
    pub fn is_within(&self, start_ms: i64, end_ms: i64) -> bool {
        self.timestamp_ms >= start_ms && self.timestamp_ms <= end_ms
    }

    /// Returns whether any keyword occurs as a case-sensitive substring of
    /// the title or the content.
    ///
    /// An empty keyword set matches nothing: the contract requires at least
    /// one keyword hit.
    pub fn mentions_any<S: AsRef<str>>(&self, keywords: &[S]) -> bool {
        keywords.iter().any(|keyword| {
            let keyword = keyword.as_ref();
            self.title.contains(keyword) || self.content.contains(keyword)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Note;

    #[test]
    fn accessors_return_construction_values() {
        let note = Note::recorded_at("Test Note", "This is a test note.", 1_700_000_000_000);

        assert_eq!(note.title(), "Test Note");
        assert_eq!(note.content(), "This is a test note.");
        assert_eq!(note.timestamp_ms(), 1_700_000_000_000);
    }

    #[test]
    fn empty_title_and_content_are_accepted() {
        let note = Note::recorded_at("", "", 0);
        assert_eq!(note.title(), "");
        assert_eq!(note.content(), "");
    }

    #[test]
    fn is_within_includes_both_bounds() {
        let note = Note::recorded_at("t", "c", 1_000);

        assert!(note.is_within(1_000, 2_000));
        assert!(note.is_within(0, 1_000));
        assert!(note.is_within(1_000, 1_000));
        assert!(!note.is_within(1_001, 2_000));
        assert!(!note.is_within(0, 999));
    }

    #[test]
    fn inverted_interval_matches_nothing() {
        let note = Note::recorded_at("t", "c", 1_000);
        assert!(!note.is_within(2_000, 0));
    }

    #[test]
    fn mentions_any_checks_title_and_content_case_sensitively() {
        let note = Note::recorded_at("Shopping list", "milk and bread", 0);

        assert!(note.mentions_any(&["Shopping"]));
        assert!(note.mentions_any(&["bread"]));
        assert!(note.mentions_any(&["missing", "milk"]));
        assert!(!note.mentions_any(&["shopping"]));
        assert!(!note.mentions_any(&["BREAD"]));
    }

    #[test]
    fn empty_keyword_set_never_matches() {
        let note = Note::recorded_at("anything", "at all", 0);
        assert!(!note.mentions_any::<&str>(&[]));
    }
}
