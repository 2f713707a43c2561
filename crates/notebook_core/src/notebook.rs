//! Notebook collection and its operations.
//!
//! # Responsibility
//! - Own the insertion-ordered note sequence.
//! - Provide add/remove/list and the range+keyword query.
//!
//! # Invariants
//! - Notes keep insertion order; no operation reorders the sequence.
//! - `remove_note` removes every exact title match, not just the first.
//! - Absence is an empty result, never an error: every operation is total.
//! - Structural mutation happens only through `add_note`/`remove_note`.

use crate::clock::{Clock, SystemClock};
use crate::model::note::Note;

/// In-memory ordered collection of notes.
///
/// The clock is injected so tests can pin time; the default is the wall
/// clock. A notebook is used by a single logical owner, so mutation goes
/// through `&mut self` and no internal locking exists.
#[derive(Debug, Default)]
pub struct Notebook<C: Clock = SystemClock> {
    notes: Vec<Note>,
    clock: C,
}

impl Notebook<SystemClock> {
    /// Creates an empty notebook stamping notes with the wall clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> Notebook<C> {
    /// Creates an empty notebook using the provided time source.
    pub fn with_clock(clock: C) -> Self {
        Self {
            notes: Vec::new(),
            clock,
        }
    }

    /// Appends a new note stamped with the clock's current instant.
    ///
    /// Any text is accepted, including empty strings and duplicate titles;
    /// the operation cannot fail.
    pub fn add_note(&mut self, title: impl Into<String>, content: impl Into<String>) {
        let note = Note::recorded_at(title, content, self.clock.now_millis());
        self.notes.push(note);
    }

    /// Removes every note whose title equals `title` exactly.
    ///
    /// Matching is case-sensitive. Duplicate titles are all removed in one
    /// call. A miss is a silent no-op.
    pub fn remove_note(&mut self, title: &str) {
        self.notes.retain(|note| note.title() != title);
    }

    /// Returns all notes in insertion order.
    ///
    /// The slice is a read view; note fields are private, so callers cannot
    /// alter stored state through it.
    pub fn all_notes(&self) -> &[Note] {
        &self.notes
    }

    /// Returns the notes whose timestamp lies in `[start_ms, end_ms]` and
    /// which mention at least one keyword.
    ///
    /// Linear scan; insertion order is preserved in the result. An empty
    /// notebook, an inverted interval, or an empty keyword list all yield an
    /// empty result rather than an error.
    pub fn notes_in_range_with_keywords<S: AsRef<str>>(
        &self,
        start_ms: i64,
        end_ms: i64,
        keywords: &[S],
    ) -> Vec<Note> {
        self.notes
            .iter()
            .filter(|note| note.is_within(start_ms, end_ms) && note.mentions_any(keywords))
            .cloned()
            .collect()
    }

    /// Returns the number of stored notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns whether the notebook holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Notebook;
    use crate::clock::FixedClock;

    #[test]
    fn new_notebook_is_empty() {
        let notebook = Notebook::new();
        assert!(notebook.is_empty());
        assert_eq!(notebook.len(), 0);
        assert!(notebook.all_notes().is_empty());
    }

    #[test]
    fn added_note_carries_clock_instant() {
        let mut notebook = Notebook::with_clock(FixedClock::at(42));
        notebook.add_note("t", "c");

        assert_eq!(notebook.all_notes()[0].timestamp_ms(), 42);
    }

    #[test]
    fn remove_note_is_case_sensitive() {
        let mut notebook = Notebook::with_clock(FixedClock::at(0));
        notebook.add_note("Groceries", "milk");

        notebook.remove_note("groceries");
        assert_eq!(notebook.len(), 1);

        notebook.remove_note("Groceries");
        assert!(notebook.is_empty());
    }
}
