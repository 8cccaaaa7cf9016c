//! Personal diary
//!
//! An in-memory, newest-first list of timestamped free-text entries.
//! Persistence lives in the storage module; this owns validation and
//! the entry model.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single timestamped diary entry
///
/// Immutable once created, except for deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryEntry {
    /// Opaque unique ID (millisecond timestamp, disambiguated on collision)
    pub id: String,
    /// Human-readable localized timestamp
    pub date: String,
    /// Free text
    pub content: String,
}

/// Diary validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiaryError {
    #[error("Write something before saving")]
    Empty,
}

/// The diary journal: entries ordered newest-first
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Vec<DiaryEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a journal from previously stored entries
    pub fn from_entries(entries: Vec<DiaryEntry>) -> Self {
        Self { entries }
    }

    /// All entries, newest first
    pub fn entries(&self) -> &[DiaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate and prepend a new entry
    ///
    /// Rejects empty or whitespace-only content. The stored content is
    /// kept verbatim (not trimmed); only the emptiness check trims.
    pub fn compose(&mut self, content: &str) -> Result<(), DiaryError> {
        if content.trim().is_empty() {
            return Err(DiaryError::Empty);
        }

        let now = Local::now();
        let entry = DiaryEntry {
            id: self.fresh_id(now),
            date: format_entry_date(now),
            content: content.to_string(),
        };

        self.entries.insert(0, entry);
        Ok(())
    }

    /// Remove the entry with the given ID. Returns true if one was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() < before
    }

    /// Millisecond-timestamp ID, suffixed if the journal already holds it
    fn fresh_id(&self, now: DateTime<Local>) -> String {
        let base = now.timestamp_millis().to_string();
        if !self.contains_id(&base) {
            return base;
        }
        let mut n = 1u32;
        loop {
            let candidate = format!("{}-{}", base, n);
            if !self.contains_id(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    fn contains_id(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }
}

/// Localized human-readable timestamp, e.g. "7 August 2026, 14:05"
fn format_entry_date(now: DateTime<Local>) -> String {
    now.format("%-d %B %Y, %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_into_empty_journal() {
        let mut journal = Journal::new();
        journal.compose("hello").unwrap();
        assert_eq!(journal.len(), 1);
        assert_eq!(journal.entries()[0].content, "hello");
        assert!(!journal.entries()[0].id.is_empty());
        assert!(!journal.entries()[0].date.is_empty());
    }

    #[test]
    fn test_blank_content_rejected() {
        let mut journal = Journal::new();
        assert_eq!(journal.compose(""), Err(DiaryError::Empty));
        assert_eq!(journal.compose("   \n\t "), Err(DiaryError::Empty));
        assert!(journal.is_empty(), "Blank saves must leave the journal unchanged");
    }

    #[test]
    fn test_newest_first_ordering() {
        let mut journal = Journal::new();
        journal.compose("first").unwrap();
        journal.compose("second").unwrap();
        assert_eq!(journal.entries()[0].content, "second");
        assert_eq!(journal.entries()[1].content, "first");
    }

    #[test]
    fn test_ids_unique_under_rapid_saves() {
        let mut journal = Journal::new();
        for i in 0..5 {
            journal.compose(&format!("entry {}", i)).unwrap();
        }
        let mut ids: Vec<_> = journal.entries().iter().map(|e| e.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5, "Entry IDs must be unique");
    }

    #[test]
    fn test_remove_exact_entry() {
        let mut journal = Journal::new();
        journal.compose("keep me").unwrap();
        journal.compose("delete me").unwrap();
        let victim = journal.entries()[0].id.clone();

        assert!(journal.remove(&victim));
        assert_eq!(journal.len(), 1);
        assert_eq!(journal.entries()[0].content, "keep me");

        assert!(!journal.remove("no-such-id"));
        assert_eq!(journal.len(), 1);
    }
}
