//! Diary journal persistence
//!
//! One JSON file holding the whole entry array, read once at startup
//! and rewritten wholesale on every mutation.

use std::fs;
use std::path::PathBuf;

use crate::diary::DiaryEntry;
use super::{data_directory, StorageError};

/// Get the journal file path
pub fn journal_path() -> PathBuf {
    let mut path = data_directory();
    path.push("journal.json");
    path
}

/// Decode a stored journal, treating any parse failure as empty
pub fn decode_journal(data: &str) -> Vec<DiaryEntry> {
    match serde_json::from_str(data) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Journal is corrupt ({}), starting with an empty diary", e);
            Vec::new()
        }
    }
}

/// Load the diary journal (missing or unreadable file means empty)
pub fn load_journal() -> Vec<DiaryEntry> {
    let path = journal_path();

    if path.exists() {
        match fs::read_to_string(&path) {
            Ok(data) => {
                let entries = decode_journal(&data);
                log::info!("Loaded {} diary entries from {:?}", entries.len(), path);
                return entries;
            }
            Err(e) => {
                log::warn!("Failed to read journal: {}, starting empty", e);
            }
        }
    }

    Vec::new()
}

/// Persist the whole journal
pub fn save_journal(entries: &[DiaryEntry]) -> Result<(), StorageError> {
    let path = journal_path();

    // Ensure directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(entries)?;
    fs::write(&path, json)?;

    log::info!("Journal saved ({} entries)", entries.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupt_journal_decodes_to_empty() {
        assert!(decode_journal("not json at all").is_empty());
        assert!(decode_journal("{\"wrong\": \"shape\"}").is_empty());
        assert!(decode_journal("").is_empty());
    }

    #[test]
    fn test_valid_journal_round_trips() {
        let entries = vec![DiaryEntry {
            id: "1700000000000".to_string(),
            date: "1 January 2026, 09:00".to_string(),
            content: "hello".to_string(),
        }];
        let json = serde_json::to_string_pretty(&entries).unwrap();
        let decoded = decode_journal(&json);
        assert_eq!(decoded, entries);
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert!(decode_journal("[]").is_empty());
    }
}
