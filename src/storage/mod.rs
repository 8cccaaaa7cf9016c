//! Durable storage
//!
//! Handles the persisted diary journal and practice profile.

pub mod journal;
pub mod profile;

use std::path::PathBuf;

use thiserror::Error;

/// Storage error types
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Base directory for all persisted state
pub fn data_directory() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "stillhaven", "Stillhaven") {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        // Fallback to current directory
        PathBuf::from(".")
    }
}

pub use journal::{decode_journal, journal_path, load_journal, save_journal};
pub use profile::{
    all_milestones, load_profile, milestone_by_id, save_profile, Milestone, PracticeStats,
    Profile, ProfileSettings,
};
