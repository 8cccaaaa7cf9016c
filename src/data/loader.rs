//! RON data loader
//!
//! Loads app content from external RON files, with fallback to
//! hardcoded defaults.

use std::fs;
use std::path::Path;

use super::questions::{default_question_bank, QuestionBank};
use super::tracks::{default_exercises, default_tracks, ExerciseList, TrackList};

/// Manages all external app content
#[derive(Debug, Clone)]
pub struct Library {
    /// Meditation tracks
    pub tracks: TrackList,
    /// Relaxation exercise cards
    pub exercises: ExerciseList,
    /// Stress assessment questions
    pub questions: QuestionBank,
    /// Home screen tips
    pub tips: Vec<String>,
}

impl Library {
    /// Create a new Library, loading from files or using defaults
    pub fn new() -> Self {
        Self::load_from_assets()
    }

    /// Load content from the assets/data/ directory
    pub fn load_from_assets() -> Self {
        let base_path = Path::new("assets/data");

        // Each file falls back to its defaults independently
        Self {
            tracks: load_ron_or(base_path, "tracks.ron", default_tracks),
            exercises: load_ron_or(base_path, "exercises.ron", default_exercises),
            questions: load_ron_or(base_path, "questions.ron", default_question_bank),
            tips: load_ron_or(base_path, "tips.ron", default_tips),
        }
    }
}

impl Default for Library {
    fn default() -> Self {
        Self {
            tracks: default_tracks(),
            exercises: default_exercises(),
            questions: default_question_bank(),
            tips: default_tips(),
        }
    }
}

/// Load one RON file, falling back to the given defaults on any failure
fn load_ron_or<T, F>(base_path: &Path, file: &str, fallback: F) -> T
where
    T: serde::de::DeserializeOwned,
    F: FnOnce() -> T,
{
    let path = base_path.join(file);
    if path.exists() {
        match fs::read_to_string(&path) {
            Ok(content) => match ron::from_str(&content) {
                Ok(value) => return value,
                Err(e) => log::warn!("Failed to parse {}: {}. Using defaults.", file, e),
            },
            Err(e) => log::warn!("Failed to read {}: {}. Using defaults.", file, e),
        }
    }
    fallback()
}

/// Create the default tip list (hardcoded fallback)
pub fn default_tips() -> Vec<String> {
    [
        "Stress is a natural response. What matters is how you recover.",
        "Two quiet minutes of breathing can reset an entire afternoon.",
        "Your diary is only for you. It never leaves this device.",
        "A short practice done daily beats a long one done rarely.",
        "Notice your shoulders right now. Let them drop.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_library() {
        let library = Library::default();
        assert!(!library.tracks.is_empty(), "No tracks loaded");
        assert!(!library.exercises.exercises.is_empty(), "No exercises loaded");
        assert!(!library.questions.is_empty(), "No questions loaded");
        assert!(!library.tips.is_empty(), "No tips loaded");
    }

    #[test]
    fn test_missing_files_fall_back() {
        // No assets directory in the test environment; every file falls back
        let library = Library::load_from_assets();
        assert_eq!(library.tracks.len(), default_tracks().len());
        assert_eq!(library.questions.len(), default_question_bank().len());
    }
}
