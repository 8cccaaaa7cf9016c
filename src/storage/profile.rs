//! Practice profile and persistent progress
//!
//! Tracks practice statistics and milestones across app runs.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{data_directory, StorageError};

/// Current profile version for compatibility
const PROFILE_VERSION: u32 = 1;

/// Persistent practice profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Version for compatibility checking
    pub version: u32,
    /// Practice statistics
    pub stats: PracticeStats,
    /// Unlocked milestones
    pub milestones: HashSet<String>,
    /// Settings preferences
    pub settings: ProfileSettings,
    /// Milestones unlocked since the last drain, for notices
    #[serde(skip)]
    recent_unlocks: Vec<&'static str>,
}

/// Practice statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PracticeStats {
    /// Diary entries written
    pub entries_written: u32,
    /// Meditation sessions started
    pub sessions_started: u32,
    /// Meditation sessions completed
    pub sessions_completed: u32,
    /// Total completed meditation time in seconds
    pub meditation_seconds: u64,
    /// Full breathing cycles completed
    pub breathing_cycles: u32,
    /// Stress assessments taken
    pub quizzes_taken: u32,
    /// IDs of tracks completed at least once
    pub completed_tracks: HashSet<String>,
}

/// Profile settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSettings {
    /// Show the rotating tip on the home screen
    pub show_tips: bool,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self { show_tips: true }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            version: PROFILE_VERSION,
            stats: PracticeStats::default(),
            milestones: HashSet::new(),
            settings: ProfileSettings::default(),
            recent_unlocks: Vec::new(),
        }
    }
}

impl Profile {
    /// Create a new profile
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a saved diary entry
    pub fn record_entry_written(&mut self) {
        self.stats.entries_written += 1;
        if self.stats.entries_written >= 1 {
            self.unlock_milestone("first_entry");
        }
        if self.stats.entries_written >= 10 {
            self.unlock_milestone("ten_entries");
        }
    }

    /// Record a meditation session start
    pub fn record_session_started(&mut self) {
        self.stats.sessions_started += 1;
    }

    /// Record a completed meditation session
    pub fn record_session_completed(
        &mut self,
        track_id: &str,
        duration_secs: u32,
        track_count: usize,
    ) {
        self.stats.sessions_completed += 1;
        self.stats.meditation_seconds += u64::from(duration_secs);
        self.stats.completed_tracks.insert(track_id.to_string());

        self.unlock_milestone("first_session");
        if track_count > 0 && self.stats.completed_tracks.len() >= track_count {
            self.unlock_milestone("all_tracks");
        }
    }

    /// Record one full breathing cycle
    pub fn record_breath_cycle(&mut self) {
        self.stats.breathing_cycles += 1;
        if self.stats.breathing_cycles >= 100 {
            self.unlock_milestone("hundred_cycles");
        }
    }

    /// Record a completed stress assessment
    pub fn record_quiz_taken(&mut self) {
        self.stats.quizzes_taken += 1;
        self.unlock_milestone("first_quiz");
    }

    /// Check if a milestone is unlocked
    pub fn has_milestone(&self, id: &str) -> bool {
        self.milestones.contains(id)
    }

    /// Unlock a milestone, returning true if it was newly unlocked
    pub fn unlock_milestone(&mut self, id: &'static str) -> bool {
        if self.milestones.insert(id.to_string()) {
            log::info!("Milestone unlocked: {}", id);
            self.recent_unlocks.push(id);
            true
        } else {
            false
        }
    }

    /// Take the milestones unlocked since the last call
    pub fn take_recent_unlocks(&mut self) -> Vec<&'static str> {
        std::mem::take(&mut self.recent_unlocks)
    }
}

// ============================================================================
// Profile Storage
// ============================================================================

/// Get the profile file path
pub fn profile_path() -> PathBuf {
    let mut path = data_directory();
    path.push("profile.json");
    path
}

/// Load the practice profile (or create default)
pub fn load_profile() -> Profile {
    let path = profile_path();

    if path.exists() {
        match fs::read_to_string(&path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(profile) => {
                    log::info!("Profile loaded from {:?}", path);
                    return profile;
                }
                Err(e) => {
                    log::warn!("Failed to parse profile: {}, creating new", e);
                }
            },
            Err(e) => {
                log::warn!("Failed to read profile: {}, creating new", e);
            }
        }
    }

    log::info!("Creating new profile");
    Profile::new()
}

/// Save the practice profile
pub fn save_profile(profile: &Profile) -> Result<(), StorageError> {
    let path = profile_path();

    // Ensure directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(profile)?;
    fs::write(&path, json)?;

    log::info!("Profile saved to {:?}", path);
    Ok(())
}

// ============================================================================
// Milestone Definitions
// ============================================================================

/// Milestone definition
#[derive(Debug, Clone)]
pub struct Milestone {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Get all milestone definitions
pub fn all_milestones() -> Vec<Milestone> {
    vec![
        Milestone {
            id: "first_entry",
            name: "First Words",
            description: "Write your first diary entry",
        },
        Milestone {
            id: "ten_entries",
            name: "Faithful Scribe",
            description: "Write ten diary entries",
        },
        Milestone {
            id: "first_session",
            name: "First Stillness",
            description: "Complete a meditation session",
        },
        Milestone {
            id: "all_tracks",
            name: "Well Travelled",
            description: "Complete every meditation track",
        },
        Milestone {
            id: "hundred_cycles",
            name: "Steady Breath",
            description: "Complete one hundred breathing cycles",
        },
        Milestone {
            id: "first_quiz",
            name: "Self Aware",
            description: "Complete the stress assessment",
        },
    ]
}

/// Look up a milestone definition by ID
pub fn milestone_by_id(id: &str) -> Option<Milestone> {
    all_milestones().into_iter().find(|m| m.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_entry_milestone() {
        let mut profile = Profile::new();
        profile.record_entry_written();
        assert!(profile.has_milestone("first_entry"));
        assert!(!profile.has_milestone("ten_entries"));
        assert_eq!(profile.take_recent_unlocks(), vec!["first_entry"]);
        assert!(profile.take_recent_unlocks().is_empty(), "Drain must be one-shot");
    }

    #[test]
    fn test_milestones_unlock_once() {
        let mut profile = Profile::new();
        assert!(profile.unlock_milestone("first_quiz"));
        assert!(!profile.unlock_milestone("first_quiz"));
    }

    #[test]
    fn test_all_tracks_milestone() {
        let mut profile = Profile::new();
        profile.record_session_completed("breath", 600, 3);
        profile.record_session_completed("body_scan", 900, 3);
        assert!(!profile.has_milestone("all_tracks"));
        profile.record_session_completed("mindfulness", 1200, 3);
        assert!(profile.has_milestone("all_tracks"));
        assert_eq!(profile.stats.meditation_seconds, 2700);
    }

    #[test]
    fn test_repeat_completion_counts_once_for_tracks() {
        let mut profile = Profile::new();
        profile.record_session_completed("breath", 600, 3);
        profile.record_session_completed("breath", 600, 3);
        assert_eq!(profile.stats.sessions_completed, 2);
        assert_eq!(profile.stats.completed_tracks.len(), 1);
    }

    #[test]
    fn test_profile_serde_round_trip() {
        let mut profile = Profile::new();
        profile.record_quiz_taken();
        let json = serde_json::to_string(&profile).unwrap();
        let restored: Profile = serde_json::from_str(&json).unwrap();
        assert!(restored.has_milestone("first_quiz"));
        assert_eq!(restored.stats.quizzes_taken, 1);
    }

    #[test]
    fn test_milestone_definitions_cover_unlocks() {
        for id in [
            "first_entry",
            "ten_entries",
            "first_session",
            "all_tracks",
            "hundred_cycles",
            "first_quiz",
        ] {
            assert!(milestone_by_id(id).is_some(), "Missing definition for {}", id);
        }
    }
}
