//! Meditation tracks and relaxation exercises
//!
//! These are loaded from RON files and drive the Meditate and Breathe
//! screens.

use serde::{Deserialize, Serialize};

/// A guided meditation track with a fixed duration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Unique track ID for reference
    pub id: String,
    /// Display title
    pub title: String,
    /// Short description shown in the track list
    pub description: String,
    /// Total session length in seconds
    pub duration_secs: u32,
    /// Static guidance line shown while the session runs
    pub guidance: String,
}

impl Track {
    /// Whole minutes, for display
    pub fn minutes(&self) -> u32 {
        self.duration_secs / 60
    }
}

/// Collection of meditation tracks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackList {
    pub tracks: Vec<Track>,
}

impl TrackList {
    /// Find a track by ID
    pub fn find(&self, id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Get a track by list index
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

/// A relaxation exercise shown as a reference card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Display title
    pub title: String,
    /// One-line summary
    pub description: String,
    /// Step-by-step instructions
    pub steps: Vec<String>,
}

/// Collection of relaxation exercises
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExerciseList {
    pub exercises: Vec<Exercise>,
}

/// Create the default track library (hardcoded fallback)
pub fn default_tracks() -> TrackList {
    TrackList {
        tracks: vec![
            Track {
                id: "breath".to_string(),
                title: "Breath Meditation".to_string(),
                description: "Calm the mind through conscious breathing".to_string(),
                duration_secs: 600,
                guidance: "Settle into a comfortable position and let your attention rest on the breath.".to_string(),
            },
            Track {
                id: "body_scan".to_string(),
                title: "Body Scan".to_string(),
                description: "Release muscular tension and relax".to_string(),
                duration_secs: 900,
                guidance: "Move your attention slowly from the crown of your head down to your toes.".to_string(),
            },
            Track {
                id: "mindfulness".to_string(),
                title: "Mindfulness".to_string(),
                description: "Practice being present in the moment".to_string(),
                duration_secs: 1200,
                guidance: "Notice sounds, sensations and thoughts as they arise, without holding on.".to_string(),
            },
        ],
    }
}

/// Create the default exercise cards (hardcoded fallback)
pub fn default_exercises() -> ExerciseList {
    ExerciseList {
        exercises: vec![
            Exercise {
                title: "Progressive Relaxation".to_string(),
                description: "Tense and release each muscle group in turn".to_string(),
                steps: vec![
                    "Tense your shoulders for five seconds, then let go".to_string(),
                    "Repeat for your arms, hands, legs and feet".to_string(),
                    "Notice the warmth where the tension used to be".to_string(),
                ],
            },
            Exercise {
                title: "Visualization".to_string(),
                description: "Build a mental image of a calm place".to_string(),
                steps: vec![
                    "Close your eyes and picture somewhere you feel safe".to_string(),
                    "Add detail: light, sounds, temperature, smells".to_string(),
                    "Stay there for a few minutes before returning".to_string(),
                ],
            },
            Exercise {
                title: "5-4-3-2-1 Grounding".to_string(),
                description: "A technique for returning to the present moment".to_string(),
                steps: vec![
                    "Name five things you can see".to_string(),
                    "Four things you can touch".to_string(),
                    "Three things you can hear".to_string(),
                    "Two things you can smell".to_string(),
                    "One thing you can taste".to_string(),
                ],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tracks() {
        let tracks = default_tracks();
        assert_eq!(tracks.len(), 3, "Expected three default tracks");
        assert!(tracks.find("breath").is_some());
        for track in &tracks.tracks {
            assert!(track.duration_secs > 0, "Track {} has no duration", track.id);
        }
    }

    #[test]
    fn test_track_minutes() {
        let tracks = default_tracks();
        let breath = tracks.find("breath").unwrap();
        assert_eq!(breath.minutes(), 10);
    }
}
