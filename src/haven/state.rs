//! App state machine
//!
//! `Haven` owns every piece of interactive state and routes all
//! mutations. Timers advance from the frame-loop delta; persistence is
//! synchronous and wholesale.

use std::time::Duration;

use rand::seq::SliceRandom;

use crate::data::tracks::Track;
use crate::data::Library;
use crate::diary::Journal;
use crate::quiz::{Quiz, StressResult};
use crate::storage::{self, Profile};

use super::{BreathEvent, Breathing, Meditation, MeditationEvent};

/// Seconds a notice stays on screen
const NOTICE_TTL: f32 = 4.0;
/// Only the freshest notices are kept
const MAX_NOTICES: usize = 3;
/// Save the profile every N breathing cycles to reduce I/O
const CYCLE_SAVE_INTERVAL: u32 = 10;

/// The five screens of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Meditate,
    Breathe,
    Quiz,
    Diary,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Home,
        Screen::Meditate,
        Screen::Breathe,
        Screen::Quiz,
        Screen::Diary,
    ];

    /// Tab bar title
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Meditate => "Meditate",
            Screen::Breathe => "Breathe",
            Screen::Quiz => "Quiz",
            Screen::Diary => "Diary",
        }
    }

    /// Position in the tab bar
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// The screen to the right, wrapping
    pub fn next(&self) -> Screen {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The screen to the left, wrapping
    pub fn prev(&self) -> Screen {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A transient user-facing notification
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    /// Seconds since the notice fired
    pub age: f32,
}

/// Notice severities, for coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// The main app struct that holds all interactive state
pub struct Haven {
    /// Currently visible screen
    screen: Screen,
    /// External app content (tracks, exercises, questions, tips)
    library: Library,
    /// The diary, newest entry first
    journal: Journal,
    /// Stress assessment state
    quiz: Quiz,
    /// Single-slot meditation timer
    meditation: Meditation,
    /// Breathing exercise cycler
    breathing: Breathing,
    /// Transient notices, oldest first
    notices: Vec<Notice>,
    /// Persistent practice profile
    profile: Profile,
    /// Tip chosen for this run
    tip: String,
    /// Set when the user asks to exit
    should_quit: bool,
}

impl Haven {
    /// Create the app state, loading persisted data
    pub fn new() -> Self {
        let library = Library::new();
        let journal = Journal::from_entries(storage::load_journal());
        let profile = storage::load_profile();
        let tip = library
            .tips
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_default();

        Self {
            screen: Screen::Home,
            library,
            journal,
            quiz: Quiz::new(),
            meditation: Meditation::new(),
            breathing: Breathing::new(),
            notices: Vec::new(),
            profile,
            tip,
            should_quit: false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn set_screen(&mut self, screen: Screen) {
        log::debug!("Screen change: {:?} -> {:?}", self.screen, screen);
        self.screen = screen;
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn meditation(&self) -> &Meditation {
        &self.meditation
    }

    /// The track belonging to the running session, if any
    pub fn session_track(&self) -> Option<&Track> {
        self.meditation
            .session()
            .and_then(|s| self.library.tracks.get(s.track))
    }

    pub fn breathing(&self) -> &Breathing {
        &self.breathing
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// The tip chosen for this run
    pub fn tip(&self) -> &str {
        &self.tip
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Request to exit the app
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // =========================================================================
    // Notices
    // =========================================================================

    /// Push a transient notice
    pub fn notify(&mut self, text: impl Into<String>, kind: NoticeKind) {
        self.notices.push(Notice {
            text: text.into(),
            kind,
            age: 0.0,
        });

        // Keep only the freshest few
        if self.notices.len() > MAX_NOTICES {
            self.notices.remove(0);
        }
    }

    // =========================================================================
    // Diary
    // =========================================================================

    /// Save a diary entry. Returns true if the draft was accepted.
    pub fn compose_entry(&mut self, content: &str) -> bool {
        match self.journal.compose(content) {
            Ok(_) => {
                self.persist_journal();
                self.profile.record_entry_written();
                self.save_profile_quiet();
                self.notify("Entry saved", NoticeKind::Success);
                self.drain_unlock_notices();
                true
            }
            Err(e) => {
                self.notify(e.to_string(), NoticeKind::Error);
                false
            }
        }
    }

    /// Delete a diary entry by ID
    pub fn delete_entry(&mut self, id: &str) {
        if self.journal.remove(id) {
            self.persist_journal();
            self.notify("Entry deleted", NoticeKind::Info);
        }
    }

    fn persist_journal(&self) {
        if let Err(e) = storage::save_journal(self.journal.entries()) {
            log::warn!("Failed to save journal: {}", e);
        }
    }

    // =========================================================================
    // Meditation
    // =========================================================================

    /// Start or stop the track at the given library index
    pub fn toggle_meditation(&mut self, index: usize) {
        let Some(track) = self.library.tracks.get(index) else {
            return;
        };
        let title = track.title.clone();
        let duration = track.duration_secs;

        match self.meditation.toggle(index, duration) {
            MeditationEvent::Started { .. } => {
                self.profile.record_session_started();
                self.save_profile_quiet();
                self.notify(format!("{} started", title), NoticeKind::Info);
            }
            MeditationEvent::Stopped { .. } => {
                self.notify("Session stopped", NoticeKind::Info);
            }
            MeditationEvent::Completed { .. } => {}
        }
    }

    // =========================================================================
    // Breathing
    // =========================================================================

    /// Start or stop the breathing exercise
    pub fn toggle_breathing(&mut self) {
        if self.breathing.toggle() {
            self.notify("Breathing exercise started — follow the circle", NoticeKind::Info);
        } else {
            self.notify("Breathing exercise stopped", NoticeKind::Info);
        }
    }

    // =========================================================================
    // Quiz
    // =========================================================================

    /// Record an answer (0-based question index, score 0-4)
    pub fn answer_quiz(&mut self, question: usize, score: u8) {
        self.quiz.answer(question, score);
    }

    /// Submit the assessment; refuses until every question is answered
    pub fn submit_quiz(&mut self) -> Option<StressResult> {
        match self.quiz.submit(&self.library.questions) {
            Some(result) => {
                self.profile.record_quiz_taken();
                self.save_profile_quiet();
                self.notify(
                    format!("Assessment complete: {} stress ({}%)", result.band.name(), result.percent),
                    NoticeKind::Success,
                );
                self.drain_unlock_notices();
                Some(result)
            }
            None => {
                self.notify("Answer every question first", NoticeKind::Error);
                None
            }
        }
    }

    /// Clear answers and the previous result
    pub fn retake_quiz(&mut self) {
        self.quiz.retake();
    }

    // =========================================================================
    // Frame update
    // =========================================================================

    /// Advance timers and notices (called every frame)
    pub fn update(&mut self, delta: Duration) {
        if let Some(MeditationEvent::Completed { track }) = self.meditation.update(delta) {
            self.on_session_completed(track);
        }

        for event in self.breathing.update(delta) {
            if event == BreathEvent::CycleCompleted {
                self.profile.record_breath_cycle();
                if self.profile.stats.breathing_cycles % CYCLE_SAVE_INTERVAL == 0 {
                    self.save_profile_quiet();
                }
                self.drain_unlock_notices();
            }
        }

        // Age out notices
        let delta_secs = delta.as_secs_f32();
        for notice in &mut self.notices {
            notice.age += delta_secs;
        }
        self.notices.retain(|n| n.age < NOTICE_TTL);
    }

    fn on_session_completed(&mut self, track_index: usize) {
        let Some(track) = self.library.tracks.get(track_index) else {
            return;
        };
        let id = track.id.clone();
        let title = track.title.clone();
        let duration = track.duration_secs;
        let track_count = self.library.tracks.len();

        self.profile
            .record_session_completed(&id, duration, track_count);
        self.save_profile_quiet();
        self.notify(format!("{} complete — well done", title), NoticeKind::Success);
        self.drain_unlock_notices();
    }

    fn save_profile_quiet(&self) {
        if let Err(e) = storage::save_profile(&self.profile) {
            log::warn!("Failed to save profile: {}", e);
        }
    }

    /// Turn freshly unlocked milestones into notices
    fn drain_unlock_notices(&mut self) {
        for id in self.profile.take_recent_unlocks() {
            if let Some(milestone) = storage::milestone_by_id(id) {
                self.notify(format!("Milestone: {}", milestone.name), NoticeKind::Success);
            }
        }
    }
}

impl Default for Haven {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_cycling_wraps() {
        assert_eq!(Screen::Home.next(), Screen::Meditate);
        assert_eq!(Screen::Diary.next(), Screen::Home);
        assert_eq!(Screen::Home.prev(), Screen::Diary);
    }

    #[test]
    fn test_notices_age_out() {
        let mut haven = Haven::new();
        haven.notify("hello", NoticeKind::Info);
        assert_eq!(haven.notices().len(), 1);

        haven.update(Duration::from_secs_f32(NOTICE_TTL + 0.1));
        assert!(haven.notices().is_empty());
    }

    #[test]
    fn test_notice_cap() {
        let mut haven = Haven::new();
        for i in 0..10 {
            haven.notify(format!("notice {}", i), NoticeKind::Info);
        }
        assert_eq!(haven.notices().len(), MAX_NOTICES);
        assert_eq!(haven.notices().last().unwrap().text, "notice 9");
    }
}
