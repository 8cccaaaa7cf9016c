//! Meditation session timer
//!
//! A single-slot countdown driven by the frame-loop delta. The session
//! lives in one `Option`: replacing it is the cancellation, so two
//! ticking sessions can never coexist.

use std::time::Duration;

/// Accumulates frame deltas and emits whole-second ticks
#[derive(Debug, Clone)]
pub struct SecondTicker {
    since_last_tick: f32,
}

impl SecondTicker {
    pub fn new() -> Self {
        Self { since_last_tick: 0.0 }
    }

    /// Update and return how many whole seconds elapsed
    pub fn update(&mut self, delta: Duration) -> u32 {
        self.since_last_tick += delta.as_secs_f32();
        let mut ticks = 0;
        while self.since_last_tick >= 1.0 {
            self.since_last_tick -= 1.0;
            ticks += 1;
        }
        ticks
    }
}

impl Default for SecondTicker {
    fn default() -> Self {
        Self::new()
    }
}

/// One active meditation session
#[derive(Debug, Clone)]
pub struct Session {
    /// Index into the track library
    pub track: usize,
    /// Seconds elapsed so far; never exceeds `duration_secs`
    pub elapsed: u32,
    /// Total length of the session
    pub duration_secs: u32,
    ticker: SecondTicker,
}

impl Session {
    fn new(track: usize, duration_secs: u32) -> Self {
        Self {
            track,
            elapsed: 0,
            duration_secs,
            ticker: SecondTicker::new(),
        }
    }

    /// Seconds left until completion
    pub fn remaining_secs(&self) -> u32 {
        self.duration_secs.saturating_sub(self.elapsed)
    }

    /// Completion ratio in 0.0..=1.0, for gauges
    pub fn progress(&self) -> f64 {
        if self.duration_secs == 0 {
            return 1.0;
        }
        f64::from(self.elapsed) / f64::from(self.duration_secs)
    }
}

/// State changes reported to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeditationEvent {
    Started { track: usize },
    Stopped { track: usize },
    Completed { track: usize },
}

/// The meditation timer: Idle, or exactly one running session
#[derive(Debug, Clone, Default)]
pub struct Meditation {
    session: Option<Session>,
}

impl Meditation {
    pub fn new() -> Self {
        Self::default()
    }

    /// The running session, if any
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// True if the given track is the one currently running
    pub fn is_running(&self, track: usize) -> bool {
        self.session.as_ref().is_some_and(|s| s.track == track)
    }

    /// Start or stop a track
    ///
    /// Toggling the running track stops it; any other track replaces
    /// whatever was running with a fresh session at zero.
    pub fn toggle(&mut self, track: usize, duration_secs: u32) -> MeditationEvent {
        if self.is_running(track) {
            self.session = None;
            return MeditationEvent::Stopped { track };
        }
        self.session = Some(Session::new(track, duration_secs));
        MeditationEvent::Started { track }
    }

    /// Stop whatever is running
    pub fn stop(&mut self) -> Option<MeditationEvent> {
        self.session
            .take()
            .map(|s| MeditationEvent::Stopped { track: s.track })
    }

    /// Advance the session by the frame delta
    ///
    /// Emits `Completed` exactly once: the session slot is consumed
    /// before the event is returned.
    pub fn update(&mut self, delta: Duration) -> Option<MeditationEvent> {
        let session = self.session.as_mut()?;
        let ticks = session.ticker.update(delta);
        if ticks == 0 {
            return None;
        }

        session.elapsed = (session.elapsed + ticks).min(session.duration_secs);
        if session.elapsed >= session.duration_secs {
            let track = session.track;
            self.session = None;
            return Some(MeditationEvent::Completed { track });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn test_second_ticker_accumulates() {
        let mut ticker = SecondTicker::new();
        assert_eq!(ticker.update(Duration::from_millis(400)), 0);
        assert_eq!(ticker.update(Duration::from_millis(700)), 1);
        assert_eq!(ticker.update(secs(3)), 3);
    }

    #[test]
    fn test_toggle_same_track_stops() {
        let mut timer = Meditation::new();
        assert_eq!(timer.toggle(0, 60), MeditationEvent::Started { track: 0 });
        assert!(timer.is_running(0));
        assert_eq!(timer.toggle(0, 60), MeditationEvent::Stopped { track: 0 });
        assert!(timer.session().is_none());
    }

    #[test]
    fn test_new_track_replaces_running_one() {
        let mut timer = Meditation::new();
        timer.toggle(0, 60);
        timer.update(secs(10));
        assert_eq!(timer.toggle(1, 90), MeditationEvent::Started { track: 1 });

        // Exactly one session remains, reset to zero
        let session = timer.session().unwrap();
        assert_eq!(session.track, 1);
        assert_eq!(session.elapsed, 0);
    }

    #[test]
    fn test_elapsed_never_exceeds_duration() {
        let mut timer = Meditation::new();
        timer.toggle(0, 5);
        let event = timer.update(secs(100));
        assert_eq!(event, Some(MeditationEvent::Completed { track: 0 }));
        assert!(timer.session().is_none(), "Completion must return to idle");
    }

    #[test]
    fn test_completion_fires_once() {
        let mut timer = Meditation::new();
        timer.toggle(0, 2);
        let mut completions = 0;
        for _ in 0..10 {
            if let Some(MeditationEvent::Completed { .. }) = timer.update(secs(1)) {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
    }

    #[test]
    fn test_sub_second_updates_accumulate() {
        let mut timer = Meditation::new();
        timer.toggle(0, 60);
        for _ in 0..10 {
            timer.update(Duration::from_millis(100));
        }
        assert_eq!(timer.session().unwrap().elapsed, 1);
    }
}
