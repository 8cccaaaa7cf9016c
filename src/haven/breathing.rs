//! Breathing exercise cycler
//!
//! Loops through inhale, hold and exhale phases while active. The
//! whole cycle is one `Option` slot advanced by the frame delta, so a
//! rapid toggle can never leave two transition chains running.

use std::time::Duration;

/// The three breathing phases, in cycle order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathPhase {
    Inhale,
    Hold,
    Exhale,
}

impl BreathPhase {
    /// How long the phase is held
    pub fn duration_secs(&self) -> f32 {
        match self {
            BreathPhase::Inhale => 4.0,
            BreathPhase::Hold => 4.0,
            BreathPhase::Exhale => 4.0,
        }
    }

    /// Target visual scale: expanded while the lungs are full
    pub fn scale(&self) -> f32 {
        match self {
            BreathPhase::Inhale | BreathPhase::Hold => 1.5,
            BreathPhase::Exhale => 1.0,
        }
    }

    /// Textual cue shown under the animation
    pub fn cue(&self) -> &'static str {
        match self {
            BreathPhase::Inhale => "Breathe in...",
            BreathPhase::Hold => "Hold...",
            BreathPhase::Exhale => "Breathe out...",
        }
    }

    /// The phase that follows this one
    pub fn next(&self) -> BreathPhase {
        match self {
            BreathPhase::Inhale => BreathPhase::Hold,
            BreathPhase::Hold => BreathPhase::Exhale,
            BreathPhase::Exhale => BreathPhase::Inhale,
        }
    }
}

/// Transitions reported from an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathEvent {
    PhaseChanged(BreathPhase),
    /// An exhale finished, completing one full cycle
    CycleCompleted,
}

#[derive(Debug, Clone)]
struct ActiveCycle {
    phase: BreathPhase,
    in_phase: f32,
}

/// The breathing cycler: inactive, or looping through phases
#[derive(Debug, Clone, Default)]
pub struct Breathing {
    active: Option<ActiveCycle>,
}

impl Breathing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The current phase while active
    pub fn phase(&self) -> Option<BreathPhase> {
        self.active.as_ref().map(|a| a.phase)
    }

    /// Current visual scale (1.0 when inactive)
    pub fn scale(&self) -> f32 {
        self.phase().map_or(1.0, |p| p.scale())
    }

    /// How far through the current phase we are, in 0.0..=1.0
    pub fn phase_progress(&self) -> f32 {
        self.active
            .as_ref()
            .map_or(0.0, |a| (a.in_phase / a.phase.duration_secs()).min(1.0))
    }

    /// Start or stop the cycle. Activation always restarts at inhale.
    pub fn toggle(&mut self) -> bool {
        if self.active.is_some() {
            self.active = None;
            false
        } else {
            self.active = Some(ActiveCycle {
                phase: BreathPhase::Inhale,
                in_phase: 0.0,
            });
            true
        }
    }

    /// Advance the cycle by the frame delta
    pub fn update(&mut self, delta: Duration) -> Vec<BreathEvent> {
        let mut events = Vec::new();
        let Some(active) = self.active.as_mut() else {
            return events;
        };

        active.in_phase += delta.as_secs_f32();
        // A large delta can cross several phase boundaries
        while active.in_phase >= active.phase.duration_secs() {
            active.in_phase -= active.phase.duration_secs();
            if active.phase == BreathPhase::Exhale {
                events.push(BreathEvent::CycleCompleted);
            }
            active.phase = active.phase.next();
            events.push(BreathEvent::PhaseChanged(active.phase));
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn test_phases_advance_in_order() {
        let mut cycle = Breathing::new();
        cycle.toggle();
        assert_eq!(cycle.phase(), Some(BreathPhase::Inhale));

        cycle.update(secs(4));
        assert_eq!(cycle.phase(), Some(BreathPhase::Hold));
        cycle.update(secs(4));
        assert_eq!(cycle.phase(), Some(BreathPhase::Exhale));
        cycle.update(secs(4));
        assert_eq!(cycle.phase(), Some(BreathPhase::Inhale));
    }

    #[test]
    fn test_cycle_completion_event() {
        let mut cycle = Breathing::new();
        cycle.toggle();
        let events = cycle.update(secs(12));
        assert!(events.contains(&BreathEvent::CycleCompleted));
        assert_eq!(cycle.phase(), Some(BreathPhase::Inhale));
    }

    #[test]
    fn test_scales() {
        assert_eq!(BreathPhase::Inhale.scale(), 1.5);
        assert_eq!(BreathPhase::Hold.scale(), 1.5);
        assert_eq!(BreathPhase::Exhale.scale(), 1.0);

        let cycle = Breathing::new();
        assert_eq!(cycle.scale(), 1.0, "Inactive cycle shows the normal scale");
    }

    #[test]
    fn test_reactivation_restarts_at_inhale() {
        let mut cycle = Breathing::new();
        cycle.toggle();
        cycle.update(secs(6)); // Into the hold phase
        assert!(!cycle.toggle(), "Second toggle deactivates");
        assert!(cycle.update(secs(60)).is_empty(), "Inactive cycle never transitions");

        assert!(cycle.toggle());
        assert_eq!(cycle.phase(), Some(BreathPhase::Inhale));
        assert_eq!(cycle.phase_progress(), 0.0);
    }
}
