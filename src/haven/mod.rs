//! Haven module - Core app logic and state management

mod breathing;
mod meditation;
mod state;

pub use breathing::{BreathEvent, BreathPhase, Breathing};
pub use meditation::{Meditation, MeditationEvent, SecondTicker, Session};
pub use state::{Haven, Notice, NoticeKind, Screen};
