//! Stillhaven - A terminal wellness companion
//!
//! Guided meditation timers, a breathing exercise, a stress
//! self-assessment and a private diary, all in the terminal.

pub mod data;
pub mod diary;
pub mod haven;
pub mod quiz;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use haven::{Haven, Screen};
pub use ui::App;
