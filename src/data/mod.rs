//! Data loading and external practice content
//!
//! This module handles loading app content from external RON files,
//! allowing the track library, exercises and quiz to be edited without
//! recompiling.

pub mod loader;
pub mod tracks;
pub mod questions;

pub use loader::Library;
pub use tracks::{Track, Exercise};
pub use questions::Question;
