//! Shared render helpers

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::haven::BreathPhase;

/// Center a popup rect inside `r` by percentage
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Format whole seconds as MM:SS
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Base radius of the breathing circle in canvas units
pub const CIRCLE_BASE: f64 = 18.0;

/// Radius of the breathing circle for a phase
///
/// The core reports a discrete per-phase scale (1.0 or 1.5); the circle
/// animates between them across the inhale and exhale phases.
pub fn circle_radius(phase: BreathPhase, progress: f32) -> f64 {
    let t = f64::from(progress.clamp(0.0, 1.0));
    let scale = match phase {
        BreathPhase::Inhale => 1.0 + 0.5 * t,
        BreathPhase::Hold => 1.5,
        BreathPhase::Exhale => 1.5 - 0.5 * t,
    };
    CIRCLE_BASE * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(600), "10:00");
    }

    #[test]
    fn test_circle_radius_matches_phase_scales() {
        // Ends of each animated phase line up with the discrete scales
        assert_eq!(circle_radius(BreathPhase::Inhale, 0.0), CIRCLE_BASE);
        assert_eq!(circle_radius(BreathPhase::Inhale, 1.0), CIRCLE_BASE * 1.5);
        assert_eq!(circle_radius(BreathPhase::Hold, 0.5), CIRCLE_BASE * 1.5);
        assert_eq!(circle_radius(BreathPhase::Exhale, 1.0), CIRCLE_BASE);
    }
}
