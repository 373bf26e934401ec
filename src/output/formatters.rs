//! Formatting utilities for terminal output

use crate::core::group_thousands;
use crate::game::Feedback;

/// Format a distance like `1,234 km`
#[must_use]
pub fn format_distance(km: u32) -> String {
    format!("{} km", group_thousands(u64::from(km)))
}

/// Bearing arrow and distance for a guessed row; a target marker for the hit
#[must_use]
pub fn feedback_cell(feedback: Option<Feedback>) -> String {
    match feedback {
        Some(feedback) => format!(
            "{} {:>2} {:>9}",
            feedback.bearing.arrow(),
            feedback.bearing.label(),
            format_distance(feedback.distance_km)
        ),
        None => "🎯".to_string(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    if max == 0 {
        return "░".repeat(width);
    }
    let filled = (value * width / max).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Bearing;

    #[test]
    fn distance_grouping() {
        assert_eq!(format_distance(0), "0 km");
        assert_eq!(format_distance(757), "757 km");
        assert_eq!(format_distance(20_015), "20,015 km");
    }

    #[test]
    fn feedback_cell_miss_and_hit() {
        let miss = Feedback {
            bearing: Bearing::SouthWest,
            distance_km: 757,
        };
        assert_eq!(feedback_cell(Some(miss)), "↙ SW    757 km");
        assert_eq!(feedback_cell(None), "🎯");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 8, 8), "░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(8, 8, 8), "████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(4, 8, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }
}
