//! Threshold evaluation: which milestone, if any, an updated counter crosses.
//!
//! All functions here are pure; the session decides when to call them.

use crate::events::Achievement;

/// Clean-save streak lengths that earn an achievement.
pub const CLEAN_STREAK_MILESTONES: [u32; 3] = [3, 5, 10];

/// Lower bound of the first line-delta achievement band.
pub const LINES_100: i64 = 100;
/// Lower bound of the second line-delta achievement band.
pub const LINES_300: i64 = 300;

/// True once enough characters have accumulated since the last milestone.
pub fn char_milestone_reached(chars_since_last_praise: u64, threshold: u64) -> bool {
    chars_since_last_praise >= threshold
}

pub fn is_clean_streak_milestone(streak: u32) -> bool {
    CLEAN_STREAK_MILESTONES.contains(&streak)
}

/// Achievement for the current cumulative line delta.
///
/// Level-triggered: every save inside a band reports that band again.
pub fn lines_achievement(lines_delta: i64) -> Option<Achievement> {
    if (LINES_100..LINES_300).contains(&lines_delta) {
        Some(Achievement::Lines100)
    } else if lines_delta >= LINES_300 {
        Some(Achievement::Lines300)
    } else {
        None
    }
}
