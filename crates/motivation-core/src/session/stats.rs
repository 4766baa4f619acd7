use serde::{Deserialize, Serialize};

/// Characters per level on the status surface.
pub const CHARS_PER_LEVEL: u64 = 500;

/// Counters for one activation. Nothing here outlives the process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub chars_written: u64,
    /// Net line-count change across all saves; negative when code was removed.
    pub lines_delta: i64,
    pub saves: u64,
    pub clean_save_streak: u32,
    pub best_clean_save_streak: u32,
    pub focus_minutes: u64,
    /// Shown on the status surface; nothing increments it yet.
    pub terminal_successes: u64,
}

impl SessionStats {
    pub fn level(&self) -> u64 {
        1 + self.chars_written / CHARS_PER_LEVEL
    }

    /// Extend the clean-save streak and return its new length.
    pub fn record_clean_save(&mut self) -> u32 {
        self.clean_save_streak = self.clean_save_streak.saturating_add(1);
        self.best_clean_save_streak = self.best_clean_save_streak.max(self.clean_save_streak);
        self.clean_save_streak
    }

    pub fn break_clean_streak(&mut self) {
        self.clean_save_streak = 0;
    }
}
