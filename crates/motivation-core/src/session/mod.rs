//! Session state and the edit/save handlers.
//!
//! A [`Session`] is created at activation and dropped at deactivation. Each
//! handler is a function of (state, event, now) that mutates the session and
//! returns the notices to show, in order. Choosing message text and talking
//! to the host happen elsewhere.

mod stats;

pub use stats::{SessionStats, CHARS_PER_LEVEL};

use std::collections::HashMap;

use tracing::debug;

use crate::activity::ActivityTracker;
use crate::config::MotivationConfig;
use crate::events::{Achievement, Notice};
use crate::host::{Diagnostic, Document, TextChange};
use crate::milestones;

#[derive(Debug, Clone)]
pub struct Session {
    config: MotivationConfig,
    stats: SessionStats,
    tracker: ActivityTracker,
    /// Last observed line count per document URI, filled in on first save.
    line_counts: HashMap<String, usize>,
    chars_since_last_praise: u64,
}

impl Session {
    /// Start a session whose first focus window opens at `now_ms`.
    pub fn new(config: MotivationConfig, now_ms: i64) -> Self {
        Self {
            config,
            stats: SessionStats::default(),
            tracker: ActivityTracker::new(now_ms),
            line_counts: HashMap::new(),
            chars_since_last_praise: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn config(&self) -> &MotivationConfig {
        &self.config
    }

    pub fn tracker(&self) -> &ActivityTracker {
        &self.tracker
    }

    pub fn chars_since_last_praise(&self) -> u64 {
        self.chars_since_last_praise
    }

    pub fn previous_line_count(&self, uri: &str) -> Option<usize> {
        self.line_counts.get(uri).copied()
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn set_config(&mut self, config: MotivationConfig) {
        self.config = config;
    }

    /// Handle a document-changed event.
    pub fn handle_change(&mut self, now_ms: i64, changes: &[TextChange]) -> Vec<Notice> {
        let mut notices = self.register_activity(now_ms);

        let added: u64 = changes.iter().map(TextChange::inserted_len).sum();
        if added > 0 {
            self.stats.chars_written = self.stats.chars_written.saturating_add(added);
            self.chars_since_last_praise = self.chars_since_last_praise.saturating_add(added);

            if milestones::char_milestone_reached(
                self.chars_since_last_praise,
                self.config.char_threshold,
            ) {
                debug!(
                    chars_written = self.stats.chars_written,
                    "character milestone reached"
                );
                // The overshoot is dropped, not carried into the next milestone.
                self.chars_since_last_praise = 0;
                notices.push(Notice::CharMilestone);
            }
        }
        notices
    }

    /// Handle a document-saved event. `diagnostics` are the host's
    /// diagnostics for `document` at save time.
    pub fn handle_save(
        &mut self,
        now_ms: i64,
        document: &Document,
        diagnostics: &[Diagnostic],
    ) -> Vec<Notice> {
        let mut notices = Vec::new();

        // Decided before the tracker moves `last_activity` forward.
        if self
            .tracker
            .is_idle_gap(now_ms, self.config.idle_threshold_ms())
        {
            notices.push(Notice::Comeback);
        }
        notices.extend(self.register_activity(now_ms));

        let current = document.line_count;
        let previous = self
            .line_counts
            .insert(document.uri.clone(), current)
            .unwrap_or(current);
        let diff = current as i64 - previous as i64;

        self.stats.lines_delta = self.stats.lines_delta.saturating_add(diff);
        self.stats.saves = self.stats.saves.saturating_add(1);
        notices.push(Notice::Save { diff });

        if diagnostics.iter().any(Diagnostic::is_error) {
            if self.stats.clean_save_streak > 0 {
                debug!(
                    streak = self.stats.clean_save_streak,
                    uri = %document.uri,
                    "clean save streak broken"
                );
            }
            self.stats.break_clean_streak();
        } else {
            let streak = self.stats.record_clean_save();
            if milestones::is_clean_streak_milestone(streak) {
                notices.push(Notice::CleanSave { streak });
                notices.push(Notice::Achievement(Achievement::CleanStreak { streak }));
            }
        }

        if let Some(achievement) = milestones::lines_achievement(self.stats.lines_delta) {
            notices.push(Notice::Achievement(achievement));
        }

        if self.stats.saves == 1 {
            notices.push(Notice::Achievement(Achievement::FirstSave));
        }

        debug!(
            uri = %document.uri,
            diff,
            lines_delta = self.stats.lines_delta,
            saves = self.stats.saves,
            "save recorded"
        );
        notices
    }

    fn register_activity(&mut self, now_ms: i64) -> Vec<Notice> {
        match self.tracker.register_activity(now_ms, &self.config) {
            Some(reward) => {
                self.stats.focus_minutes = self.stats.focus_minutes.saturating_add(reward.minutes);
                debug!(minutes = reward.minutes, "focus reward earned");
                vec![
                    Notice::Focus {
                        minutes: reward.minutes,
                    },
                    Notice::Achievement(Achievement::FocusMaster),
                ]
            }
            None => Vec::new(),
        }
    }
}
