//! Activity tracker implementation.
//!
//! The tracker is a wall-clock-based state machine. It never reads the clock
//! itself - every observation carries the caller's timestamp, so a sequence
//! of timestamps always produces the same transitions.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Active -> Praised
//!   ^        |         |
//!   +--------+---------+   (gap longer than the idle threshold)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut tracker = ActivityTracker::new(now_ms);
//! // On every observed event:
//! if let Some(reward) = tracker.register_activity(now_ms, &config) { ... }
//! ```

use serde::{Deserialize, Serialize};

use crate::config::MotivationConfig;

const MINUTE_MS: i64 = 60_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityState {
    /// No activity for longer than the idle threshold.
    Idle,
    /// Inside a focus window, reward not yet earned.
    Active,
    /// Inside a focus window whose reward has already fired.
    Praised,
}

/// Emitted once per focus window when sustained activity crosses the reward threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusReward {
    /// Length of the window so far, rounded to whole minutes.
    pub minutes: u64,
}

/// Idle-gap and focus-window bookkeeping.
///
/// Timestamps are epoch milliseconds supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityTracker {
    last_activity_ms: i64,
    focus_start_ms: i64,
    focus_praised: bool,
}

impl ActivityTracker {
    /// Start tracking with a focus window opening at `now_ms`.
    pub fn new(now_ms: i64) -> Self {
        Self {
            last_activity_ms: now_ms,
            focus_start_ms: now_ms,
            focus_praised: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn last_activity_ms(&self) -> i64 {
        self.last_activity_ms
    }

    pub fn focus_start_ms(&self) -> i64 {
        self.focus_start_ms
    }

    pub fn focus_praised(&self) -> bool {
        self.focus_praised
    }

    /// True if more than `idle_threshold_ms` has passed since the last activity.
    pub fn is_idle_gap(&self, now_ms: i64, idle_threshold_ms: i64) -> bool {
        now_ms.saturating_sub(self.last_activity_ms) > idle_threshold_ms
    }

    pub fn state(&self, now_ms: i64, idle_threshold_ms: i64) -> ActivityState {
        if self.is_idle_gap(now_ms, idle_threshold_ms) {
            ActivityState::Idle
        } else if self.focus_praised {
            ActivityState::Praised
        } else {
            ActivityState::Active
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Record activity at `now_ms`.
    ///
    /// An idle gap opens a new focus window. Otherwise, the first observation
    /// at least `focus_reward_ms` into the window returns a [`FocusReward`].
    pub fn register_activity(
        &mut self,
        now_ms: i64,
        config: &MotivationConfig,
    ) -> Option<FocusReward> {
        let mut reward = None;
        if self.is_idle_gap(now_ms, config.idle_threshold_ms()) {
            self.focus_start_ms = now_ms;
            self.focus_praised = false;
        } else {
            let window_ms = now_ms.saturating_sub(self.focus_start_ms);
            if !self.focus_praised && window_ms >= config.focus_reward_ms() {
                self.focus_praised = true;
                reward = Some(FocusReward {
                    minutes: round_minutes(window_ms),
                });
            }
        }
        self.last_activity_ms = now_ms;
        reward
    }
}

/// Round a non-negative duration to the nearest minute, halves up.
fn round_minutes(ms: i64) -> u64 {
    let minutes = ms.max(0).saturating_add(MINUTE_MS / 2) / MINUTE_MS;
    u64::try_from(minutes).unwrap_or(0)
}
