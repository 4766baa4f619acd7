//! Status-bar text derived from the session counters.
//!
//! Always rebuilt from [`SessionStats`] on demand; nothing is cached.

use serde::{Deserialize, Serialize};

use crate::session::SessionStats;

/// Command the status element invokes to open the detail view.
pub const SHOW_STATS_COMMAND: &str = "motivation.showStats";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSurface {
    pub level: u64,
    /// Compact inline text, e.g. `Lvl 3 | +42 lines | saves: 7`.
    pub text: String,
    /// Markdown detail view listing every counter.
    pub detail: String,
    pub command: String,
}

impl StatusSurface {
    pub fn from_stats(stats: &SessionStats) -> Self {
        let level = stats.level();
        Self {
            level,
            text: format!(
                "Lvl {level} | {:+} lines | saves: {}",
                stats.lines_delta, stats.saves
            ),
            detail: detail_markdown(stats),
            command: SHOW_STATS_COMMAND.to_string(),
        }
    }
}

fn counter_lines(stats: &SessionStats) -> [String; 7] {
    [
        format!("Characters this session: {}", stats.chars_written),
        format!("Line delta this session: {:+}", stats.lines_delta),
        format!("Saves: {}", stats.saves),
        format!("Current clean save streak: {}", stats.clean_save_streak),
        format!("Best clean save streak: {}", stats.best_clean_save_streak),
        format!("Successful terminal runs: {}", stats.terminal_successes),
        format!("Focus time (approx.): {} min", stats.focus_minutes),
    ]
}

fn detail_markdown(stats: &SessionStats) -> String {
    let mut out = String::from("**Motivation**\n\n");
    out.push_str(&format!("Level {}\n\n", stats.level()));
    out.push_str(&counter_lines(stats).join("\n\n"));
    out
}

/// Plain-text report shown by the show-stats command.
pub fn stats_report(stats: &SessionStats) -> String {
    counter_lines(stats).join("\n")
}
