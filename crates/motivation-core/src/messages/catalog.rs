use crate::events::{Achievement, Notice, SaveTone};

use super::random::RandomSource;

/// Maps notices to candidate message texts.
pub trait MessageCatalog {
    /// All texts that may be shown for `notice`. With none, nothing is shown.
    fn variants(&self, notice: &Notice) -> Vec<String>;

    /// Pick one variant for `notice`.
    fn render(&self, notice: &Notice, rng: &mut dyn RandomSource) -> String {
        let mut variants = self.variants(notice);
        match variants.len() {
            0 => String::new(),
            1 => variants.swap_remove(0),
            len => variants.swap_remove(rng.pick(len)),
        }
    }
}

const CHAR_MILESTONE: &[&str] = &[
    "Another stretch of keystrokes closer to done.",
    "Your keyboard is on fire. Keep going!",
    "Words are flowing. Nice rhythm.",
    "That's real progress right there.",
];

const SAVE_GROWTH: &[&str] = &[
    "Saved: +{n} lines. The code is growing.",
    "+{n} lines in the bag.",
    "Saved with {n} new lines. Solid.",
];

const SAVE_SHRINK: &[&str] = &[
    "Saved: -{n} lines. Less code, fewer bugs.",
    "Trimmed {n} lines. Clean-up counts too.",
    "Refactoring pays off: {n} lines lighter.",
];

const SAVE_UNCHANGED: &[&str] = &[
    "Saved. Every save counts.",
    "Checkpoint reached.",
    "Saved and safe.",
];

const COMEBACK: &[&str] = &[
    "Welcome back! Let's pick up where you left off.",
    "Good to see you again. Ready when you are.",
    "Break's over, back to building.",
];

const FOCUS: &[&str] = &[
    "{n} minutes of focus. You're in the zone.",
    "Deep work for {n} minutes. Impressive.",
    "{n} focused minutes. Maybe stretch for a second?",
];

const CLEAN_SAVE: &[&str] = &[
    "No errors in sight. Beautiful.",
    "Clean save after clean save.",
    "Zero errors. The compiler approves.",
];

/// The built-in English catalog.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultCatalog;

impl DefaultCatalog {
    fn achievement(achievement: Achievement) -> String {
        match achievement {
            Achievement::FirstSave => "Achievement unlocked: First save of the session!".into(),
            Achievement::FocusMaster => "Achievement unlocked: Focus master!".into(),
            Achievement::CleanStreak { streak } => {
                format!("Achievement unlocked: {streak} clean saves in a row!")
            }
            Achievement::Lines100 => "Achievement unlocked: 100+ lines this session!".into(),
            Achievement::Lines300 => "Achievement unlocked: 300+ lines this session!".into(),
        }
    }
}

fn fill(templates: &[&str], n: impl ToString) -> Vec<String> {
    let n = n.to_string();
    templates.iter().map(|t| t.replace("{n}", &n)).collect()
}

impl MessageCatalog for DefaultCatalog {
    fn variants(&self, notice: &Notice) -> Vec<String> {
        match *notice {
            Notice::CharMilestone => fill(CHAR_MILESTONE, ""),
            Notice::Save { diff } => match SaveTone::from_diff(diff) {
                SaveTone::Growth => fill(SAVE_GROWTH, diff),
                SaveTone::Shrink => fill(SAVE_SHRINK, diff.unsigned_abs()),
                SaveTone::Unchanged => fill(SAVE_UNCHANGED, ""),
            },
            Notice::Comeback => fill(COMEBACK, ""),
            Notice::Focus { minutes } => fill(FOCUS, minutes),
            Notice::CleanSave { .. } => fill(CLEAN_SAVE, ""),
            Notice::Achievement(a) => vec![Self::achievement(a)],
        }
    }
}
