use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::host::{Diagnostic, Document, TextChange};

/// Every host callback is modelled as an Event.
/// The dispatcher routes each one to the matching session handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HostEvent {
    DocumentChanged {
        document: Document,
        #[serde(default)]
        changes: Vec<TextChange>,
        at: DateTime<Utc>,
    },
    DocumentSaved {
        document: Document,
        /// Diagnostics recorded with the save. When absent the dispatcher
        /// asks the host for the document's current diagnostics.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        diagnostics: Option<Vec<Diagnostic>>,
        at: DateTime<Utc>,
    },
    ConfigurationChanged {
        namespace: String,
        at: DateTime<Utc>,
    },
    /// The user invoked the show-stats command.
    ShowStats { at: DateTime<Utc> },
}

impl HostEvent {
    pub fn at(&self) -> DateTime<Utc> {
        match self {
            HostEvent::DocumentChanged { at, .. }
            | HostEvent::DocumentSaved { at, .. }
            | HostEvent::ConfigurationChanged { at, .. }
            | HostEvent::ShowStats { at } => *at,
        }
    }
}

/// Which tone a save message takes, decided by the line-count diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveTone {
    Growth,
    Shrink,
    Unchanged,
}

impl SaveTone {
    pub fn from_diff(diff: i64) -> Self {
        match diff {
            d if d > 0 => SaveTone::Growth,
            d if d < 0 => SaveTone::Shrink,
            _ => SaveTone::Unchanged,
        }
    }
}

/// One-off achievement messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Achievement {
    FirstSave,
    FocusMaster,
    CleanStreak { streak: u32 },
    Lines100,
    Lines300,
}

/// A message the session wants shown, before any text is chosen for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Notice {
    CharMilestone,
    Save { diff: i64 },
    Comeback,
    Focus { minutes: u64 },
    CleanSave { streak: u32 },
    Achievement(Achievement),
}
