//! The boundary to the editor hosting the add-on.
//!
//! The host owns event subscription, UI rendering and settings storage.
//! The core only needs the handful of capabilities in [`Host`].

use serde::{Deserialize, Serialize};

use crate::status::StatusSurface;

/// A document as reported by the host at the time of an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Stable identity of the document (the host's URI string).
    pub uri: String,
    pub line_count: usize,
}

impl Document {
    pub fn new(uri: impl Into<String>, line_count: usize) -> Self {
        Self {
            uri: uri.into(),
            line_count,
        }
    }
}

/// One content change within a document-changed event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextChange {
    /// The inserted text (empty for pure deletions).
    #[serde(default)]
    pub text: String,
}

impl TextChange {
    pub fn insert(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Inserted length in characters.
    pub fn inserted_len(&self) -> u64 {
        self.text.chars().count() as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Information,
    Hint,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Diagnostic {
    pub fn new(severity: DiagnosticSeverity) -> Self {
        Self {
            severity,
            message: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == DiagnosticSeverity::Error
    }
}

/// Capabilities the add-on consumes from its host.
pub trait Host {
    /// Current diagnostics for the document identified by `uri`.
    fn diagnostics(&self, uri: &str) -> Vec<Diagnostic>;

    /// Settings object for a configuration namespace (`Value::Null` if none).
    fn configuration(&self, namespace: &str) -> serde_json::Value;

    /// Show a pop-up message. Modal messages block until dismissed.
    fn show_notification(&mut self, text: &str, modal: bool);

    /// Update the persistent status element.
    fn set_status(&mut self, status: &StatusSurface);
}
