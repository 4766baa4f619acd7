//! Integration tests for a full editing session driven through the dispatcher.

use chrono::{DateTime, Duration, TimeZone, Utc};
use motivation_core::messages::FixedChoice;
use motivation_core::replay::read_events;
use motivation_core::{
    DefaultCatalog, Diagnostic, DiagnosticSeverity, Document, Extension, Host, HostEvent,
    StatusSurface, TextChange,
};
use serde_json::{json, Value};
use std::collections::HashMap;

#[derive(Default)]
struct ScriptedHost {
    settings: Value,
    diagnostics: HashMap<String, Vec<Diagnostic>>,
    notifications: Vec<String>,
    status_updates: usize,
    last_status: Option<StatusSurface>,
}

impl Host for ScriptedHost {
    fn diagnostics(&self, uri: &str) -> Vec<Diagnostic> {
        self.diagnostics.get(uri).cloned().unwrap_or_default()
    }

    fn configuration(&self, _namespace: &str) -> Value {
        self.settings.clone()
    }

    fn show_notification(&mut self, text: &str, _modal: bool) {
        self.notifications.push(text.to_string());
    }

    fn set_status(&mut self, status: &StatusSurface) {
        self.status_updates += 1;
        self.last_status = Some(status.clone());
    }
}

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap()
}

fn activate(settings: Value) -> Extension<ScriptedHost> {
    let host = ScriptedHost {
        settings,
        ..ScriptedHost::default()
    };
    Extension::activate_with(host, start(), Box::new(DefaultCatalog), Box::new(FixedChoice(0)))
}

#[test]
fn test_full_morning_session() {
    let mut ext = activate(json!({ "charThreshold": 50, "focusMinutes": 10 }));
    let doc = "file:///src/lib.rs";

    // Steady typing, one burst a minute for twelve minutes.
    for minute in 1..=12 {
        ext.on_document_changed(
            start() + Duration::minutes(minute),
            &[TextChange::insert("x".repeat(20))],
        );
    }
    let stats = ext.session().stats().clone();
    assert_eq!(stats.chars_written, 240);
    assert_eq!(stats.focus_minutes, 10);
    assert!(ext
        .host()
        .notifications
        .contains(&"Achievement unlocked: Focus master!".to_string()));
    let milestones = ext
        .host()
        .notifications
        .iter()
        .filter(|n| n.as_str() == "Another stretch of keystrokes closer to done.")
        .count();
    // 60, 120, 180, 240: the counter resets at each milestone.
    assert_eq!(milestones, 4);

    // Save three times cleanly, growing the file.
    for (i, lines) in [40usize, 90, 160].iter().enumerate() {
        ext.on_document_saved(
            start() + Duration::minutes(13 + i as i64),
            &Document::new(doc, *lines),
        );
    }
    let stats = ext.session().stats();
    assert_eq!(stats.saves, 3);
    assert_eq!(stats.lines_delta, 120);
    assert_eq!(stats.clean_save_streak, 3);
    let notes = &ext.host().notifications;
    assert!(notes.contains(&"Achievement unlocked: 3 clean saves in a row!".to_string()));
    assert!(notes.contains(&"Achievement unlocked: 100+ lines this session!".to_string()));

    // A broken save, then a long lunch.
    ext.host_mut()
        .diagnostics
        .insert(doc.into(), vec![Diagnostic::new(DiagnosticSeverity::Error)]);
    ext.on_document_saved(start() + Duration::minutes(16), &Document::new(doc, 150));
    assert_eq!(ext.session().stats().clean_save_streak, 0);
    assert_eq!(ext.session().stats().best_clean_save_streak, 3);

    ext.host_mut().diagnostics.clear();
    let before = ext.host().notifications.len();
    ext.on_document_saved(start() + Duration::minutes(75), &Document::new(doc, 150));
    let after_lunch = &ext.host().notifications[before..];
    assert_eq!(
        after_lunch.first().map(String::as_str),
        Some("Welcome back! Let's pick up where you left off.")
    );

    let status = ext.host().last_status.as_ref().unwrap();
    assert_eq!(status.text, "Lvl 1 | +110 lines | saves: 5");
    assert!(ext.host().status_updates >= 17);
}

#[test]
fn test_replayed_stream_matches_direct_calls() {
    let stream = r#"
{"type":"documentChanged","document":{"uri":"a","lineCount":1},"changes":[{"text":"0123456789"}],"at":"2026-03-02T09:00:01Z"}
{"type":"documentSaved","document":{"uri":"a","lineCount":3},"at":"2026-03-02T09:00:02Z"}
{"type":"documentSaved","document":{"uri":"a","lineCount":8},"diagnostics":[{"severity":"warning"}],"at":"2026-03-02T09:00:03Z"}
{"type":"configurationChanged","namespace":"motivation","at":"2026-03-02T09:00:04Z"}
"#;
    let events = read_events(stream.as_bytes()).unwrap();
    let mut replayed = activate(json!({}));
    for event in &events {
        replayed.dispatch(event);
    }

    let mut direct = activate(json!({}));
    direct.on_document_changed(
        start() + Duration::seconds(1),
        &[TextChange::insert("0123456789")],
    );
    direct.on_document_saved(start() + Duration::seconds(2), &Document::new("a", 3));
    direct.on_document_saved(start() + Duration::seconds(3), &Document::new("a", 8));

    assert_eq!(replayed.session().stats(), direct.session().stats());
    assert_eq!(replayed.host().notifications, direct.host().notifications);
    assert!(matches!(events[3], HostEvent::ConfigurationChanged { .. }));
}

#[test]
fn test_recorded_error_breaks_streak_during_replay() {
    let stream = r#"
{"type":"documentSaved","document":{"uri":"a","lineCount":3},"at":"2026-03-02T09:00:02Z"}
{"type":"documentSaved","document":{"uri":"a","lineCount":4},"at":"2026-03-02T09:00:03Z"}
{"type":"documentSaved","document":{"uri":"a","lineCount":5},"diagnostics":[{"severity":"error","message":"unresolved import"}],"at":"2026-03-02T09:00:04Z"}
"#;
    let mut ext = activate(json!({}));
    for event in read_events(stream.as_bytes()).unwrap() {
        ext.dispatch(&event);
    }
    let stats = ext.session().stats();
    assert_eq!(stats.saves, 3);
    assert_eq!(stats.clean_save_streak, 0);
    assert_eq!(stats.best_clean_save_streak, 2);
}
