//! # Motivation Core Library
//!
//! This library tracks a user's typing and saving activity during an editor
//! session and decides when to show encouraging messages. The editor is a
//! host: it delivers events and renders whatever the core asks it to show.
//!
//! ## Architecture
//!
//! - **Session**: counters for the current activation plus the edit and save
//!   handlers, which return typed notices instead of showing anything
//! - **Activity Tracker**: a wall-clock-based state machine that detects idle
//!   gaps and rewards sustained focus; the caller supplies every timestamp
//! - **Milestones**: pure threshold checks for characters, streaks and lines
//! - **Messages**: catalog of texts and an injectable random source
//! - **Dispatch**: the thin adapter from host callbacks to the session
//!
//! ## Key Components
//!
//! - [`Session`]: session state and handlers
//! - [`ActivityTracker`]: idle/focus state machine
//! - [`Extension`]: activation entry point driven by a [`Host`]
//! - [`MotivationConfig`]: tunable thresholds

pub mod activity;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod events;
pub mod host;
pub mod messages;
pub mod milestones;
pub mod replay;
pub mod session;
pub mod status;

pub use activity::{ActivityState, ActivityTracker, FocusReward};
pub use config::MotivationConfig;
pub use dispatch::Extension;
pub use error::{ConfigError, CoreError, ReplayError};
pub use events::{Achievement, HostEvent, Notice, SaveTone};
pub use host::{Diagnostic, DiagnosticSeverity, Document, Host, TextChange};
pub use messages::{DefaultCatalog, MessageCatalog, RandomSource, SeededRandom, ThreadRandom};
pub use session::{Session, SessionStats};
pub use status::{StatusSurface, SHOW_STATS_COMMAND};
