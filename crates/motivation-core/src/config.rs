//! Tunable thresholds under the `motivation` namespace.
//!
//! Four settings are recognised:
//! - `charThreshold`: characters between milestone messages
//! - `idleMinutes`: gap that ends a focus window
//! - `focusMinutes`: sustained activity that earns a focus reward
//! - `enableTerminalSuccessPraise`: reserved flag, loaded and reported only
//!
//! The host hands settings over as a JSON object; the CLI host reads the same
//! keys from `~/.config/motivation/config.toml`.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Configuration namespace the host reports changes for.
pub const NAMESPACE: &str = "motivation";

const MINUTE_MS: f64 = 60_000.0;

/// Effective configuration for one activation.
///
/// Minutes may be fractional. Negative minutes are kept as given: a negative
/// idle threshold makes every event an idle gap, a negative focus threshold
/// rewards the first event of each window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotivationConfig {
    #[serde(default = "default_char_threshold")]
    pub char_threshold: u64,
    #[serde(default = "default_idle_minutes", serialize_with = "whole_as_integer")]
    pub idle_minutes: f64,
    #[serde(default = "default_focus_minutes", serialize_with = "whole_as_integer")]
    pub focus_minutes: f64,
    #[serde(default = "default_true")]
    pub enable_terminal_success_praise: bool,
}

fn default_char_threshold() -> u64 {
    100
}
fn default_idle_minutes() -> f64 {
    5.0
}
fn default_focus_minutes() -> f64 {
    20.0
}
fn default_true() -> bool {
    true
}

/// Write `5.0` as `5` so `config get` and `config show` print what was configured.
fn whole_as_integer<S: Serializer>(minutes: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if minutes.fract() == 0.0 && minutes.abs() < 1e15 {
        serializer.serialize_i64(*minutes as i64)
    } else {
        serializer.serialize_f64(*minutes)
    }
}

impl Default for MotivationConfig {
    fn default() -> Self {
        Self {
            char_threshold: default_char_threshold(),
            idle_minutes: default_idle_minutes(),
            focus_minutes: default_focus_minutes(),
            enable_terminal_success_praise: true,
        }
    }
}

impl MotivationConfig {
    /// Build from the host's settings object for [`NAMESPACE`].
    ///
    /// Numbers are taken as given, fractional or negative. Missing keys,
    /// `null` and non-numeric values take their defaults.
    pub fn from_json(settings: &Value) -> Self {
        let number = |key: &str| settings.get(key).and_then(Value::as_f64);
        Self {
            char_threshold: number("charThreshold")
                .map_or(default_char_threshold(), char_threshold_from),
            idle_minutes: number("idleMinutes").unwrap_or(default_idle_minutes()),
            focus_minutes: number("focusMinutes").unwrap_or(default_focus_minutes()),
            enable_terminal_success_praise: settings
                .get("enableTerminalSuccessPraise")
                .and_then(Value::as_bool)
                .unwrap_or(true),
        }
        .normalized()
    }

    /// Parse a TOML document with the same camelCase keys.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseFailed`] if the document is not valid TOML
    /// or a key has the wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let cfg: MotivationConfig = toml::from_str(content)?;
        Ok(cfg.normalized())
    }

    /// Load from a TOML file, or return defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Returns `~/.config/motivation[-dev]/config.toml` based on MOTIVATION_ENV.
    ///
    /// Set MOTIVATION_ENV=dev to use the development directory.
    pub fn default_path() -> PathBuf {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config");

        let env = std::env::var("MOTIVATION_ENV").unwrap_or_else(|_| "production".to_string());

        let dir = if env == "dev" {
            base_dir.join("motivation-dev")
        } else {
            base_dir.join("motivation")
        };
        dir.join("config.toml")
    }

    /// Zero idle/focus minutes fall back to their defaults.
    fn normalized(mut self) -> Self {
        if self.idle_minutes == 0.0 {
            self.idle_minutes = default_idle_minutes();
        }
        if self.focus_minutes == 0.0 {
            self.focus_minutes = default_focus_minutes();
        }
        self
    }

    pub fn idle_threshold_ms(&self) -> i64 {
        minutes_to_ms(self.idle_minutes)
    }

    pub fn focus_reward_ms(&self) -> i64 {
        minutes_to_ms(self.focus_minutes)
    }

    /// Get a config value as string by key, with an optional `motivation.` prefix.
    pub fn get(&self, key: &str) -> Option<String> {
        let key = key.strip_prefix("motivation.").unwrap_or(key);
        if key.is_empty() {
            return None;
        }
        let json = serde_json::to_value(self).ok()?;
        match json.get(key)? {
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// A milestone fires once the running count reaches the threshold, so a
/// fractional threshold rounds up and anything at or below zero means 0.
fn char_threshold_from(value: f64) -> u64 {
    if value <= 0.0 {
        0
    } else {
        value.ceil() as u64
    }
}

fn minutes_to_ms(minutes: f64) -> i64 {
    // `as` saturates at the i64 bounds.
    (minutes * MINUTE_MS).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn config_default_values() {
        let cfg = MotivationConfig::default();
        assert_eq!(cfg.char_threshold, 100);
        assert_eq!(cfg.idle_threshold_ms(), 5 * 60 * 1000);
        assert_eq!(cfg.focus_reward_ms(), 20 * 60 * 1000);
        assert!(cfg.enable_terminal_success_praise);
    }

    #[test]
    fn from_json_reads_host_settings() {
        let cfg = MotivationConfig::from_json(&json!({
            "charThreshold": 250,
            "idleMinutes": 2,
            "focusMinutes": 45,
            "enableTerminalSuccessPraise": false
        }));
        assert_eq!(cfg.char_threshold, 250);
        assert_eq!(cfg.idle_threshold_ms(), 2 * 60 * 1000);
        assert_eq!(cfg.focus_reward_ms(), 45 * 60 * 1000);
        assert!(!cfg.enable_terminal_success_praise);
    }

    #[test]
    fn from_json_falls_back_on_missing_and_mistyped_values() {
        let cfg = MotivationConfig::from_json(&json!({
            "charThreshold": "lots",
            "idleMinutes": null,
            "focusMinutes": true
        }));
        assert_eq!(cfg, MotivationConfig::default());

        let cfg = MotivationConfig::from_json(&Value::Null);
        assert_eq!(cfg, MotivationConfig::default());
    }

    #[test]
    fn zero_minutes_fall_back_to_defaults() {
        let cfg = MotivationConfig::from_json(&json!({ "idleMinutes": 0, "focusMinutes": 0.0 }));
        assert_eq!(cfg.idle_minutes, 5.0);
        assert_eq!(cfg.focus_minutes, 20.0);
    }

    #[test]
    fn fractional_minutes_and_thresholds_are_used_as_given() {
        let cfg = MotivationConfig::from_json(&json!({
            "idleMinutes": 2.5,
            "focusMinutes": 0.75,
            "charThreshold": 50.0
        }));
        assert_eq!(cfg.idle_threshold_ms(), 150_000);
        assert_eq!(cfg.focus_reward_ms(), 45_000);
        assert_eq!(cfg.char_threshold, 50);

        let cfg = MotivationConfig::from_json(&json!({ "charThreshold": 49.2 }));
        assert_eq!(cfg.char_threshold, 50);
    }

    #[test]
    fn negative_values_are_kept() {
        let cfg = MotivationConfig::from_json(&json!({
            "idleMinutes": -3,
            "focusMinutes": -1,
            "charThreshold": -10
        }));
        assert_eq!(cfg.idle_threshold_ms(), -180_000);
        assert_eq!(cfg.focus_reward_ms(), -60_000);
        assert_eq!(cfg.char_threshold, 0);
    }

    #[test]
    fn fractional_minutes_serialize_as_given() {
        let cfg = MotivationConfig::from_json(&json!({ "idleMinutes": 2.5 }));
        assert_eq!(cfg.get("idleMinutes").as_deref(), Some("2.5"));
        assert_eq!(cfg.get("focusMinutes").as_deref(), Some("20"));
    }

    #[test]
    fn zero_char_threshold_is_kept() {
        let cfg = MotivationConfig::from_json(&json!({ "charThreshold": 0 }));
        assert_eq!(cfg.char_threshold, 0);
    }

    #[test]
    fn toml_partial_document_uses_defaults() {
        let cfg = MotivationConfig::from_toml_str("charThreshold = 42\n").unwrap();
        assert_eq!(cfg.char_threshold, 42);
        assert_eq!(cfg.idle_minutes, 5.0);
        assert_eq!(cfg.focus_minutes, 20.0);
    }

    #[test]
    fn toml_rejects_wrong_type() {
        let result = MotivationConfig::from_toml_str("idleMinutes = \"soon\"\n");
        assert!(matches!(result, Err(ConfigError::ParseFailed(_))));
    }

    #[test]
    fn load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = MotivationConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg, MotivationConfig::default());
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "focusMinutes = 0\nidleMinutes = 10\n").unwrap();
        let cfg = MotivationConfig::load(&path).unwrap();
        assert_eq!(cfg.idle_minutes, 10.0);
        assert_eq!(cfg.focus_minutes, 20.0);

        std::fs::write(&path, "idleMinutes = 1.5\n").unwrap();
        let cfg = MotivationConfig::load(&path).unwrap();
        assert_eq!(cfg.idle_threshold_ms(), 90_000);
    }

    #[test]
    fn get_supports_prefixed_keys() {
        let cfg = MotivationConfig::default();
        assert_eq!(cfg.get("charThreshold").as_deref(), Some("100"));
        assert_eq!(cfg.get("motivation.idleMinutes").as_deref(), Some("5"));
        assert_eq!(
            cfg.get("enableTerminalSuccessPraise").as_deref(),
            Some("true")
        );
        assert!(cfg.get("missing").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn default_path_ends_in_config_toml() {
        let path = MotivationConfig::default_path();
        assert!(path.ends_with("config.toml"));
    }
}
