use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SETTINGS_FILE: &str = "deck.toml";
pub const DEFAULT_NAVBAR_HIDE_MS: u64 = 2_000;

/// What a pointer reveal does to a pending navbar countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealPolicy {
    /// Cancel the countdown; the navbar stays until the slide changes.
    #[default]
    HoldUntilNavigate,
    /// Start a fresh countdown from the reveal.
    RestartCountdown,
}

impl RevealPolicy {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "hold_until_navigate" | "hold" => Some(Self::HoldUntilNavigate),
            "restart_countdown" | "restart" => Some(Self::RestartCountdown),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub navbar_hide_ms: u64,
    pub reveal_policy: RevealPolicy,
    pub counter_on_first_slide: bool,
    pub pin_navbar_on_first_slide: bool,
    pub render_window_radius: usize,
    pub skip_entrance: bool,
    pub deck_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            navbar_hide_ms: DEFAULT_NAVBAR_HIDE_MS,
            reveal_policy: RevealPolicy::HoldUntilNavigate,
            counter_on_first_slide: false,
            pin_navbar_on_first_slide: true,
            render_window_radius: 1,
            skip_entrance: false,
            deck_path: None,
        }
    }
}

/// Reads `deck.toml` (or `explicit_path`) and applies `APP__*` environment overrides.
///
/// A missing default file is not an error; a missing explicit file is.
pub fn load_settings(explicit_path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = match explicit_path {
        Some(path) => read_settings_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_SETTINGS_FILE);
            if default_path.exists() {
                read_settings_file(default_path)?
            } else {
                Settings::default()
            }
        }
    };

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn read_settings_file(path: &Path) -> anyhow::Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    parse_settings(&raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))
}

pub fn parse_settings(raw: &str) -> anyhow::Result<Settings> {
    let settings: Settings = toml::from_str(raw)?;
    Ok(settings)
}

pub fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("APP__NAVBAR_HIDE_MS") {
        match v.trim().parse::<u64>() {
            Ok(parsed) => settings.navbar_hide_ms = parsed,
            Err(_) => tracing::warn!(value = %v, "ignoring invalid APP__NAVBAR_HIDE_MS"),
        }
    }

    if let Some(v) = lookup("APP__REVEAL_POLICY") {
        match RevealPolicy::parse(&v) {
            Some(policy) => settings.reveal_policy = policy,
            None => tracing::warn!(value = %v, "ignoring invalid APP__REVEAL_POLICY"),
        }
    }

    if let Some(v) = lookup("APP__COUNTER_ON_FIRST_SLIDE").and_then(|v| parse_flag(&v)) {
        settings.counter_on_first_slide = v;
    }
    if let Some(v) = lookup("APP__PIN_NAVBAR_ON_FIRST_SLIDE").and_then(|v| parse_flag(&v)) {
        settings.pin_navbar_on_first_slide = v;
    }
    if let Some(v) = lookup("APP__SKIP_ENTRANCE").and_then(|v| parse_flag(&v)) {
        settings.skip_entrance = v;
    }

    if let Some(v) = lookup("APP__DECK_PATH") {
        if !v.trim().is_empty() {
            settings.deck_path = Some(PathBuf::from(v));
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
