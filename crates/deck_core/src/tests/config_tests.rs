use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn defaults_match_observed_presentation() {
    let settings = Settings::default();
    assert_eq!(settings.navbar_hide_ms, 2_000);
    assert_eq!(settings.reveal_policy, RevealPolicy::HoldUntilNavigate);
    assert!(!settings.counter_on_first_slide);
    assert!(settings.pin_navbar_on_first_slide);
    assert_eq!(settings.render_window_radius, 1);
    assert!(!settings.skip_entrance);
}

#[test]
fn partial_toml_keeps_remaining_defaults() {
    let settings = parse_settings(
        r#"
navbar_hide_ms = 3500
reveal_policy = "restart_countdown"
"#,
    )
    .expect("settings");
    assert_eq!(settings.navbar_hide_ms, 3_500);
    assert_eq!(settings.reveal_policy, RevealPolicy::RestartCountdown);
    assert!(settings.pin_navbar_on_first_slide);
}

#[test]
fn rejects_unknown_reveal_policy_in_toml() {
    assert!(parse_settings("reveal_policy = \"sometimes\"").is_err());
}

#[test]
fn env_overrides_replace_file_values() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        lookup_from(&[
            ("APP__NAVBAR_HIDE_MS", "750"),
            ("APP__REVEAL_POLICY", "restart"),
            ("APP__COUNTER_ON_FIRST_SLIDE", "yes"),
            ("APP__PIN_NAVBAR_ON_FIRST_SLIDE", "0"),
            ("APP__SKIP_ENTRANCE", "true"),
            ("APP__DECK_PATH", "decks/custom.toml"),
        ]),
    );
    assert_eq!(settings.navbar_hide_ms, 750);
    assert_eq!(settings.reveal_policy, RevealPolicy::RestartCountdown);
    assert!(settings.counter_on_first_slide);
    assert!(!settings.pin_navbar_on_first_slide);
    assert!(settings.skip_entrance);
    assert_eq!(
        settings.deck_path.as_deref(),
        Some(Path::new("decks/custom.toml"))
    );
}

#[test]
fn invalid_env_values_are_ignored() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        lookup_from(&[
            ("APP__NAVBAR_HIDE_MS", "soon"),
            ("APP__REVEAL_POLICY", "never"),
            ("APP__SKIP_ENTRANCE", "maybe"),
            ("APP__DECK_PATH", "  "),
        ]),
    );
    assert_eq!(settings, Settings::default());
}

#[test]
fn explicit_settings_file_is_loaded() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("pitch_deck_settings_test_{suffix}"));
    fs::create_dir_all(&temp_root).expect("temp root");
    let path = temp_root.join("deck.toml");
    fs::write(&path, "render_window_radius = 2\ncounter_on_first_slide = true\n")
        .expect("write settings");

    let settings = read_settings_file(&path).expect("load");
    assert_eq!(settings.render_window_radius, 2);
    assert!(settings.counter_on_first_slide);

    fs::remove_dir_all(temp_root).expect("cleanup");
}

#[test]
fn missing_explicit_settings_file_is_an_error() {
    let err = load_settings(Some(Path::new("/definitely/not/here/deck.toml")))
        .expect_err("missing file");
    assert!(err.to_string().contains("failed to read settings file"));
}
