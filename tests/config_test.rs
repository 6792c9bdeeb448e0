//! Configuration file handling

use hand_gesture_control::{
    config::{Config, EXAMPLE_CONFIG},
    dispatch::{ActionToken, HandFilter},
    gestures::GestureLabel,
    Error,
};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_file_round_trip() {
    let mut config = Config::default();
    config.smoothing.window_len = 9;
    config.smoothing.min_votes = 5;
    config.thresholds.ok = 0.18;
    config.dispatch.active_hand = HandFilter::Left;
    config.dispatch.start_armed = true;
    config.actions.bind(GestureLabel::Pointing, ActionToken::Confirm);

    let file = NamedTempFile::new().unwrap();
    config.to_file(file.path()).unwrap();

    let loaded = Config::from_file(file.path()).unwrap();
    assert_eq!(loaded, config);
    assert!(loaded.validate().is_ok());
}

#[test]
fn test_load_example_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(EXAMPLE_CONFIG.as_bytes()).unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.dispatch.cooldown_s, 1.1);
    assert_eq!(config.calibration.sample_budget, 25);
    assert_eq!(config.actions.token_for(GestureLabel::ThumbsDown), ActionToken::VolDown);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::from_file(dir.path().join("missing.yaml"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_bad_token_rejected() {
    let yaml = "actions:\n  fist: SHOUT\n";
    assert!(matches!(Config::from_yaml(yaml), Err(Error::ConfigError(_))));
}

#[test]
fn test_partial_action_table() {
    let config = Config::from_yaml("actions:\n  fist: CLICK\n").unwrap();

    assert_eq!(config.actions.token_for(GestureLabel::Fist), ActionToken::Click);
    assert_eq!(config.actions.token_for(GestureLabel::Peace), ActionToken::None);
    assert_eq!(config.actions.token_for(GestureLabel::Unknown), ActionToken::None);
}

#[test]
fn test_negative_cooldown_invalid() {
    let config = Config::from_yaml("dispatch:\n  cooldown_s: -0.5\n").unwrap();
    assert!(config.validate().is_err());
}
