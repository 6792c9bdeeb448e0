//! Configuration management for the hand gesture control application

use crate::{
    constants,
    dispatch::{ActionMap, ActionToken, HandFilter},
    gestures::{GestureLabel, Thresholds},
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Temporal smoothing configuration
    pub smoothing: SmoothingConfig,

    /// Gesture thresholds, relative to hand scale
    pub thresholds: Thresholds,

    /// Action dispatch configuration
    pub dispatch: DispatchConfig,

    /// Scale calibration configuration
    pub calibration: CalibrationConfig,

    /// Gesture to action token mapping. Gestures left out map to NONE.
    pub actions: ActionMap,
}

/// Smoothing window parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Number of recent frames voted over
    pub window_len: usize,

    /// Votes required to accept a gesture
    pub min_votes: usize,
}

/// Action dispatch parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Minimum seconds between two dispatched actions
    pub cooldown_s: f64,

    /// Which hand can trigger actions
    pub active_hand: HandFilter,

    /// Start with actions armed
    pub start_armed: bool,
}

/// Scale calibration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationConfig {
    /// Frames averaged per calibration run
    pub sample_budget: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            smoothing: SmoothingConfig::default(),
            thresholds: Thresholds::default(),
            dispatch: DispatchConfig::default(),
            calibration: CalibrationConfig::default(),
            actions: ActionMap::default(),
        }
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            window_len: constants::DEFAULT_HISTORY_LEN,
            min_votes: constants::DEFAULT_MIN_VOTES,
        }
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            cooldown_s: constants::DEFAULT_ACTION_COOLDOWN_S,
            active_hand: HandFilter::Right,
            start_armed: false,
        }
    }
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            sample_budget: constants::DEFAULT_CALIBRATION_SAMPLES,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        // Validate smoothing window
        if self.smoothing.window_len == 0 {
            return Err(Error::ConfigError(
                "Smoothing window length must be greater than 0".to_string(),
            ));
        }
        if self.smoothing.min_votes == 0 || self.smoothing.min_votes > self.smoothing.window_len {
            return Err(Error::ConfigError(format!(
                "Minimum votes must be between 1 and the window length ({})",
                self.smoothing.window_len
            )));
        }

        // Validate thresholds
        if !(self.thresholds.fist.is_finite() && self.thresholds.fist > 0.0) {
            return Err(Error::ConfigError("Fist threshold must be positive".to_string()));
        }
        if !(self.thresholds.ok.is_finite() && self.thresholds.ok > 0.0) {
            return Err(Error::ConfigError("OK threshold must be positive".to_string()));
        }

        // Validate dispatch settings
        if !(self.dispatch.cooldown_s.is_finite() && self.dispatch.cooldown_s >= 0.0) {
            return Err(Error::ConfigError(
                "Action cooldown must be non-negative".to_string(),
            ));
        }

        if self.calibration.sample_budget == 0 {
            return Err(Error::ConfigError(
                "Calibration sample budget must be greater than 0".to_string(),
            ));
        }

        if let Some(token) = self.actions.binding(GestureLabel::Unknown) {
            if token != ActionToken::None {
                return Err(Error::ConfigError(format!(
                    "Unknown gesture must map to NONE, not {token}"
                )));
            }
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Hand Gesture Control Configuration

# Majority vote over recent frames, per hand
smoothing:
  window_len: 7
  min_votes: 4      # votes required to accept a gesture

# Thresholds relative to hand scale (smaller => stricter)
thresholds:
  fist: 0.60
  ok: 0.22

# Action dispatch
dispatch:
  cooldown_s: 1.1
  active_hand: Right   # Right, Left or Any
  start_armed: false

# Scale calibration
calibration:
  sample_budget: 25

# Gesture -> action token
actions:
  open_palm: PLAY_PAUSE
  peace: NEXT
  fist: PREV
  thumbs_up: VOL_UP
  thumbs_down: VOL_DOWN
  ok: CONFIRM
  pointing: CLICK
  unknown: NONE
"#;
