//! Single-frame gesture classification.
//!
//! A fixed, ordered rule chain maps one hand's `GeometrySnapshot` to a
//! `GestureLabel`. Rules overlap (a closed fist with touching thumb and
//! index also looks like OK), so the first matching rule wins and the
//! order of `RULES` must not change.

use crate::geometry::{hand_scale, GeometrySnapshot};
use crate::landmarks::LandmarkSet;
use crate::{constants, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Recognized hand poses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureLabel {
    /// All four fingers and the thumb extended
    OpenPalm,
    /// Index and middle up, ring and pinky down
    Peace,
    /// All fingertips close to the wrist
    Fist,
    /// Only the index finger up
    Pointing,
    /// Fingers curled, thumb tip above the wrist
    ThumbsUp,
    /// Fingers curled, thumb tip at or below the wrist
    ThumbsDown,
    /// Thumb and index tips touching
    Ok,
    /// Anything else
    Unknown,
}

impl GestureLabel {
    /// Every label, in declaration order
    pub const ALL: [Self; 8] = [
        Self::OpenPalm,
        Self::Peace,
        Self::Fist,
        Self::Pointing,
        Self::ThumbsUp,
        Self::ThumbsDown,
        Self::Ok,
        Self::Unknown,
    ];

    /// Human readable name, as shown on the HUD
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenPalm => "Open Palm",
            Self::Peace => "Peace (V)",
            Self::Fist => "Fist",
            Self::Pointing => "Pointing",
            Self::ThumbsUp => "Thumbs Up",
            Self::ThumbsDown => "Thumbs Down",
            Self::Ok => "OK",
            Self::Unknown => "Unknown",
        }
    }

    /// Position in `ALL`
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl Default for GestureLabel {
    fn default() -> Self {
        Self::Unknown
    }
}

impl fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GestureLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "openpalm" | "palm" => Ok(Self::OpenPalm),
            "peace" | "peacev" | "v" => Ok(Self::Peace),
            "fist" => Ok(Self::Fist),
            "pointing" | "point" => Ok(Self::Pointing),
            "thumbsup" => Ok(Self::ThumbsUp),
            "thumbsdown" => Ok(Self::ThumbsDown),
            "ok" => Ok(Self::Ok),
            "unknown" => Ok(Self::Unknown),
            _ => Err(Error::InvalidInput(format!("Unknown gesture: {s}"))),
        }
    }
}

/// Distance thresholds, relative to hand scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Every fingertip-to-wrist distance must be below this for a fist
    pub fist: f64,
    /// Thumb-to-index distance must be below this for OK
    pub ok: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            fist: constants::DEFAULT_FIST_THRESHOLD,
            ok: constants::DEFAULT_OK_THRESHOLD,
        }
    }
}

/// Diagnostic values behind a classification; never used for control flow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureDebug {
    pub d_index: f64,
    pub d_middle: f64,
    pub d_ring: f64,
    pub d_pinky: f64,
    pub d_thumb_index: f64,
    pub scale: f64,
    pub fingers_up: usize,
}

impl GestureDebug {
    /// Named values for display
    pub fn values(&self) -> [(&'static str, f64); 7] {
        [
            ("d_index", self.d_index),
            ("d_middle", self.d_middle),
            ("d_ring", self.d_ring),
            ("d_pinky", self.d_pinky),
            ("d_thumb_index", self.d_thumb_index),
            ("scale", self.scale),
            ("fingers_up", self.fingers_up as f64),
        ]
    }
}

impl From<&GeometrySnapshot> for GestureDebug {
    fn from(g: &GeometrySnapshot) -> Self {
        Self {
            d_index: g.d_index,
            d_middle: g.d_middle,
            d_ring: g.d_ring,
            d_pinky: g.d_pinky,
            d_thumb_index: g.d_thumb_index,
            scale: g.scale,
            fingers_up: g.fingers_up(),
        }
    }
}

type Predicate = fn(&GeometrySnapshot, &Thresholds) -> bool;

fn is_ok(g: &GeometrySnapshot, t: &Thresholds) -> bool {
    g.d_thumb_index < t.ok
}

fn is_fist(g: &GeometrySnapshot, t: &Thresholds) -> bool {
    g.fingertip_distances().iter().all(|&d| d < t.fist)
}

fn is_peace(g: &GeometrySnapshot, _: &Thresholds) -> bool {
    matches!(g.finger_states(), [true, true, false, false])
}

fn is_pointing(g: &GeometrySnapshot, _: &Thresholds) -> bool {
    matches!(g.finger_states(), [true, false, false, false])
}

fn is_open_palm(g: &GeometrySnapshot, _: &Thresholds) -> bool {
    g.fingers_up() == 4 && g.thumb_up
}

fn is_thumbs_up(g: &GeometrySnapshot, _: &Thresholds) -> bool {
    g.fingers_up() == 0 && g.thumb_above_wrist
}

fn is_thumbs_down(g: &GeometrySnapshot, _: &Thresholds) -> bool {
    g.fingers_up() == 0
}

/// Decision chain, checked top to bottom
const RULES: [(GestureLabel, Predicate); 7] = [
    (GestureLabel::Ok, is_ok),
    (GestureLabel::Fist, is_fist),
    (GestureLabel::Peace, is_peace),
    (GestureLabel::Pointing, is_pointing),
    (GestureLabel::OpenPalm, is_open_palm),
    (GestureLabel::ThumbsUp, is_thumbs_up),
    (GestureLabel::ThumbsDown, is_thumbs_down),
];

/// Classify one hand's geometry. Total: unmatched geometry is `Unknown`.
pub fn classify(geometry: &GeometrySnapshot, thresholds: &Thresholds) -> (GestureLabel, GestureDebug) {
    let label = RULES
        .iter()
        .find(|(_, matches)| matches(geometry, thresholds))
        .map_or(GestureLabel::Unknown, |&(label, _)| label);

    (label, GestureDebug::from(geometry))
}

/// Classify landmarks directly, using `scale` or the raw hand scale if `None`
pub fn classify_landmarks(
    landmarks: &LandmarkSet,
    scale: Option<f64>,
    thresholds: &Thresholds,
) -> (GestureLabel, GestureDebug) {
    let scale = scale.unwrap_or_else(|| hand_scale(landmarks));
    classify(&GeometrySnapshot::compute(landmarks, scale), thresholds)
}
