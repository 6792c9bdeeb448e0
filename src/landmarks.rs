//! Hand landmark data as produced by the external hand-landmark detector.
//!
//! Coordinates are normalized to the image plane: `x` and `y` lie in
//! `[0, 1]` with the origin at the top-left corner and `y` growing
//! downward. The core only ever reads these values.

use crate::{constants::NUM_HAND_LANDMARKS, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single tracked keypoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position, 0 = left edge
    pub x: f64,
    /// Vertical position, 0 = top edge
    pub y: f64,
    /// Relative depth, unused by classification
    #[serde(default)]
    pub z: f64,
}

impl Landmark {
    /// Create a landmark on the image plane
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Euclidean distance to `other` in the 2D image plane
    pub fn distance_xy(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// The fixed, ordered set of 21 hand keypoints
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkSet {
    points: [Landmark; NUM_HAND_LANDMARKS],
}

impl LandmarkSet {
    /// Wrap a complete array of landmarks
    pub const fn new(points: [Landmark; NUM_HAND_LANDMARKS]) -> Self {
        Self { points }
    }

    /// Build a set from a slice, which must hold at least 21 points.
    ///
    /// Extra trailing points are ignored.
    ///
    /// # Errors
    ///
    /// Returns `IncompleteObservation` when fewer than 21 points are given
    pub fn from_slice(points: &[Landmark]) -> Result<Self> {
        if points.len() < NUM_HAND_LANDMARKS {
            return Err(Error::IncompleteObservation(format!(
                "expected {NUM_HAND_LANDMARKS} landmarks, got {}",
                points.len()
            )));
        }

        let mut set = [Landmark::default(); NUM_HAND_LANDMARKS];
        set.copy_from_slice(&points[..NUM_HAND_LANDMARKS]);
        Ok(Self { points: set })
    }

    /// Landmark at a fixed index (see `constants`)
    pub fn get(&self, index: usize) -> &Landmark {
        &self.points[index]
    }

    /// All landmarks in index order
    pub fn points(&self) -> &[Landmark] {
        &self.points
    }

    /// Distance between two indexed landmarks
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        self.points[a].distance_xy(&self.points[b])
    }
}

/// Detector handedness label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handedness {
    /// Left hand
    #[serde(alias = "left")]
    Left,
    /// Right hand
    #[serde(alias = "right")]
    Right,
}

impl Handedness {
    /// Label as reported by the detector
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Handedness {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(Error::InvalidInput(format!("Unknown handedness: {other}"))),
        }
    }
}

/// One detected hand in one frame
#[derive(Debug, Clone, PartialEq)]
pub struct HandObservation {
    /// The 21 keypoints
    pub landmarks: LandmarkSet,
    /// Left or right hand
    pub handedness: Handedness,
    /// Detector confidence in `[0, 1]`
    pub score: f64,
    /// Detector slot for this frame (0 or 1); not a stable identity
    pub slot: usize,
}

/// A hand as it arrives on the wire, before validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawHand {
    /// Keypoints in detector order
    #[serde(default)]
    pub landmarks: Vec<Landmark>,
    /// Handedness label, if the detector supplied one
    #[serde(default)]
    pub handedness: Option<String>,
    /// Handedness confidence
    #[serde(default)]
    pub score: f64,
    /// Why the entry could not be decoded, if it could not
    #[serde(skip)]
    pub decode_error: Option<String>,
}

impl RawHand {
    /// Decode one entry of a frame's `hands` array.
    ///
    /// A malformed entry still yields a hand, one that fails validation,
    /// so it keeps its slot and the rest of the frame is unaffected.
    pub fn from_value(value: serde_json::Value) -> Self {
        serde_json::from_value(value).unwrap_or_else(|e| Self {
            decode_error: Some(e.to_string()),
            ..Self::default()
        })
    }

    /// Validate into a `HandObservation` bound to `slot`.
    ///
    /// # Errors
    ///
    /// Returns `IncompleteObservation` if landmarks are missing or the
    /// handedness label is absent or unrecognized
    pub fn into_observation(self, slot: usize) -> Result<HandObservation> {
        if let Some(reason) = self.decode_error {
            return Err(Error::IncompleteObservation(format!("slot {slot}: {reason}")));
        }

        let landmarks = LandmarkSet::from_slice(&self.landmarks)?;

        let handedness = self
            .handedness
            .as_deref()
            .ok_or_else(|| Error::IncompleteObservation(format!("slot {slot}: missing handedness")))?
            .parse::<Handedness>()
            .map_err(|e| Error::IncompleteObservation(format!("slot {slot}: {e}")))?;

        Ok(HandObservation {
            landmarks,
            handedness,
            score: self.score.clamp(0.0, 1.0),
            slot,
        })
    }
}
