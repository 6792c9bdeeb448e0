//! Landmark geometry: scale-normalized distances and finger up/down flags.
//!
//! Everything here is a pure function of a `LandmarkSet` and a scale
//! constant. Finger state compares y-coordinates only, so it holds
//! whether or not the frame was mirrored horizontally.

use crate::constants::{
    INDEX_PIP, INDEX_TIP, MIDDLE_PIP, MIDDLE_TIP, PINKY_PIP, PINKY_TIP, RING_PIP, RING_TIP, SCALE_EPSILON,
    THUMB_IP, THUMB_TIP, WRIST,
};
use crate::landmarks::LandmarkSet;

/// Raw hand size: wrist to index fingertip, kept strictly above zero
pub fn hand_scale(landmarks: &LandmarkSet) -> f64 {
    landmarks.distance(WRIST, INDEX_TIP) + SCALE_EPSILON
}

/// Clamp a scale constant so it is always a safe divisor
pub fn clamp_scale(scale: f64) -> f64 {
    if scale.is_finite() && scale > SCALE_EPSILON {
        scale
    } else {
        SCALE_EPSILON
    }
}

/// A finger is up when its tip sits strictly higher on screen than `joint`
pub fn finger_is_up(landmarks: &LandmarkSet, tip: usize, joint: usize) -> bool {
    landmarks.get(tip).y < landmarks.get(joint).y
}

/// Derived per-frame hand geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometrySnapshot {
    /// Scale used for normalization (always > 0)
    pub scale: f64,
    /// Index fingertip to wrist, normalized
    pub d_index: f64,
    /// Middle fingertip to wrist, normalized
    pub d_middle: f64,
    /// Ring fingertip to wrist, normalized
    pub d_ring: f64,
    /// Pinky fingertip to wrist, normalized
    pub d_pinky: f64,
    /// Thumb tip to index tip, normalized
    pub d_thumb_index: f64,
    pub index_up: bool,
    pub middle_up: bool,
    pub ring_up: bool,
    pub pinky_up: bool,
    /// Thumb tip above the thumb IP joint
    pub thumb_up: bool,
    /// Thumb tip above the wrist
    pub thumb_above_wrist: bool,
}

impl GeometrySnapshot {
    /// Compute the snapshot for `landmarks` normalized by `scale`.
    ///
    /// A non-positive or non-finite scale is clamped to `SCALE_EPSILON`.
    pub fn compute(landmarks: &LandmarkSet, scale: f64) -> Self {
        let scale = clamp_scale(scale);
        let to_wrist = |tip: usize| landmarks.distance(tip, WRIST) / scale;

        Self {
            scale,
            d_index: to_wrist(INDEX_TIP),
            d_middle: to_wrist(MIDDLE_TIP),
            d_ring: to_wrist(RING_TIP),
            d_pinky: to_wrist(PINKY_TIP),
            d_thumb_index: landmarks.distance(THUMB_TIP, INDEX_TIP) / scale,
            index_up: finger_is_up(landmarks, INDEX_TIP, INDEX_PIP),
            middle_up: finger_is_up(landmarks, MIDDLE_TIP, MIDDLE_PIP),
            ring_up: finger_is_up(landmarks, RING_TIP, RING_PIP),
            pinky_up: finger_is_up(landmarks, PINKY_TIP, PINKY_PIP),
            thumb_up: finger_is_up(landmarks, THUMB_TIP, THUMB_IP),
            thumb_above_wrist: finger_is_up(landmarks, THUMB_TIP, WRIST),
        }
    }

    /// Number of the four non-thumb fingers that are up (0-4)
    pub fn fingers_up(&self) -> usize {
        [self.index_up, self.middle_up, self.ring_up, self.pinky_up]
            .iter()
            .filter(|&&up| up)
            .count()
    }

    /// Up flags for index, middle, ring and pinky, in that order
    pub fn finger_states(&self) -> [bool; 4] {
        [self.index_up, self.middle_up, self.ring_up, self.pinky_up]
    }

    /// The four fingertip-to-wrist distances
    pub fn fingertip_distances(&self) -> [f64; 4] {
        [self.d_index, self.d_middle, self.d_ring, self.d_pinky]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::Landmark;

    fn set_with(overrides: &[(usize, f64, f64)]) -> LandmarkSet {
        let mut points = [Landmark::new(0.5, 0.5); 21];
        for &(i, x, y) in overrides {
            points[i] = Landmark::new(x, y);
        }
        LandmarkSet::new(points)
    }

    #[test]
    fn test_hand_scale_never_zero() {
        let set = set_with(&[]);
        assert!(hand_scale(&set) > 0.0);
    }

    #[test]
    fn test_clamp_scale() {
        assert_eq!(clamp_scale(0.0), SCALE_EPSILON);
        assert_eq!(clamp_scale(-1.0), SCALE_EPSILON);
        assert_eq!(clamp_scale(f64::NAN), SCALE_EPSILON);
        assert_eq!(clamp_scale(0.4), 0.4);
    }

    #[test]
    fn test_finger_up_uses_strict_comparison() {
        let set = set_with(&[(INDEX_TIP, 0.5, 0.3), (INDEX_PIP, 0.5, 0.4), (MIDDLE_TIP, 0.5, 0.4), (MIDDLE_PIP, 0.5, 0.4)]);
        assert!(finger_is_up(&set, INDEX_TIP, INDEX_PIP));
        // Equal heights do not count as up
        assert!(!finger_is_up(&set, MIDDLE_TIP, MIDDLE_PIP));
    }

    #[test]
    fn test_distances_are_normalized() {
        let set = set_with(&[(WRIST, 0.5, 0.9), (INDEX_TIP, 0.5, 0.5), (THUMB_TIP, 0.8, 0.5)]);
        let snapshot = GeometrySnapshot::compute(&set, 0.4);

        assert!((snapshot.d_index - 1.0).abs() < 1e-12);
        assert!((snapshot.d_thumb_index - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_zero_scale_is_clamped() {
        let set = set_with(&[]);
        let snapshot = GeometrySnapshot::compute(&set, 0.0);
        assert!(snapshot.scale > 0.0);
        assert!(snapshot.d_index.is_finite());
    }

    #[test]
    fn test_fingers_up_count() {
        let set = set_with(&[
            (INDEX_TIP, 0.4, 0.2),
            (INDEX_PIP, 0.4, 0.4),
            (MIDDLE_TIP, 0.5, 0.2),
            (MIDDLE_PIP, 0.5, 0.4),
            (RING_TIP, 0.6, 0.6),
            (RING_PIP, 0.6, 0.4),
        ]);
        let snapshot = GeometrySnapshot::compute(&set, hand_scale(&set));
        assert_eq!(snapshot.fingers_up(), 2);
        assert_eq!(snapshot.finger_states(), [true, true, false, false]);
    }
}
