//! Helper functions and utilities for tests
#![allow(dead_code)]

use hand_gesture_control::{
    landmarks::{HandObservation, Handedness, Landmark, LandmarkSet, RawHand},
    replay::FrameRecord,
};

/// Thumb placement for synthetic hands
#[derive(Debug, Clone, Copy)]
pub enum Thumb {
    /// Tip above the IP joint and above the wrist
    Up,
    /// Tip below the IP joint and below the wrist
    Down,
    /// Tip next to the index fingertip
    Touching,
}

const WRIST: (f64, f64) = (0.5, 0.8);
const FINGER_X: [f64; 4] = [0.42, 0.48, 0.54, 0.60];
const PIP_Y: f64 = 0.55;
const TIP_UP_Y: f64 = 0.35;
const TIP_DOWN_Y: f64 = 0.65;

/// Build a right-side-up synthetic hand.
///
/// `fingers` holds the up state of index, middle, ring and pinky.
pub fn hand_pose(fingers: [bool; 4], thumb: Thumb) -> LandmarkSet {
    let mut points = [Landmark::new(WRIST.0, WRIST.1); 21];

    for (i, (&up, &x)) in fingers.iter().zip(FINGER_X.iter()).enumerate() {
        let mcp = 5 + i * 4;
        let tip_y = if up { TIP_UP_Y } else { TIP_DOWN_Y };
        points[mcp] = Landmark::new(x, 0.68);
        points[mcp + 1] = Landmark::new(x, PIP_Y);
        points[mcp + 2] = Landmark::new(x, (PIP_Y + tip_y) / 2.0);
        points[mcp + 3] = Landmark::new(x, tip_y);
    }

    points[1] = Landmark::new(0.42, 0.75);
    points[2] = Landmark::new(0.38, 0.68);
    points[3] = Landmark::new(0.35, 0.6);
    points[4] = match thumb {
        Thumb::Up => Landmark::new(0.33, 0.5),
        Thumb::Down => Landmark::new(0.35, 0.9),
        Thumb::Touching => {
            let index_tip = points[8];
            Landmark::new(index_tip.x + 0.01, index_tip.y)
        }
    };

    LandmarkSet::new(points)
}

pub fn open_palm() -> LandmarkSet {
    hand_pose([true; 4], Thumb::Up)
}

pub fn peace() -> LandmarkSet {
    hand_pose([true, true, false, false], Thumb::Up)
}

pub fn pointing() -> LandmarkSet {
    hand_pose([true, false, false, false], Thumb::Up)
}

/// Curled fingers, thumb raised. Reads as Thumbs Up with the raw hand
/// scale and as Fist once a larger calibrated scale is in use.
pub fn closed_hand() -> LandmarkSet {
    hand_pose([false; 4], Thumb::Up)
}

pub fn thumbs_down() -> LandmarkSet {
    hand_pose([false; 4], Thumb::Down)
}

pub fn ok_sign() -> LandmarkSet {
    hand_pose([true; 4], Thumb::Touching)
}

/// Index and ring up: matches no rule
pub fn unrecognized() -> LandmarkSet {
    hand_pose([true, false, true, false], Thumb::Up)
}

/// Wrap a landmark set as a detector observation
pub fn observe(landmarks: LandmarkSet, handedness: Handedness, slot: usize) -> HandObservation {
    HandObservation {
        landmarks,
        handedness,
        score: 0.95,
        slot,
    }
}

/// Wire form of a hand
pub fn raw_hand(landmarks: &LandmarkSet, handedness: Option<&str>) -> RawHand {
    RawHand {
        landmarks: landmarks.points().to_vec(),
        handedness: handedness.map(str::to_string),
        score: 0.95,
        decode_error: None,
    }
}

/// One JSON line holding the given hands
pub fn frame_line(t: f64, hands: Vec<RawHand>, commands: &[&str]) -> String {
    let mut record = FrameRecord {
        t,
        hands,
        commands: Vec::new(),
    };
    for command in commands {
        record.commands.push(serde_json::from_str(command).expect("valid command json"));
    }
    serde_json::to_string(&record).expect("serializable frame")
}
