//! Constants used throughout the application

/// Number of landmarks in a hand skeleton
pub const NUM_HAND_LANDMARKS: usize = 21;

/// Maximum number of hands tracked per frame (detector slots 0 and 1)
pub const MAX_TRACKED_HANDS: usize = 2;

/// Landmark indices
pub const WRIST: usize = 0;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_PIP: usize = 6;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_TIP: usize = 12;
pub const RING_PIP: usize = 14;
pub const RING_TIP: usize = 16;
pub const PINKY_PIP: usize = 18;
pub const PINKY_TIP: usize = 20;

/// Lower bound for any scale used as a divisor
pub const SCALE_EPSILON: f64 = 1e-9;

/// Default smoothing window length (frames)
pub const DEFAULT_HISTORY_LEN: usize = 7;

/// Default votes required to accept a smoothed gesture
pub const DEFAULT_MIN_VOTES: usize = 4;

/// Default cooldown between dispatched actions (seconds)
pub const DEFAULT_ACTION_COOLDOWN_S: f64 = 1.1;

/// Default gesture thresholds, relative to hand scale (smaller is stricter)
pub const DEFAULT_FIST_THRESHOLD: f64 = 0.60;
pub const DEFAULT_OK_THRESHOLD: f64 = 0.22;

/// Default number of frames averaged by the scale calibrator
pub const DEFAULT_CALIBRATION_SAMPLES: usize = 25;

/// Weight kept from the previous FPS estimate on each tick
pub const FPS_SMOOTHING: f64 = 0.85;
