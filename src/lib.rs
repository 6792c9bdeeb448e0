//! Hand gesture control library.
//!
//! Turns a stream of per-frame hand landmarks into a debounced,
//! rate-limited stream of symbolic action tokens:
//!
//! 1. Landmark geometry: scale-normalized distances and finger up/down flags
//! 2. Gesture classification with a fixed-priority rule chain
//! 3. Optional scale calibration against hand size and camera distance
//! 4. Per-hand temporal smoothing by sliding-window majority vote
//! 5. Dispatch policy: arming, hand filter and a shared cooldown
//!
//! Frame capture, the landmark detector itself, HUD drawing and key/mouse
//! synthesis live outside this crate.
//!
//! # Examples
//!
//! ## Classifying a single frame
//!
//! ```no_run
//! use hand_gesture_control::{
//!     gestures::{classify_landmarks, Thresholds},
//!     landmarks::{Landmark, LandmarkSet},
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // 21 landmarks from a hand detector
//! let points: Vec<Landmark> = vec![Landmark::new(0.5, 0.5); 21];
//! let landmarks = LandmarkSet::from_slice(&points)?;
//!
//! let (gesture, debug) = classify_landmarks(&landmarks, None, &Thresholds::default());
//! println!("{} (thumb-index {:.3})", gesture, debug.d_thumb_index);
//! # Ok(())
//! # }
//! ```
//!
//! ## Smoothing and dispatch
//!
//! ```no_run
//! use hand_gesture_control::{
//!     dispatch::{DispatchPolicy, HandFilter},
//!     gestures::GestureLabel,
//!     landmarks::Handedness,
//!     smoothing::GestureSmoother,
//! };
//!
//! let mut smoother = GestureSmoother::new(7);
//! let mut policy = DispatchPolicy::new(1.1, HandFilter::Right, true);
//!
//! for _ in 0..4 {
//!     smoother.push(GestureLabel::Peace);
//! }
//!
//! let (label, votes) = smoother.majority();
//! let decision = policy.evaluate(label, votes, 4, Handedness::Right, 0.0);
//! if let Some(token) = decision.dispatched() {
//!     println!("dispatch {token}");
//! }
//! ```
//!
//! ## Complete Pipeline Example
//!
//! ```no_run
//! use hand_gesture_control::{config::Config, engine::{Command, GestureEngine}, replay::FrameReader};
//! use std::io::BufReader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut engine = GestureEngine::new(&Config::default());
//! engine.apply_command(Command::ToggleArmed);
//!
//! let file = std::fs::File::open("frames.jsonl")?;
//! for (_, frame) in FrameReader::new(BufReader::new(file)) {
//!     let frame = frame?;
//!     let report = engine.process_frame(&frame.observations(), frame.t);
//!     if let Some(token) = report.dispatched {
//!         println!("{:.3}\t{}", frame.t, token);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

/// Hand landmark types and the detector wire format
pub mod landmarks;

/// Scale-normalized hand geometry
pub mod geometry;

/// Single-frame gesture classification
pub mod gestures;

/// Hand scale calibration
pub mod calibration;

/// Sliding-window majority vote smoothing
pub mod smoothing;

/// Arming, hand filter and cooldown policy
pub mod dispatch;

/// Action token sinks
pub mod actions;

/// Per-frame pipeline orchestration
pub mod engine;

/// JSON Lines frame stream reader
pub mod replay;

/// Utility helpers
pub mod utils;

/// Error types and result handling
pub mod error;

/// Main application module
pub mod app;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
