//! Per-frame gesture pipeline.
//!
//! For every hand in a frame: geometry → classification (with the active
//! calibration scale) → per-slot smoothing → dispatch policy. The engine
//! owns one calibrator, one smoother per detector slot and one dispatch
//! policy, and is driven from a single thread, one frame at a time.

use crate::{
    calibration::ScaleCalibrator,
    config::Config,
    constants::MAX_TRACKED_HANDS,
    dispatch::{ActionToken, Decision, DispatchPolicy, HandFilter},
    geometry::{hand_scale, GeometrySnapshot},
    gestures::{classify, GestureDebug, GestureLabel, Thresholds},
    landmarks::{HandObservation, Handedness},
    smoothing::GestureSmoother,
};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// External control events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Arm or disarm action dispatch
    ToggleArmed,
    /// Start (or restart) scale calibration
    BeginCalibration,
    /// Change which hand may trigger actions
    SetHandFilter(HandFilter),
    /// Show or hide per-hand debug values in reports
    ToggleDebug,
}

/// Per-hand result for one frame
#[derive(Debug, Clone)]
pub struct HandReport {
    pub slot: usize,
    pub handedness: Handedness,
    pub score: f64,
    /// Single-frame classification
    pub raw_label: GestureLabel,
    /// Majority label in the slot's window, before the vote gate
    pub smoothed_label: GestureLabel,
    pub votes: usize,
    /// Gated label, token and dispatch outcome
    pub decision: Decision,
    pub debug: GestureDebug,
}

impl HandReport {
    /// HUD caption, e.g. `Right (97%) | Fist | PREV`
    pub fn caption(&self) -> String {
        format!(
            "{} ({}%) | {} | {}",
            self.handedness,
            (self.score * 100.0) as u32,
            self.decision.label,
            self.decision.token
        )
    }
}

/// Result of processing one frame
#[derive(Debug, Clone)]
pub struct FrameReport {
    /// Frame time in seconds
    pub t: f64,
    pub hands: Vec<HandReport>,
    /// The token dispatched this frame, if any (at most one)
    pub dispatched: Option<ActionToken>,
    pub armed: bool,
    /// Frames left if calibration is running
    pub calibrating: Option<usize>,
    /// Whether debug values should be shown
    pub debug: bool,
}

impl FrameReport {
    /// Text lines the on-screen HUD would show for this frame
    pub fn hud_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("ACTIONS: {}", if self.armed { "ON" } else { "OFF" })];

        if let Some(remaining) = self.calibrating {
            lines.push(format!("Calibrating... {remaining}"));
        }

        for hand in &self.hands {
            lines.push(hand.caption());
            if self.debug {
                lines.extend(
                    hand.debug.values()[..5]
                        .iter()
                        .map(|(name, value)| format!("{name}: {value:.3}")),
                );
            }
        }

        lines
    }
}

/// Gesture recognition and dispatch state for a session
#[derive(Debug)]
pub struct GestureEngine {
    thresholds: Thresholds,
    min_votes: usize,
    calibrator: ScaleCalibrator,
    smoothers: Vec<GestureSmoother>,
    policy: DispatchPolicy,
    debug: bool,
}

impl GestureEngine {
    /// Build an engine from a validated configuration
    pub fn new(config: &Config) -> Self {
        let policy = DispatchPolicy::new(
            config.dispatch.cooldown_s,
            config.dispatch.active_hand,
            config.dispatch.start_armed,
        )
        .with_actions(config.actions.clone());

        Self {
            thresholds: config.thresholds,
            min_votes: config.smoothing.min_votes,
            calibrator: ScaleCalibrator::new(config.calibration.sample_budget),
            smoothers: (0..MAX_TRACKED_HANDS)
                .map(|_| GestureSmoother::new(config.smoothing.window_len))
                .collect(),
            policy,
            debug: false,
        }
    }

    /// Apply an external command; takes effect from the next evaluation
    pub fn apply_command(&mut self, command: Command) {
        match command {
            Command::ToggleArmed => {
                let armed = self.policy.toggle_armed();
                info!("Actions {}", if armed { "armed" } else { "disarmed" });
            }
            Command::BeginCalibration => {
                self.calibrator.begin();
                info!(
                    "Calibrating hand scale over {} frames",
                    self.calibrator.sample_budget()
                );
            }
            Command::SetHandFilter(filter) => {
                self.policy.set_hand_filter(filter);
                info!("Active hand set to {}", filter);
            }
            Command::ToggleDebug => {
                self.debug = !self.debug;
                debug!("Debug values {}", if self.debug { "shown" } else { "hidden" });
            }
        }
    }

    /// Process every hand observed in one frame taken at `now` seconds
    pub fn process_frame(&mut self, hands: &[HandObservation], now: f64) -> FrameReport {
        let mut reports = Vec::with_capacity(hands.len().min(MAX_TRACKED_HANDS));
        let mut dispatched = None;

        for observation in hands {
            if observation.slot >= MAX_TRACKED_HANDS {
                debug!("Ignoring hand in slot {}", observation.slot);
                continue;
            }

            let report = self.process_hand(observation, now);
            if dispatched.is_none() {
                dispatched = report.decision.dispatched();
            }
            reports.push(report);
        }

        FrameReport {
            t: now,
            hands: reports,
            dispatched,
            armed: self.policy.is_armed(),
            calibrating: self
                .calibrator
                .is_calibrating()
                .then(|| self.calibrator.frames_remaining()),
            debug: self.debug,
        }
    }

    fn process_hand(&mut self, observation: &HandObservation, now: f64) -> HandReport {
        let raw_scale = hand_scale(&observation.landmarks);
        let scale = self.calibrator.active_scale(raw_scale);

        let geometry = GeometrySnapshot::compute(&observation.landmarks, scale);
        let (raw_label, gesture_debug) = classify(&geometry, &self.thresholds);

        let smoother = &mut self.smoothers[observation.slot];
        smoother.push(raw_label);
        let (smoothed_label, votes) = smoother.majority();

        let decision = self.policy.evaluate(
            smoothed_label,
            votes,
            self.min_votes,
            observation.handedness,
            now,
        );

        // Calibration samples are taken after classification, so the
        // frame that completes calibration still used the previous scale.
        if self.calibrator.is_calibrating() {
            if let Some(resolved) = self.calibrator.observe(raw_scale) {
                info!("Calibration complete, hand scale {:.4}", resolved);
            }
        }

        HandReport {
            slot: observation.slot,
            handedness: observation.handedness,
            score: observation.score,
            raw_label,
            smoothed_label,
            votes,
            decision,
            debug: gesture_debug,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.policy.is_armed()
    }

    pub fn hand_filter(&self) -> HandFilter {
        self.policy.hand_filter()
    }

    pub fn is_calibrating(&self) -> bool {
        self.calibrator.is_calibrating()
    }

    pub fn calibration_frames_remaining(&self) -> usize {
        self.calibrator.frames_remaining()
    }

    pub fn calibrated_scale(&self) -> Option<f64> {
        self.calibrator.resolved_scale()
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug
    }

    /// Smoother for a detector slot
    pub fn smoother(&self, slot: usize) -> Option<&GestureSmoother> {
        self.smoothers.get(slot)
    }

    pub fn policy(&self) -> &DispatchPolicy {
        &self.policy
    }
}
