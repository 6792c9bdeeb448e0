//! Scale calibration.
//!
//! Averages the raw hand scale over a fixed number of frames and then
//! uses that average for every classification until the next calibration.
//! Calibration is optional; without it the per-frame raw scale is used.

use crate::geometry::clamp_scale;

/// Running-average hand scale estimator
#[derive(Debug, Clone)]
pub struct ScaleCalibrator {
    sample_budget: usize,
    calibrating: bool,
    frames_remaining: usize,
    accumulated: f64,
    resolved: Option<f64>,
}

impl ScaleCalibrator {
    /// Create an idle calibrator that averages `sample_budget` frames
    ///
    /// # Panics
    ///
    /// Panics if `sample_budget` is 0
    #[must_use]
    pub fn new(sample_budget: usize) -> Self {
        assert!(sample_budget > 0, "Sample budget must be greater than 0");
        Self {
            sample_budget,
            calibrating: false,
            frames_remaining: 0,
            accumulated: 0.0,
            resolved: None,
        }
    }

    /// Start (or restart) calibration with a fresh budget and accumulator.
    ///
    /// A previously resolved scale stays active until the new run completes.
    pub fn begin(&mut self) {
        self.calibrating = true;
        self.frames_remaining = self.sample_budget;
        self.accumulated = 0.0;
    }

    /// Feed one raw scale measurement. No-op unless calibrating.
    ///
    /// Returns the resolved scale on the frame that completes calibration.
    pub fn observe(&mut self, raw_scale: f64) -> Option<f64> {
        if !self.calibrating {
            return None;
        }

        self.accumulated += raw_scale;
        self.frames_remaining -= 1;

        if self.frames_remaining == 0 {
            let scale = clamp_scale(self.accumulated / self.sample_budget as f64);
            self.resolved = Some(scale);
            self.calibrating = false;
            return Some(scale);
        }

        None
    }

    /// Scale to classify with: the calibrated one if present, else `raw_scale`
    pub fn active_scale(&self, raw_scale: f64) -> f64 {
        clamp_scale(self.resolved.unwrap_or(raw_scale))
    }

    /// Whether a calibration run is in progress
    pub fn is_calibrating(&self) -> bool {
        self.calibrating
    }

    /// Frames left in the current run (0 when idle)
    pub fn frames_remaining(&self) -> usize {
        self.frames_remaining
    }

    /// The calibrated scale, if any run has completed
    pub fn resolved_scale(&self) -> Option<f64> {
        self.resolved
    }

    /// Frames averaged per run
    pub fn sample_budget(&self) -> usize {
        self.sample_budget
    }
}

impl Default for ScaleCalibrator {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_CALIBRATION_SAMPLES)
    }
}
