//! Small helpers shared by the application loop.

use crate::constants::FPS_SMOOTHING;

/// Exponentially smoothed frame rate from frame timestamps
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    last_t: Option<f64>,
    fps: f64,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self { last_t: None, fps: 0.0 }
    }

    /// Register a frame at time `t` (seconds) and return the current estimate
    pub fn tick(&mut self, t: f64) -> f64 {
        if let Some(last) = self.last_t {
            let dt = t - last;
            if dt > 0.0 {
                let instant = 1.0 / dt;
                self.fps = if self.fps > 0.0 {
                    FPS_SMOOTHING * self.fps + (1.0 - FPS_SMOOTHING) * instant
                } else {
                    instant
                };
            }
        }
        self.last_t = Some(t);
        self.fps
    }

    /// Current estimate without registering a frame
    pub fn fps(&self) -> f64 {
        self.fps
    }
}
