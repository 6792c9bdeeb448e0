//! Main application module for hand gesture control.

use crate::{
    actions::ActionSink,
    config::Config,
    dispatch::ActionToken,
    engine::{FrameReport, GestureEngine},
    error::Result,
    replay::FrameReader,
    utils::FpsCounter,
};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Where landmark frames come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// JSON Lines on standard input
    Stdin,
    /// JSON Lines file
    File(PathBuf),
}

impl InputSource {
    /// `-` means standard input, anything else is a path
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Frame source
    pub input: InputSource,
    /// Recognition and dispatch settings
    pub settings: Config,
    /// Start with per-hand debug values shown
    pub debug: bool,
}

/// Totals for a finished run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// Frames processed
    pub frames: usize,
    /// Lines that could not be parsed
    pub skipped: usize,
    /// Dispatched tokens with their frame times
    pub actions: Vec<(f64, ActionToken)>,
}

/// Main application struct
pub struct GestureApp {
    config: AppConfig,
    engine: GestureEngine,
    sink: Box<dyn ActionSink>,
    fps: FpsCounter,
}

impl GestureApp {
    /// Create a new application writing actions to `sink`
    pub fn new(config: AppConfig, sink: Box<dyn ActionSink>) -> Result<Self> {
        info!("Initializing hand gesture control");
        config.settings.validate()?;

        let mut engine = GestureEngine::new(&config.settings);
        if config.debug {
            engine.apply_command(crate::engine::Command::ToggleDebug);
        }

        info!(
            "Window {} (min votes {}), cooldown {:.2}s, active hand {}, actions {}",
            config.settings.smoothing.window_len,
            config.settings.smoothing.min_votes,
            config.settings.dispatch.cooldown_s,
            engine.hand_filter(),
            if engine.is_armed() { "armed" } else { "disarmed" }
        );
        info!("Dispatching actions through {}", sink.name());

        Ok(Self {
            config,
            engine,
            sink,
            fps: FpsCounter::new(),
        })
    }

    /// Run over the configured input source
    pub fn run(&mut self) -> Result<RunSummary> {
        match self.config.input.clone() {
            InputSource::Stdin => {
                info!("Reading frames from stdin");
                let stdin = io::stdin();
                self.run_reader(stdin.lock())
            }
            InputSource::File(path) => {
                info!("Reading frames from {}", path.display());
                let file = File::open(&path)?;
                self.run_reader(BufReader::new(file))
            }
        }
    }

    /// Run the main loop over any JSON Lines reader
    pub fn run_reader<R: BufRead>(&mut self, reader: R) -> Result<RunSummary> {
        info!("Starting main application loop");
        let mut summary = RunSummary::default();

        for (line_number, record) in FrameReader::new(reader) {
            let frame = match record {
                Ok(frame) => frame,
                Err(e) => {
                    warn!("Skipping line {}: {}", line_number, e);
                    summary.skipped += 1;
                    continue;
                }
            };

            for &command in &frame.commands {
                self.engine.apply_command(command);
            }

            let observations = frame.observations();
            let report = self.engine.process_frame(&observations, frame.t);
            summary.frames += 1;

            self.log_report(&report);

            if let Some(token) = report.dispatched {
                info!("Dispatch {} at {:.3}s", token, report.t);
                self.sink.perform(token, report.t)?;
                summary.actions.push((report.t, token));
            }
        }

        info!(
            "Processed {} frames ({} skipped), {} actions dispatched",
            summary.frames,
            summary.skipped,
            summary.actions.len()
        );
        Ok(summary)
    }

    fn log_report(&mut self, report: &FrameReport) {
        let fps = self.fps.tick(report.t);
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }

        debug!("t={:.3} FPS: {:.1}", report.t, fps);
        for line in report.hud_lines() {
            debug!("  {}", line);
        }
    }

    /// The gesture engine driving this app
    pub fn engine(&self) -> &GestureEngine {
        &self.engine
    }
}
