//! Action execution boundary.
//!
//! Dispatched tokens are handed to an `ActionSink`. Synthesizing real
//! key presses or mouse clicks belongs to whatever sits behind the sink;
//! the sinks here log or write the tokens so they can be piped onward.

use crate::{dispatch::ActionToken, error::AppError, Result};
use log::{debug, info};
use std::io::Write;

/// Receiver of dispatched action tokens
pub trait ActionSink {
    /// Carry out `token`, dispatched at time `t` (seconds).
    ///
    /// Implementations must treat `ActionToken::None` as a no-op.
    fn perform(&mut self, token: ActionToken, t: f64) -> Result<()>;

    /// Sink name
    fn name(&self) -> &str;
}

/// Sink that reports tokens through the logger
#[derive(Debug, Default)]
pub struct LogSink {
    performed: usize,
}

impl LogSink {
    pub fn new() -> Self {
        Self { performed: 0 }
    }

    /// Number of tokens performed so far
    pub fn performed(&self) -> usize {
        self.performed
    }
}

impl ActionSink for LogSink {
    fn perform(&mut self, token: ActionToken, t: f64) -> Result<()> {
        if token.is_none() {
            return Ok(());
        }

        self.performed += 1;
        match token.default_key() {
            Some(key) => info!("Action {} at {:.3}s (key: {})", token, t, key),
            None => info!("Action {} at {:.3}s", token, t),
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "LogSink"
    }
}

/// Sink writing one `"<t>\t<TOKEN>"` line per token
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ActionSink for WriterSink<W> {
    fn perform(&mut self, token: ActionToken, t: f64) -> Result<()> {
        if token.is_none() {
            return Ok(());
        }

        debug!("Writing action {}", token);
        writeln!(self.writer, "{t:.3}\t{token}")
            .and_then(|()| self.writer.flush())
            .map_err(|e| AppError::ActionError(format!("Failed to write action {token}: {e}")))
    }

    fn name(&self) -> &str {
        "WriterSink"
    }
}

/// Create a sink by name (`log` or `stdout`)
///
/// # Errors
///
/// Returns `InvalidInput` for an unrecognized name
pub fn create_sink(name: &str) -> Result<Box<dyn ActionSink>> {
    match name.to_lowercase().as_str() {
        "log" => Ok(Box::new(LogSink::new())),
        "stdout" => Ok(Box::new(WriterSink::new(std::io::stdout()))),
        _ => Err(AppError::InvalidInput(format!("Unknown action sink: {name}"))),
    }
}
