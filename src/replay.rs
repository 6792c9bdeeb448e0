//! JSON Lines frame stream.
//!
//! Each non-blank line is one detector frame:
//!
//! ```json
//! {"t": 0.033, "hands": [{"landmarks": [{"x": 0.5, "y": 0.8}, ...], "handedness": "Right", "score": 0.97}], "commands": ["toggle_armed"]}
//! ```
//!
//! A hand's position in `hands` is its detector slot.

use crate::{
    engine::Command,
    landmarks::{HandObservation, RawHand},
    Result,
};
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use std::io::BufRead;

/// One frame as recorded from the detector
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameRecord {
    /// Capture time in seconds
    pub t: f64,
    /// Detected hands, in detector slot order
    #[serde(default, deserialize_with = "decode_hands")]
    pub hands: Vec<RawHand>,
    /// Commands issued before this frame is processed
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl FrameRecord {
    /// Parse a single JSON line
    pub fn parse(line: &str) -> Result<Self> {
        Ok(serde_json::from_str(line)?)
    }

    /// Validated observations; incomplete hands are dropped for this frame
    pub fn observations(&self) -> Vec<HandObservation> {
        self.hands
            .iter()
            .cloned()
            .enumerate()
            .filter_map(|(slot, raw)| match raw.into_observation(slot) {
                Ok(observation) => Some(observation),
                Err(e) => {
                    debug!("Dropping hand at t={:.3}: {}", self.t, e);
                    None
                }
            })
            .collect()
    }
}

/// Hands are decoded one by one so a malformed entry only loses itself
fn decode_hands<'de, D>(deserializer: D) -> std::result::Result<Vec<RawHand>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(entries.into_iter().map(RawHand::from_value).collect())
}

/// Iterator over the frames of a JSON Lines stream.
///
/// Yields `(line_number, result)` so callers can report and skip bad lines.
pub struct FrameReader<R: BufRead> {
    reader: R,
    line_number: usize,
    buffer: String,
}

impl<R: BufRead> FrameReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            buffer: String::new(),
        }
    }
}

impl<R: BufRead> Iterator for FrameReader<R> {
    type Item = (usize, Result<FrameRecord>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buffer.clear();
            self.line_number += 1;

            match self.reader.read_line(&mut self.buffer) {
                Ok(0) => return None,
                Ok(_) => {
                    let line = self.buffer.trim();
                    if line.is_empty() {
                        continue;
                    }
                    return Some((self.line_number, FrameRecord::parse(line)));
                }
                Err(e) => return Some((self.line_number, Err(e.into()))),
            }
        }
    }
}
