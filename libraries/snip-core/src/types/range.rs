/// Time range selection
use super::SampleBuffer;
use serde::{Deserialize, Serialize};

/// A start/end selection in seconds
///
/// Construction does not validate the range. The trimmer clamps both ends to
/// the buffer and rejects a start that lands after the end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Start of the selection in seconds
    pub start_secs: f64,

    /// End of the selection in seconds (exclusive)
    pub end_secs: f64,
}

impl TimeRange {
    /// Create a new time range
    pub fn new(start_secs: f64, end_secs: f64) -> Self {
        Self {
            start_secs,
            end_secs,
        }
    }

    /// The whole of `buffer`, from zero to its duration
    pub fn full(buffer: &SampleBuffer) -> Self {
        Self::new(0.0, buffer.duration_secs())
    }

    /// `floor(start_secs * sample_rate)`
    ///
    /// Negative and NaN inputs map to frame 0.
    pub fn start_frame(&self, sample_rate: u32) -> usize {
        seconds_to_frame(self.start_secs, sample_rate)
    }

    /// `floor(end_secs * sample_rate)`
    ///
    /// Negative and NaN inputs map to frame 0.
    pub fn end_frame(&self, sample_rate: u32) -> usize {
        seconds_to_frame(self.end_secs, sample_rate)
    }

    /// Length of the selection in seconds (may be negative for a reversed range)
    pub fn length_secs(&self) -> f64 {
        self.end_secs - self.start_secs
    }
}

fn seconds_to_frame(secs: f64, sample_rate: u32) -> usize {
    // float-to-int `as` saturates: negatives become 0, NaN becomes 0
    (secs * f64::from(sample_rate)).floor() as usize
}
