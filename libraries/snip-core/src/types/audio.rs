/// Audio-related types
use crate::error::{Result, SnipError};

/// Decoded audio held in memory
///
/// Samples are stored as f32, one plane per channel, nominally in the range
/// [-1.0, 1.0]. Values outside that range are kept as decoded; clamping happens
/// when the samples are quantized, never here.
///
/// A buffer is immutable once built. Trimming produces a new buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    sample_rate: u32,
    frame_count: usize,
    channels: Vec<Vec<f32>>,
}

impl SampleBuffer {
    /// Create a buffer from per-channel sample planes
    ///
    /// # Errors
    /// Returns `SnipError::InvalidBuffer` if the sample rate is zero, there are no
    /// channels, more channels than a WAV header can describe, or the planes
    /// differ in length.
    pub fn new(sample_rate: u32, channels: Vec<Vec<f32>>) -> Result<Self> {
        if sample_rate == 0 {
            return Err(SnipError::invalid_buffer("sample rate must be positive"));
        }
        if channels.is_empty() {
            return Err(SnipError::invalid_buffer("at least one channel is required"));
        }
        if channels.len() > usize::from(u16::MAX) {
            return Err(SnipError::invalid_buffer(format!(
                "{} channels exceed the maximum of {}",
                channels.len(),
                u16::MAX
            )));
        }

        let frame_count = channels[0].len();
        if let Some((index, plane)) = channels
            .iter()
            .enumerate()
            .find(|(_, plane)| plane.len() != frame_count)
        {
            return Err(SnipError::invalid_buffer(format!(
                "channel {} has {} frames, expected {}",
                index,
                plane.len(),
                frame_count
            )));
        }

        Ok(Self {
            sample_rate,
            frame_count,
            channels,
        })
    }

    /// Create a buffer by splitting interleaved samples `[L, R, L, R, ...]` into planes
    ///
    /// # Errors
    /// Returns `SnipError::InvalidBuffer` if `channel_count` is zero, the sample
    /// count is not a whole number of frames, or `new` would reject the planes.
    pub fn from_interleaved(sample_rate: u32, channel_count: u16, samples: &[f32]) -> Result<Self> {
        let channel_count = usize::from(channel_count);
        if channel_count == 0 {
            return Err(SnipError::invalid_buffer("at least one channel is required"));
        }
        if samples.len() % channel_count != 0 {
            return Err(SnipError::invalid_buffer(format!(
                "{} samples is not a whole number of {}-channel frames",
                samples.len(),
                channel_count
            )));
        }

        let frames = samples.len() / channel_count;
        let mut planes = vec![Vec::with_capacity(frames); channel_count];
        for frame in samples.chunks_exact(channel_count) {
            for (plane, &sample) in planes.iter_mut().zip(frame) {
                plane.push(sample);
            }
        }

        Self::new(sample_rate, planes)
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of channels (1 = mono, 2 = stereo, etc.)
    pub fn channel_count(&self) -> u16 {
        // new() rejects more than u16::MAX channels
        self.channels.len() as u16
    }

    /// Number of frames (samples per channel)
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Get the duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.frame_count as f64 / f64::from(self.sample_rate)
    }

    /// Samples of one channel, `None` if the index is out of range
    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    /// All channel planes in declared order
    pub fn channels(&self) -> &[Vec<f32>] {
        &self.channels
    }

    /// Check if the buffer holds no frames
    pub fn is_empty(&self) -> bool {
        self.frame_count == 0
    }

    /// Total number of samples across all channels
    pub fn len(&self) -> usize {
        self.frame_count * self.channels.len()
    }
}
