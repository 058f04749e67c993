//! Sample-domain trimming
//!
//! Trimming copies the selected frames of each channel verbatim. Nothing is
//! resampled, interpolated or rendered, so the retained samples are bit-identical
//! to the input.

use snip_core::{Result, SampleBuffer, SnipError, TimeRange};
use std::ops::Range;

/// Resolve `range` to a frame span of `buffer`
///
/// Both ends are clamped to `[0, frame_count]`. An end at or past the buffer's
/// duration resolves to `frame_count`, so `TimeRange::full` always covers every
/// frame regardless of float rounding in `frame_count / sample_rate`.
///
/// # Errors
/// Returns `SnipError::InvalidRange` if the clamped start is after the clamped end.
pub fn frame_span(buffer: &SampleBuffer, range: TimeRange) -> Result<Range<usize>> {
    let frame_count = buffer.frame_count();
    let duration = buffer.duration_secs();
    let sample_rate = buffer.sample_rate();

    let clamp = |secs: f64, frame: usize| {
        if secs >= duration {
            frame_count
        } else {
            frame.min(frame_count)
        }
    };

    let start_frame = clamp(range.start_secs, range.start_frame(sample_rate));
    let end_frame = clamp(range.end_secs, range.end_frame(sample_rate));

    if start_frame > end_frame {
        return Err(SnipError::InvalidRange {
            start_frame,
            end_frame,
        });
    }

    Ok(start_frame..end_frame)
}

/// Extract the frames selected by `range` into a new buffer
///
/// The result has the same sample rate and channel count as the input and
/// `end_frame - start_frame` frames.
///
/// # Errors
/// Returns `SnipError::InvalidRange` if the clamped start is after the clamped end.
pub fn trim(buffer: &SampleBuffer, range: TimeRange) -> Result<SampleBuffer> {
    let span = frame_span(buffer, range)?;

    let channels = buffer
        .channels()
        .iter()
        .map(|plane| plane[span.clone()].to_vec())
        .collect();

    SampleBuffer::new(buffer.sample_rate(), channels)
}
