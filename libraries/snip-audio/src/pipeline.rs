//! Trim and encode in one call
//!
//! ```text
//! ┌──────────────┐   ┌─────────┐   ┌────────────┐   ┌────────┐   ┌────────────┐
//! │ SampleBuffer │ ─►│  trim   │ ─►│ interleave │ ─►│ pcm16  │ ─►│ write_wav  │ ─► Bytes
//! └──────────────┘   └─────────┘   └────────────┘   └────────┘   └────────────┘
//! ```

use crate::interleave::interleave;
use crate::pcm16::encode_samples;
use crate::trim::trim;
use crate::wav::write_wav;
use bytes::Bytes;
use snip_core::{Result, SampleBuffer, TimeRange};

/// Produce a PCM16 WAV file holding the frames of `buffer` selected by `range`
///
/// The input buffer is left untouched. Either the full file is returned or an
/// error, never a partial byte sequence.
///
/// # Errors
/// - `SnipError::InvalidRange` if the clamped start is after the clamped end
/// - `SnipError::EncodingTooLarge` if the result would not fit a WAV header
pub fn produce_trimmed_wav(buffer: &SampleBuffer, range: TimeRange) -> Result<Bytes> {
    let trimmed = trim(buffer, range)?;
    let samples = encode_samples(&interleave(&trimmed));
    let wav = write_wav(trimmed.sample_rate(), trimmed.channel_count(), &samples)?;

    tracing::debug!(
        start_secs = range.start_secs,
        end_secs = range.end_secs,
        frames = trimmed.frame_count(),
        channels = trimmed.channel_count(),
        bytes = wav.len(),
        "Encoded trimmed WAV"
    );

    Ok(wav)
}

/// Name offered for the trimmed file: `trimmed-<original_name>.wav`
pub fn suggested_file_name(original_name: &str) -> String {
    format!("trimmed-{}.wav", original_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wav::WAV_HEADER_LEN;
    use snip_core::SnipError;

    #[test]
    fn output_size_matches_selection() {
        let buffer = SampleBuffer::new(1000, vec![vec![0.25; 1000], vec![-0.25; 1000]]).unwrap();
        let wav = produce_trimmed_wav(&buffer, TimeRange::new(0.1, 0.6)).unwrap();
        assert_eq!(wav.len(), WAV_HEADER_LEN + 500 * 2 * 2);
    }

    #[test]
    fn invalid_range_propagates_unchanged() {
        let buffer = SampleBuffer::new(1000, vec![vec![0.0; 10_000]]).unwrap();
        let err = produce_trimmed_wav(&buffer, TimeRange::new(5.0, 2.0)).unwrap_err();
        assert!(matches!(
            err,
            SnipError::InvalidRange {
                start_frame: 5000,
                end_frame: 2000
            }
        ));
    }

    #[test]
    fn file_name_keeps_original_extension() {
        assert_eq!(suggested_file_name("song.mp3"), "trimmed-song.mp3.wav");
        assert_eq!(suggested_file_name("take"), "trimmed-take.wav");
    }
}
