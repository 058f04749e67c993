/// Audio decoder implementation using Symphonia
use crate::error::{AudioError, Result};
use snip_core::{AudioDecoder as AudioDecoderTrait, SampleBuffer};
use std::io::Cursor;
use std::path::Path;
use symphonia::core::audio::{AudioBuffer, AudioBufferRef, Signal};
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::sample::Sample;

/// File extensions the bundled Symphonia codecs handle
const SUPPORTED_EXTENSIONS: &[&str] = &["mp3", "flac", "ogg", "oga", "wav", "m4a", "aac", "mp4"];

/// Audio decoder using Symphonia
///
/// Supports: MP3, FLAC, OGG/Vorbis, WAV, AAC
///
/// Decodes the whole file into memory. Channels are kept as separate planes in
/// the order the file declares them; nothing is downmixed or resampled.
#[derive(Debug, Default)]
pub struct SymphoniaDecoder;

impl SymphoniaDecoder {
    /// Create a new decoder
    pub fn new() -> Self {
        Self
    }

    /// Decode a file on disk
    pub fn decode_path(&self, path: &Path) -> Result<SampleBuffer> {
        if !path.exists() {
            return Err(AudioError::FileNotFound(path.display().to_string()));
        }

        let bytes = std::fs::read(path)?;
        let extension = path.extension().and_then(|e| e.to_str());
        self.decode_bytes(bytes, extension)
    }

    /// Decode an in-memory file
    pub fn decode_bytes(&self, bytes: Vec<u8>, extension: Option<&str>) -> Result<SampleBuffer> {
        let mss = MediaSourceStream::new(Box::new(Cursor::new(bytes)), Default::default());

        // Create a hint to help the format registry guess the format
        let mut hint = Hint::new();
        if let Some(ext) = extension {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| match e {
                SymphoniaError::Unsupported(what) => AudioError::UnsupportedFormat(what.to_string()),
                other => AudioError::Symphonia(format!("Failed to probe file: {}", other)),
            })?;

        let mut format = probed.format;

        let track = format
            .tracks()
            .iter()
            .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
            .ok_or(AudioError::NoAudioTrack)?;

        let track_id = track.id;
        let mut sample_rate = track.codec_params.sample_rate;
        let mut planes: Vec<Vec<f32>> = track
            .codec_params
            .channels
            .map(|c| vec![Vec::new(); c.count()])
            .unwrap_or_default();
        // `n_frames` comes from the container header and is not trusted for
        // allocation; streaming writers leave it at 0xFFFFFFFF

        let mut decoder = symphonia::default::get_codecs()
            .make(&track.codec_params, &DecoderOptions::default())
            .map_err(|e| AudioError::Symphonia(format!("Failed to create decoder: {}", e)))?;

        loop {
            let packet = match format.next_packet() {
                Ok(packet) => packet,
                Err(SymphoniaError::IoError(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                    break;
                }
                Err(SymphoniaError::ResetRequired) => {
                    decoder.reset();
                    continue;
                }
                Err(e) => {
                    return Err(AudioError::Symphonia(format!("Error reading packet: {}", e)));
                }
            };

            // Skip packets that are not for our track
            if packet.track_id() != track_id {
                continue;
            }

            let decoded = match decoder.decode(&packet) {
                Ok(decoded) => decoded,
                Err(SymphoniaError::DecodeError(e)) => {
                    // Corrupt packets are skipped, the rest of the stream is still usable
                    tracing::warn!(error = e, "Skipping undecodable packet");
                    continue;
                }
                Err(e) => return Err(AudioError::DecodeError(e.to_string())),
            };

            let spec = *decoded.spec();
            sample_rate.get_or_insert(spec.rate);
            if planes.is_empty() {
                planes = vec![Vec::new(); spec.channels.count()];
            }
            if planes.len() != spec.channels.count() {
                return Err(AudioError::DecodeError(format!(
                    "channel count changed mid-stream from {} to {}",
                    planes.len(),
                    spec.channels.count()
                )));
            }

            Self::append_planes(decoded, &mut planes);
        }

        let sample_rate = sample_rate
            .ok_or_else(|| AudioError::DecodeError("Unknown sample rate".to_string()))?;
        if planes.is_empty() {
            return Err(AudioError::DecodeError("Unknown channel layout".to_string()));
        }

        tracing::debug!(
            sample_rate,
            channels = planes.len(),
            frames = planes[0].len(),
            "Decoded audio"
        );

        SampleBuffer::new(sample_rate, planes).map_err(|e| AudioError::DecodeError(e.to_string()))
    }

    /// Convert a Symphonia buffer to f32 and append it plane by plane
    ///
    /// Signed integers use symmetric scaling (divide by 2^(N-1)), so -full-scale
    /// maps to exactly -1.0. Float input is passed through untouched.
    fn append_planes(decoded: AudioBufferRef, planes: &mut [Vec<f32>]) {
        match decoded {
            AudioBufferRef::F32(buf) => Self::extend(&*buf, planes, |s| s),
            AudioBufferRef::F64(buf) => Self::extend(&*buf, planes, |s| s as f32),
            AudioBufferRef::S32(buf) => Self::extend(&*buf, planes, |s| s as f32 / 2147483648.0),
            AudioBufferRef::S24(buf) => {
                Self::extend(&*buf, planes, |s| s.inner() as f32 / 8388608.0);
            }
            AudioBufferRef::S16(buf) => Self::extend(&*buf, planes, |s| f32::from(s) / 32768.0),
            AudioBufferRef::S8(buf) => Self::extend(&*buf, planes, |s| f32::from(s) / 128.0),
            AudioBufferRef::U32(buf) => {
                Self::extend(&*buf, planes, |s| (s as f64 / 2147483648.0 - 1.0) as f32);
            }
            AudioBufferRef::U24(buf) => {
                Self::extend(&*buf, planes, |s| s.inner() as f32 / 8388608.0 - 1.0);
            }
            AudioBufferRef::U16(buf) => Self::extend(&*buf, planes, |s| f32::from(s) / 32768.0 - 1.0),
            AudioBufferRef::U8(buf) => Self::extend(&*buf, planes, |s| f32::from(s) / 128.0 - 1.0),
        }
    }

    fn extend<T, F>(buf: &AudioBuffer<T>, planes: &mut [Vec<f32>], normalize: F)
    where
        T: Sample + Copy,
        F: Fn(T) -> f32,
    {
        for (index, plane) in planes.iter_mut().enumerate() {
            plane.extend(buf.chan(index).iter().copied().map(&normalize));
        }
    }
}

impl AudioDecoderTrait for SymphoniaDecoder {
    fn decode(&mut self, bytes: &[u8], extension: Option<&str>) -> snip_core::Result<SampleBuffer> {
        Ok(self.decode_bytes(bytes.to_vec(), extension)?)
    }

    fn supports_format(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
            .unwrap_or(false)
    }

    fn decode_file(&mut self, path: &Path) -> snip_core::Result<SampleBuffer> {
        Ok(self.decode_path(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supports_common_formats() {
        let decoder = SymphoniaDecoder::new();
        assert!(decoder.supports_format(Path::new("test.mp3")));
        assert!(decoder.supports_format(Path::new("test.FLAC")));
        assert!(decoder.supports_format(Path::new("test.ogg")));
        assert!(decoder.supports_format(Path::new("test.wav")));
        assert!(!decoder.supports_format(Path::new("test.txt")));
        assert!(!decoder.supports_format(Path::new("no_extension")));
    }

    #[test]
    fn decode_nonexistent_file_returns_error() {
        let decoder = SymphoniaDecoder::new();
        let result = decoder.decode_path(Path::new("/nonexistent/file.mp3"));
        assert!(matches!(result, Err(AudioError::FileNotFound(_))));
    }

    /// 8-bit mono WAV whose RIFF and data chunk sizes claim u32::MAX bytes
    fn wav_with_unbounded_data_chunk(payload: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&u32::MAX.to_le_bytes());
        bytes.extend_from_slice(b"WAVE");
        bytes.extend_from_slice(b"fmt ");
        bytes.extend_from_slice(&16u32.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
        bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
        bytes.extend_from_slice(&8000u32.to_le_bytes());
        bytes.extend_from_slice(&8000u32.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&8u16.to_le_bytes());
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&u32::MAX.to_le_bytes());
        bytes.extend_from_slice(payload);
        bytes
    }

    #[test]
    fn oversized_data_chunk_header_does_not_abort() {
        let decoder = SymphoniaDecoder::new();
        let bytes = wav_with_unbounded_data_chunk(&[0x80, 0xFF, 0x00, 0x80]);

        // Either outcome is acceptable as long as it is a value
        match decoder.decode_bytes(bytes, Some("wav")) {
            Ok(buffer) => {
                assert_eq!(buffer.channel_count(), 1);
                assert!(buffer.frame_count() <= 4);
            }
            Err(err) => {
                let err: snip_core::SnipError = err.into();
                assert!(matches!(err, snip_core::SnipError::Decode(_)));
            }
        }
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let mut decoder = SymphoniaDecoder::new();
        let err = decoder
            .decode(b"definitely not audio", Some("wav"))
            .unwrap_err();
        assert!(matches!(err, snip_core::SnipError::Decode(_)));
    }
}
