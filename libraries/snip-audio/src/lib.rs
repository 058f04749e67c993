//! Snip Audio
//!
//! Sample-domain trimming and PCM16 WAV encoding for Snip.
//!
//! This crate provides:
//! - Audio decoding via Symphonia (MP3, FLAC, OGG, WAV, AAC) into planar buffers
//! - Frame-exact trimming of a `SampleBuffer` by time range
//! - Interleaving, 16-bit quantization and canonical WAV serialization
//!
//! Everything except the decoder is pure: no I/O and no shared state.
//!
//! # Example: Trimming Audio
//!
//! ```rust
//! use snip_audio::{produce_trimmed_wav, WAV_HEADER_LEN};
//! use snip_core::{SampleBuffer, TimeRange};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // One second of mono audio at 8 kHz
//! let buffer = SampleBuffer::new(8000, vec![vec![0.5; 8000]])?;
//!
//! // Keep the first half
//! let wav = produce_trimmed_wav(&buffer, TimeRange::new(0.0, 0.5))?;
//! assert_eq!(wav.len(), WAV_HEADER_LEN + 4000 * 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Example: Decoding Audio
//!
//! ```rust,no_run
//! use snip_audio::SymphoniaDecoder;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let decoder = SymphoniaDecoder::new();
//! let buffer = decoder.decode_path(Path::new("/music/song.flac"))?;
//!
//! println!("Decoded {} frames at {} Hz", buffer.frame_count(), buffer.sample_rate());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]

mod decoder;
mod error;
pub mod interleave;
pub mod pcm16;
mod pipeline;
pub mod trim;
pub mod wav;

pub use decoder::SymphoniaDecoder;
pub use error::{AudioError, Result};
pub use interleave::interleave;
pub use pcm16::{encode_sample, encode_samples};
pub use pipeline::{produce_trimmed_wav, suggested_file_name};
pub use trim::{frame_span, trim};
pub use wav::{write_wav, WavHeader, WAV_HEADER_LEN};
