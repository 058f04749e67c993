//! Snip Core
//!
//! Platform-agnostic core types, traits, and error handling for Snip.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `SampleBuffer`, `TimeRange`
//! - **Core Traits**: `AudioDecoder`, `Sink`
//! - **Error Handling**: Unified `SnipError` and `Result` types
//!
//! Nothing in this crate performs I/O or holds shared state. Decoders and sinks
//! are supplied by the caller.
//!
//! # Example
//!
//! ```rust
//! use snip_core::{SampleBuffer, TimeRange};
//!
//! // One second of stereo silence at 8 kHz
//! let buffer = SampleBuffer::new(8000, vec![vec![0.0; 8000], vec![0.0; 8000]]).unwrap();
//! assert_eq!(buffer.channel_count(), 2);
//! assert_eq!(buffer.duration_secs(), 1.0);
//!
//! let range = TimeRange::new(0.25, 0.75);
//! assert_eq!(range.start_frame(buffer.sample_rate()), 2000);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Result, SnipError};
pub use traits::{AudioDecoder, Sink};
pub use types::{SampleBuffer, TimeRange};
