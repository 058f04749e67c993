//! Core error types for Snip
use thiserror::Error;

/// Result type alias using `SnipError`
pub type Result<T> = std::result::Result<T, SnipError>;

/// Core error type for Snip
#[derive(Error, Debug)]
pub enum SnipError {
    /// The input file could not be decoded (corrupt or unsupported)
    #[error("Decode error: {0}")]
    Decode(String),

    /// The requested range starts after it ends, after clamping to the buffer
    #[error("Invalid range: start frame {start_frame} is after end frame {end_frame}")]
    InvalidRange {
        /// Clamped start frame
        start_frame: usize,
        /// Clamped end frame
        end_frame: usize,
    },

    /// The encoded data does not fit in the WAV header fields
    #[error("Encoding too large: {data_bytes} bytes of sample data exceed the WAV header limit")]
    EncodingTooLarge {
        /// Size of the sample data that was requested
        data_bytes: u64,
    },

    /// A buffer was constructed in violation of its invariants
    #[error("Invalid audio buffer: {0}")]
    InvalidBuffer(String),

    /// The sink could not deliver the output
    #[error("Sink error: {0}")]
    Sink(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SnipError {
    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create an invalid buffer error
    pub fn invalid_buffer(msg: impl Into<String>) -> Self {
        Self::InvalidBuffer(msg.into())
    }

    /// Create a sink error
    pub fn sink(msg: impl Into<String>) -> Self {
        Self::Sink(msg.into())
    }

    /// Whether the error was caused by the requested time range
    pub fn is_invalid_range(&self) -> bool {
        matches!(self, Self::InvalidRange { .. })
    }
}
