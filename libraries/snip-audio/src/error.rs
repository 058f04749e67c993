/// Decoder-specific errors
use thiserror::Error;

/// Result type alias using `AudioError`
pub type Result<T> = std::result::Result<T, AudioError>;

/// Audio error types
#[derive(Error, Debug)]
pub enum AudioError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The container holds no decodable audio track
    #[error("No audio tracks found")]
    NoAudioTrack,

    /// Decoding error
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Symphonia error
    #[error("Symphonia error: {0}")]
    Symphonia(String),
}

impl From<AudioError> for snip_core::SnipError {
    fn from(err: AudioError) -> Self {
        match err {
            AudioError::Io(e) => snip_core::SnipError::Io(e),
            other => snip_core::SnipError::decode(other.to_string()),
        }
    }
}
