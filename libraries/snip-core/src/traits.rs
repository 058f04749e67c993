//! Core traits for Snip
use crate::error::Result;
use crate::types::SampleBuffer;
use bytes::Bytes;
use std::path::Path;

/// Audio decoder trait
///
/// Implementers turn raw file bytes into a planar `SampleBuffer`. A decoder
/// keeps no state between calls: every call starts from scratch on the bytes
/// it is given.
pub trait AudioDecoder: Send {
    /// Decode an in-memory audio file
    ///
    /// `extension` is an optional format hint such as `"mp3"` or `"flac"`.
    ///
    /// # Errors
    /// Returns `SnipError::Decode` if the bytes are corrupt or the format is unsupported
    fn decode(&mut self, bytes: &[u8], extension: Option<&str>) -> Result<SampleBuffer>;

    /// Check if the decoder supports the given file format
    fn supports_format(&self, path: &Path) -> bool;

    /// Read a file from disk and decode it
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read, otherwise the same errors as `decode`
    fn decode_file(&mut self, path: &Path) -> Result<SampleBuffer> {
        let bytes = std::fs::read(path)?;
        let extension = path.extension().and_then(|e| e.to_str());
        self.decode(&bytes, extension)
    }
}

/// Output sink
///
/// Receives a finished file and makes it available to the user (a download,
/// a file on disk, an upload).
pub trait Sink: Send {
    /// Deliver `bytes` under the suggested `file_name`
    ///
    /// # Errors
    /// Returns an error if the output cannot be delivered
    fn deliver(&mut self, file_name: &str, bytes: Bytes) -> Result<()>;
}
