//! Snip CLI Library
//!
//! Command-line front end for Snip: decodes an audio file, trims it to a time
//! range and writes the result as a 16-bit PCM WAV file.
//!
//! This library exposes the components behind the `snip` binary for testing.

pub mod commands;
pub mod config;
pub mod error;
pub mod session;
pub mod sink;

// Re-export commonly used types for convenience
pub use config::SnipConfig;
pub use error::{CliError, Result};
pub use session::{Generation, Selection, Session, Tagged};
pub use sink::FileSink;
