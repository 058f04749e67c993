//! Subcommand implementations
//!
//! Decoding and encoding are CPU-bound and run on tokio's blocking pool.
//! A trim is three steps against one shared `Session`: `open` selects a file,
//! `render` encodes from the current selection, and `deliver` writes the result
//! only if that selection is still current.

use crate::error::{CliError, Result};
use crate::session::{Generation, Session, Tagged};
use crate::sink::FileSink;
use bytes::Bytes;
use snip_audio::{frame_span, produce_trimmed_wav, suggested_file_name, SymphoniaDecoder};
use snip_core::{AudioDecoder, SampleBuffer, Sink, TimeRange};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Requested selection in seconds, resolved against a decoded buffer
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RangeRequest {
    /// Start in seconds, defaults to 0
    pub start_secs: Option<f64>,
    /// End in seconds, defaults to the decoded duration
    pub end_secs: Option<f64>,
}

impl RangeRequest {
    pub fn new(start_secs: Option<f64>, end_secs: Option<f64>) -> Self {
        Self {
            start_secs,
            end_secs,
        }
    }

    /// Resolve the requested range against a decoded buffer
    pub fn resolve(&self, buffer: &SampleBuffer) -> TimeRange {
        TimeRange::new(
            self.start_secs.unwrap_or(0.0),
            self.end_secs.unwrap_or_else(|| buffer.duration_secs()),
        )
    }
}

/// Options for `snip trim`
#[derive(Debug, Clone)]
pub struct TrimRequest {
    pub input: PathBuf,
    pub range: RangeRequest,
}

/// A finished WAV waiting to be delivered
#[derive(Debug, Clone)]
pub struct Rendered {
    pub file_name: String,
    pub wav: Bytes,
}

/// Summary printed by `snip info`
#[derive(Debug, Clone, PartialEq)]
pub struct AudioInfo {
    pub sample_rate: u32,
    pub channels: u16,
    pub frames: usize,
    pub duration_secs: f64,
}

impl From<&SampleBuffer> for AudioInfo {
    fn from(buffer: &SampleBuffer) -> Self {
        Self {
            sample_rate: buffer.sample_rate(),
            channels: buffer.channel_count(),
            frames: buffer.frame_count(),
            duration_secs: buffer.duration_secs(),
        }
    }
}

/// Decode `path` off the async runtime
pub async fn decode(path: &Path) -> Result<SampleBuffer> {
    let path = path.to_path_buf();
    let buffer = tokio::task::spawn_blocking(move || {
        let mut decoder = SymphoniaDecoder::new();
        decoder.decode_file(&path)
    })
    .await??;

    Ok(buffer)
}

fn display_name(path: &Path) -> Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| CliError::Config(format!("{:?} does not name a file", path)))
}

/// Decode `input` and make it the current selection
///
/// Any result still being computed from the previous selection becomes stale.
pub async fn open(session: &Mutex<Session>, input: &Path) -> Result<Generation> {
    let name = display_name(input)?;
    tracing::info!(input = %input.display(), "Decoding");

    let buffer = decode(input).await?;
    Ok(session.lock().await.select(name, buffer))
}

/// Trim and encode the current selection
///
/// The session lock is released while encoding, so a new file may be selected
/// before the result comes back.
pub async fn render(session: &Mutex<Session>, range: RangeRequest) -> Result<Tagged<Rendered>> {
    let selection = session
        .lock()
        .await
        .current()
        .cloned()
        .ok_or(CliError::NothingSelected)?;

    let range = range.resolve(&selection.buffer);
    let span = frame_span(&selection.buffer, range)?;
    tracing::info!(
        start_frame = span.start,
        end_frame = span.end,
        sample_rate = selection.buffer.sample_rate(),
        "Trimming"
    );

    let worker = selection.clone();
    let wav = tokio::task::spawn_blocking(move || produce_trimmed_wav(&worker.buffer, range))
        .await??;

    Ok(selection.tag(Rendered {
        file_name: suggested_file_name(&selection.name),
        wav,
    }))
}

/// Hand a rendered file to `sink` if its selection is still current
///
/// # Errors
/// Returns `CliError::Stale` without touching the sink when another file was
/// selected (or the selection cleared) after `rendered` was produced.
pub async fn deliver(
    session: &Mutex<Session>,
    rendered: Tagged<Rendered>,
    sink: &mut FileSink,
) -> Result<PathBuf> {
    let generation = rendered.generation();
    let rendered = session
        .lock()
        .await
        .accept(rendered)
        .ok_or(CliError::Stale)?;

    tracing::debug!(?generation, file = %rendered.file_name, "Delivering");
    let path = sink.path_for(&rendered.file_name);
    sink.deliver(&rendered.file_name, rendered.wav)?;

    Ok(path)
}

/// Decode, trim and deliver one file; returns the path written
pub async fn trim(
    session: &Mutex<Session>,
    request: TrimRequest,
    sink: &mut FileSink,
) -> Result<PathBuf> {
    open(session, &request.input).await?;
    let rendered = render(session, request.range).await?;
    deliver(session, rendered, sink).await
}

/// Decode a file and describe it
pub async fn info(input: &Path) -> Result<AudioInfo> {
    let buffer = decode(input).await?;
    Ok(AudioInfo::from(&buffer))
}
