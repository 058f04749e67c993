//! Domain types
mod audio;
mod range;

pub use audio::SampleBuffer;
pub use range::TimeRange;
