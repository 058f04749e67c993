//! Planar to interleaved sample ordering

use snip_core::SampleBuffer;

/// Interleave the channel planes of `buffer`, frame-major and channel-minor
///
/// For frame `i` and channel `j` the output holds `channels[j][i]` at
/// `i * channel_count + j`, which is the sample order of a PCM WAV data chunk.
pub fn interleave(buffer: &SampleBuffer) -> Vec<f32> {
    let planes = buffer.channels();
    let mut interleaved = Vec::with_capacity(buffer.len());

    for frame in 0..buffer.frame_count() {
        for plane in planes {
            interleaved.push(plane[frame]);
        }
    }

    interleaved
}
