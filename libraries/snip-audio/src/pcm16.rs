//! Float to signed 16-bit PCM quantization
//!
//! Negative samples scale by 32768 and positive samples by 32767 so that both
//! -1.0 and 1.0 reach full scale. This is the usual signed-16 convention and
//! the asymmetry is deliberate.

/// Scale applied to negative samples
pub const NEGATIVE_FULL_SCALE: f64 = 32768.0;

/// Scale applied to zero and positive samples
pub const POSITIVE_FULL_SCALE: f64 = 32767.0;

/// Encode one float sample as a signed 16-bit code
///
/// The input is clamped to [-1.0, 1.0] first, then scaled in f64 and rounded
/// half away from zero. f32 cannot hold `x * 32767` exactly, so the product is
/// never formed at f32 precision. NaN encodes to 0.
pub fn encode_sample(x: f32) -> i16 {
    let x = f64::from(x.clamp(-1.0, 1.0));
    let scaled = if x < 0.0 {
        (x * NEGATIVE_FULL_SCALE).round()
    } else {
        (x * POSITIVE_FULL_SCALE).round()
    };
    // already within [-32768, 32767]; the cast saturates regardless
    scaled as i16
}

/// Encode a run of samples, preserving order
pub fn encode_samples(samples: &[f32]) -> Vec<i16> {
    samples.iter().copied().map(encode_sample).collect()
}
