//! WAV interoperability tests
//!
//! The encoded bytes must be readable by independent WAV readers:
//! - hound (WavSpec fields and raw i16 samples)
//! - Symphonia, through `SymphoniaDecoder` (decode, trim again, re-encode)

use snip_audio::{encode_samples, interleave, produce_trimmed_wav, SymphoniaDecoder};
use snip_core::{AudioDecoder, SampleBuffer, TimeRange};
use std::f32::consts::PI;
use std::io::Cursor;

const SAMPLE_RATE: u32 = 44_100;

/// Generate a deterministic stereo pattern: sine left, inverted ramp right
fn generate_test_pattern(frames: usize) -> SampleBuffer {
    let left = (0..frames)
        .map(|i| 0.6 * (2.0 * PI * 440.0 * i as f32 / SAMPLE_RATE as f32).sin())
        .collect();
    let right = (0..frames)
        .map(|i| -((i as f32 / frames as f32) * 2.0 - 1.0))
        .collect();
    SampleBuffer::new(SAMPLE_RATE, vec![left, right]).unwrap()
}

#[test]
fn test_hound_reads_spec_and_samples() {
    let buffer = generate_test_pattern(4410);
    let range = TimeRange::new(0.02, 0.07);
    let wav = produce_trimmed_wav(&buffer, range).unwrap();

    let mut reader = hound::WavReader::new(Cursor::new(wav.to_vec())).expect("hound parses output");
    let spec = reader.spec();
    assert_eq!(spec.channels, 2);
    assert_eq!(spec.sample_rate, SAMPLE_RATE);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);

    let read: Vec<i16> = reader
        .samples::<i16>()
        .collect::<Result<_, _>>()
        .expect("all samples readable");

    let trimmed = snip_audio::trim(&buffer, range).unwrap();
    let expected = encode_samples(&interleave(&trimmed));
    assert_eq!(read.len(), trimmed.frame_count() * 2);
    assert_eq!(read, expected);
}

#[test]
fn test_hound_reads_empty_output() {
    let buffer = generate_test_pattern(100);
    let wav = produce_trimmed_wav(&buffer, TimeRange::new(0.001, 0.001)).unwrap();

    let reader = hound::WavReader::new(Cursor::new(wav.to_vec())).expect("hound parses empty file");
    assert_eq!(reader.len(), 0);
    assert_eq!(reader.spec().channels, 2);
}

#[test]
fn test_symphonia_round_trip_preserves_codes() {
    let buffer = generate_test_pattern(2205);
    let wav = produce_trimmed_wav(&buffer, TimeRange::full(&buffer)).unwrap();

    let mut decoder = SymphoniaDecoder::new();
    let decoded = decoder.decode(&wav, Some("wav")).expect("symphonia decodes output");

    assert_eq!(decoded.sample_rate(), SAMPLE_RATE);
    assert_eq!(decoded.channel_count(), 2);
    assert_eq!(decoded.frame_count(), 2205);

    // Symphonia scales i16 by 1/32768, so codes come back exactly
    let original = encode_samples(&interleave(&buffer));
    let round_tripped: Vec<i16> = interleave(&decoded)
        .iter()
        .map(|&s| (s * 32768.0).round() as i16)
        .collect();
    assert_eq!(round_tripped, original);
}

#[test]
fn test_symphonia_preserves_channel_order() {
    let buffer = SampleBuffer::new(8000, vec![vec![0.5; 800], vec![-0.25; 800]]).unwrap();
    let wav = produce_trimmed_wav(&buffer, TimeRange::full(&buffer)).unwrap();

    let decoded = SymphoniaDecoder::new()
        .decode_bytes(wav.to_vec(), Some("wav"))
        .expect("symphonia decodes stereo output");

    assert_eq!(decoded.channel_count(), 2);
    assert!((decoded.channel(0).unwrap()[0] - 0.5).abs() < 1e-4);
    assert!((decoded.channel(1).unwrap()[0] + 0.25).abs() < 1e-4);
}

#[test]
fn test_hound_reads_multichannel_order() {
    let buffer = SampleBuffer::new(
        8000,
        vec![vec![1.0; 10], vec![-1.0; 10], vec![0.0; 10], vec![0.5; 10]],
    )
    .unwrap();
    let wav = produce_trimmed_wav(&buffer, TimeRange::full(&buffer)).unwrap();

    let mut reader = hound::WavReader::new(Cursor::new(wav.to_vec())).expect("hound parses output");
    assert_eq!(reader.spec().channels, 4);

    let read: Vec<i16> = reader.samples::<i16>().map(Result::unwrap).collect();
    assert_eq!(&read[..8], &[32767, -32768, 0, 16384, 32767, -32768, 0, 16384]);
}

#[test]
fn test_decode_trim_decode() {
    // Decode a file we wrote, trim the decoded buffer again, and check the second cut
    let buffer = generate_test_pattern(44_100);
    let first = produce_trimmed_wav(&buffer, TimeRange::new(0.25, 0.75)).unwrap();

    let mut decoder = SymphoniaDecoder::new();
    let decoded = decoder.decode(&first, Some("wav")).unwrap();
    assert_eq!(decoded.frame_count(), 22_050);

    let second = produce_trimmed_wav(&decoded, TimeRange::new(0.0, 0.25)).unwrap();
    let again = decoder.decode(&second, Some("wav")).unwrap();
    assert_eq!(again.frame_count(), 11_025);

    // Positive samples requantize by at most one code
    let tolerance = 1.5 / 32768.0;
    for (a, b) in again.channel(0).unwrap().iter().zip(decoded.channel(0).unwrap()) {
        assert!((a - b).abs() <= tolerance, "{} vs {}", a, b);
    }
}
