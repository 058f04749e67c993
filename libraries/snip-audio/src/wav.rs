//! Canonical 44-byte-header PCM16 WAV container
//!
//! Layout (all integers little-endian):
//!
//! ```text
//! 0   "RIFF"            4   36 + data_bytes   8   "WAVE"
//! 12  "fmt "            16  16                20  1 (PCM)
//! 22  channels          24  sample_rate       28  byte_rate
//! 32  block_align       34  16 (bits)         36  "data"
//! 40  data_bytes        44  samples...
//! ```

use bytes::{BufMut, Bytes, BytesMut};
use snip_core::{Result, SnipError};

/// Size of the header written before the sample data
pub const WAV_HEADER_LEN: usize = 44;

/// Bits per encoded sample
pub const BITS_PER_SAMPLE: u16 = 16;

const BYTES_PER_SAMPLE: u16 = BITS_PER_SAMPLE / 8;
const FMT_CHUNK_LEN: u32 = 16;
const FORMAT_PCM: u16 = 1;
const RIFF_OVERHEAD: u32 = 36;

/// Header fields of a PCM16 WAV file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// Number of interleaved channels
    pub channels: u16,
    /// Frames per second
    pub sample_rate: u32,
    /// `sample_rate * block_align`
    pub byte_rate: u32,
    /// Bytes per frame, `channels * 2`
    pub block_align: u16,
    /// Length of the data chunk in bytes
    pub data_bytes: u32,
}

impl WavHeader {
    /// Compute the header for `sample_count` interleaved samples
    ///
    /// # Errors
    /// Returns `SnipError::EncodingTooLarge` if the RIFF chunk size, byte rate or
    /// block align would overflow its header field.
    pub fn new(sample_rate: u32, channels: u16, sample_count: usize) -> Result<Self> {
        let requested = (sample_count as u64).saturating_mul(u64::from(BYTES_PER_SAMPLE));
        let too_large = || SnipError::EncodingTooLarge {
            data_bytes: requested,
        };

        let data_bytes = u32::try_from(requested).map_err(|_| too_large())?;
        data_bytes.checked_add(RIFF_OVERHEAD).ok_or_else(too_large)?;

        let block_align = channels.checked_mul(BYTES_PER_SAMPLE).ok_or_else(too_large)?;
        let byte_rate = sample_rate
            .checked_mul(u32::from(block_align))
            .ok_or_else(too_large)?;

        Ok(Self {
            channels,
            sample_rate,
            byte_rate,
            block_align,
            data_bytes,
        })
    }

    /// RIFF chunk size, everything after the first 8 bytes
    pub fn chunk_size(&self) -> u32 {
        // new() checked this addition
        RIFF_OVERHEAD + self.data_bytes
    }

    /// Total file length, header included
    pub fn file_len(&self) -> usize {
        WAV_HEADER_LEN + self.data_bytes as usize
    }

    /// Append the 44 header bytes to `buf`
    pub fn write_to(&self, buf: &mut impl BufMut) {
        buf.put_slice(b"RIFF");
        buf.put_u32_le(self.chunk_size());
        buf.put_slice(b"WAVE");

        buf.put_slice(b"fmt ");
        buf.put_u32_le(FMT_CHUNK_LEN);
        buf.put_u16_le(FORMAT_PCM);
        buf.put_u16_le(self.channels);
        buf.put_u32_le(self.sample_rate);
        buf.put_u32_le(self.byte_rate);
        buf.put_u16_le(self.block_align);
        buf.put_u16_le(BITS_PER_SAMPLE);

        buf.put_slice(b"data");
        buf.put_u32_le(self.data_bytes);
    }
}

/// Serialize interleaved PCM16 samples into a complete WAV file
///
/// Samples are written in the order given; the caller is responsible for
/// interleaving.
///
/// # Errors
/// Returns `SnipError::EncodingTooLarge` if the data does not fit the header
/// fields. No bytes are produced in that case.
pub fn write_wav(sample_rate: u32, channels: u16, samples: &[i16]) -> Result<Bytes> {
    let header = WavHeader::new(sample_rate, channels, samples.len())?;

    let mut buf = BytesMut::with_capacity(header.file_len());
    header.write_to(&mut buf);
    for &sample in samples {
        buf.put_i16_le(sample);
    }

    Ok(buf.freeze())
}
