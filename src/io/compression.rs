//! LZMA "ALONE" compression adapter.
//!
//! The SFMesh containers store their payload as an LZMA ALONE stream
//! whose 8-byte uncompressed-length field always carries the true input
//! length. Stock encoders either leave the unknown-size marker there or
//! position the length elsewhere, while the consumer on the other side
//! reads the field verbatim. The adapter therefore patches bytes 5..13
//! of the encoder output after encoding, and verifies the field against
//! the produced byte count when decoding.
//!
//! # Stream layout
//! ```text
//! 0x00: properties byte (lc/lp/pb)
//! 0x01: dictionary size u32
//! 0x05: uncompressed length u64 (rewritten with the true length)
//! 0x0D: compressed data
//! ```

use lzma_rs::compress::{Options as CompressOptions, UnpackedSize as WriteUnpackedSize};
use lzma_rs::decompress::{Options as DecompressOptions, UnpackedSize as ReadUnpackedSize};
use lzma_rs::{lzma_compress_with_options, lzma_decompress_with_options};

use crate::error::{Result, SfMeshError};

/// Properties block size at the start of an ALONE stream.
pub const PROPS_SIZE: usize = 5;

/// Full ALONE header: properties plus the 8-byte uncompressed length.
pub const HEADER_SIZE: usize = 13;

/// Offset of the uncompressed-length field.
pub const UNPACKED_SIZE_OFFSET: usize = PROPS_SIZE;

/// Largest valid lc/lp/pb properties byte: (pb * 5 + lp) * 9 + lc with
/// lc < 9, lp < 5, pb < 5.
const MAX_PROPS_BYTE: u8 = 224;

/// Compress a buffer into the modified ALONE layout.
///
/// The uncompressed-length field is rewritten unconditionally; the
/// consumer trusts these 8 bytes, not whatever the encoder chose to put
/// there.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(HEADER_SIZE + input.len() / 2);
    let options = CompressOptions {
        unpacked_size: WriteUnpackedSize::WriteToHeader(Some(input.len() as u64)),
    };
    lzma_compress_with_options(&mut &input[..], &mut out, &options)?;

    out[UNPACKED_SIZE_OFFSET..HEADER_SIZE].copy_from_slice(&(input.len() as u64).to_le_bytes());
    Ok(out)
}

/// Decompress a stream in the modified ALONE layout.
///
/// The decoder honors the embedded length field; the produced byte count
/// is then verified against it, so a stream still carrying a stock
/// encoder's unknown-size marker fails with
/// [`LengthMismatch`](SfMeshError::LengthMismatch) instead of silently
/// decoding to some other size.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    if input.len() < HEADER_SIZE {
        return Err(SfMeshError::CorruptStream(format!(
            "stream is {} byte(s), ALONE header needs {}",
            input.len(),
            HEADER_SIZE
        )));
    }

    let props = input[0];
    if props > MAX_PROPS_BYTE {
        return Err(SfMeshError::UnsupportedStream(format!(
            "invalid LZMA properties byte {props:#04X}"
        )));
    }

    let mut length_field = [0u8; 8];
    length_field.copy_from_slice(&input[UNPACKED_SIZE_OFFSET..HEADER_SIZE]);
    let expected = u64::from_le_bytes(length_field);

    let mut out = Vec::new();
    let options = DecompressOptions {
        unpacked_size: ReadUnpackedSize::ReadFromHeader,
        ..DecompressOptions::default()
    };
    lzma_decompress_with_options(&mut &input[..], &mut out, &options)
        .map_err(|e| SfMeshError::CorruptStream(e.to_string()))?;

    if out.len() as u64 != expected {
        return Err(SfMeshError::LengthMismatch {
            expected,
            actual: out.len() as u64,
        });
    }
    Ok(out)
}
