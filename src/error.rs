//! Error types for the sfmesh library

use std::io;
use thiserror::Error;

/// Main error type for SFMesh operations
#[derive(Debug, Error)]
pub enum SfMeshError {
    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Buffer ended before a field could be fully read
    #[error("truncated input: {needed} more byte(s) needed for {field}")]
    TruncatedInput {
        field: &'static str,
        needed: usize,
    },

    /// Bytes remain after the declared structure was fully decoded
    #[error("trailing data: {remaining} byte(s) past the declared structure")]
    TrailingData { remaining: usize },

    /// Stream version this decoder cannot accept
    #[error("unsupported version: {0}")]
    UnsupportedVersion(String),

    /// Option bits set that this decoder does not understand
    #[error("unknown required option bits: {bits:#010X}")]
    UnknownRequiredOption { bits: u32 },

    /// Structurally invalid compressed data
    #[error("corrupt stream: {0}")]
    CorruptStream(String),

    /// Embedded uncompressed length disagrees with the decompressed size
    #[error("length mismatch: header declares {expected} byte(s), stream decompressed to {actual}")]
    LengthMismatch { expected: u64, actual: u64 },

    /// Compression configuration the adapter cannot decode
    #[error("unsupported stream: {0}")]
    UnsupportedStream(String),

    /// Malformed container encoding (Base64 or module text)
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// Object declares more triangles than the u16 wire field can carry
    #[error("object \"{object}\" has {count} triangles, limit is 65535")]
    TriangleCountOverflow { object: String, count: usize },

    /// Selective decode asked for an object the header does not declare
    #[error("object index {index} out of range, header declares {count} object(s)")]
    ObjectIndexOutOfRange { index: usize, count: usize },
}

/// Result type alias for SFMesh operations
pub type Result<T> = std::result::Result<T, SfMeshError>;
