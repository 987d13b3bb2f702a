//! Stream version triple and compatibility gating.
//!
//! Every SFMesh stream starts with three bytes: major, minor and a
//! release-type marker. Major bumps are breaking, minor bumps are
//! additive-only, and a nonzero type byte marks a development stream.

use std::fmt;

/// Release state carried in the third version byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamType {
    /// Released, stable stream layout (wire value 0).
    Release,
    /// Pre-release / development stream (any nonzero wire value).
    ///
    /// Development streams may diverge from the released layout in ways
    /// this library does not model; decoders reject them unless the
    /// caller explicitly opts in.
    Development(u8),
}

impl StreamType {
    /// Interpret the wire byte.
    pub fn from_wire(value: u8) -> Self {
        if value == 0 {
            StreamType::Release
        } else {
            StreamType::Development(value)
        }
    }

    /// The byte written to the stream.
    pub fn to_wire(self) -> u8 {
        match self {
            StreamType::Release => 0,
            StreamType::Development(value) => value,
        }
    }

    /// Whether this is a released stream.
    pub fn is_release(self) -> bool {
        matches!(self, StreamType::Release)
    }
}

/// Version triple at the start of every SFMesh stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatVersion {
    /// Breaking-change counter; a decoder accepts exactly one major.
    pub major: u8,
    /// Additive-change counter; any minor within a major is accepted.
    pub minor: u8,
    /// Release / development marker.
    pub stream_type: StreamType,
}

impl FormatVersion {
    /// Serialized size in bytes.
    pub const SIZE: usize = 3;

    /// Version written by this library.
    pub const CURRENT: FormatVersion = FormatVersion {
        major: 1,
        minor: 0,
        stream_type: StreamType::Release,
    };

    /// Create a version triple.
    pub const fn new(major: u8, minor: u8, stream_type: StreamType) -> Self {
        Self {
            major,
            minor,
            stream_type,
        }
    }

    /// Shorthand for a released version.
    pub const fn release(major: u8, minor: u8) -> Self {
        Self::new(major, minor, StreamType::Release)
    }
}

impl Default for FormatVersion {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stream_type {
            StreamType::Release => write!(f, "{}.{}", self.major, self.minor),
            StreamType::Development(value) => {
                write!(f, "{}.{}-dev{}", self.major, self.minor, value)
            }
        }
    }
}
