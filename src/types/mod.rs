//! Core wire-level types shared across the codec.

mod options;
mod vector;
mod version;

pub use options::OptionFlags;
pub use vector::{Vector2, Vector3};
pub use version::{FormatVersion, StreamType};
