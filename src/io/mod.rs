//! Container, compression and mesh stream I/O.
//!
//! Decoding layers: [`container`] (Base64 / Lua module text) →
//! [`compression`] (modified LZMA-ALONE) → [`reader`] (mesh structure).
//! Encoding mirrors it through [`writer`].

pub mod compression;
pub mod container;
pub mod cursor;
pub mod reader;
pub mod writer;

pub use reader::{DecoderConfig, MeshReader};
pub use writer::MeshWriter;
