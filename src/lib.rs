//! # sfmesh-rs
//!
//! A pure Rust library for reading and writing SFMesh files.
//!
//! SFMesh is a binary 3-D mesh interchange format built for environments
//! that embed compressed payloads inside text-like module files. A mesh
//! travels in one of two containers: a Lua text module carrying a Base64
//! payload (`.txt`) or the compressed bytes directly (`.sfmesh`). In both
//! cases the payload is a modified LZMA-ALONE stream whose embedded
//! length field always holds the true uncompressed size.
//!
//! ## Features
//!
//! - Read and write both containers (Lua text module and binary)
//! - Sequential-skip decoding: extract one object without parsing the
//!   triangle data of the objects before it
//! - Strict version and option gating with per-reader policy
//! - Typed errors for every failure layer
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sfmesh_rs::{ContainerMode, MeshFile, MeshObject, MeshReader, MeshWriter};
//!
//! // Read a mesh file
//! let mesh = MeshReader::from_file("model.txt")?.read()?;
//! for object in &mesh.objects {
//!     println!("{}: {} triangles", object.name, object.triangles.len());
//! }
//!
//! // Write one back out
//! let mut out = MeshFile::new();
//! out.add_object(MeshObject::new("Cube"));
//! MeshWriter::new(&out).write_to_file("out.txt", ContainerMode::Text)?;
//! # Ok::<(), sfmesh_rs::SfMeshError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`mesh::MeshFile`] — the owned document structure
//! - [`io::reader::MeshReader`] — container sniffing, decompression,
//!   full and selective decoding
//! - [`io::writer::MeshWriter`] — encoding into any container layout
//! - [`io::compression`] — the modified LZMA-ALONE adapter
//! - [`io::container`] — Base64 and Lua module transcoding

#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod io;
pub mod mesh;
pub mod notification;
pub mod types;

// Re-export commonly used types
pub use error::{Result, SfMeshError};
pub use types::{FormatVersion, OptionFlags, StreamType, Vector2, Vector3};

// Re-export mesh structures
pub use mesh::{MeshFile, MeshHeader, MeshObject, ObjectMetadata, Triangle, Vertex};

// Re-export diagnostics
pub use notification::{Notification, NotificationCollection, NotificationType};

// Re-export I/O types
pub use io::container::ContainerMode;
pub use io::{DecoderConfig, MeshReader, MeshWriter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
