//! In-memory representation of an SFMesh file.
//!
//! A [`MeshFile`] owns its objects and their triangle data outright; there
//! are no back-references or shared state between objects. Decoders build
//! one from a byte stream, encoders serialize one back out. Re-encoding
//! after edits means building a fresh `MeshFile`.
//!
//! # Wire layout
//! ```text
//! 0x00: major u8
//! 0x01: minor u8
//! 0x02: type u8
//! 0x03: options u32
//! 0x07: num-objects u32
//! 0x0B: per object: name-length u32 | name bytes | triangle-count u16
//! var:  triangle data, all objects concatenated in header order
//! ```
//!
//! Each vertex is 11 little-endian f32 fields (position, normal, uv,
//! tangent), each triangle three vertices. The data section carries no
//! offsets; the per-object triangle counts in the header are the only way
//! to locate an object's data.

use crate::error::{Result, SfMeshError};
use crate::notification::NotificationCollection;
use crate::types::{FormatVersion, OptionFlags, Vector2, Vector3};

/// Maximum triangles a single object may declare (u16 on the wire).
pub const MAX_TRIANGLES_PER_OBJECT: usize = u16::MAX as usize;

/// A single vertex: position, normal, UV and tangent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    pub position: Vector3,
    pub normal: Vector3,
    pub uv: Vector2,
    pub tangent: Vector3,
}

impl Vertex {
    /// Serialized size in bytes (11 × f32).
    pub const SIZE: usize = 44;

    /// Create a vertex.
    pub const fn new(position: Vector3, normal: Vector3, uv: Vector2, tangent: Vector3) -> Self {
        Self {
            position,
            normal,
            uv,
            tangent,
        }
    }
}

/// Exactly three vertices, contiguous on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Triangle(pub [Vertex; 3]);

impl Triangle {
    /// Serialized size in bytes.
    pub const SIZE: usize = Vertex::SIZE * 3;

    /// Create a triangle from three vertices.
    pub const fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        Triangle([a, b, c])
    }

    /// The three vertices.
    pub fn vertices(&self) -> &[Vertex; 3] {
        &self.0
    }
}

/// Per-object header record: name plus declared triangle count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectMetadata {
    /// Object name (UTF-8, u32 length prefix on the wire).
    pub name: String,
    /// Number of triangles this object contributes to the data section.
    pub triangle_count: u16,
}

impl ObjectMetadata {
    /// Byte length of this object's slice of the data section.
    pub fn data_len(&self) -> usize {
        self.triangle_count as usize * Triangle::SIZE
    }
}

/// A named object and the triangles it owns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshObject {
    pub name: String,
    pub triangles: Vec<Triangle>,
}

impl MeshObject {
    /// Create an empty object.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            triangles: Vec::new(),
        }
    }

    /// Create an object with triangle data.
    pub fn with_triangles(name: impl Into<String>, triangles: Vec<Triangle>) -> Self {
        Self {
            name: name.into(),
            triangles,
        }
    }

    /// Header record for this object.
    ///
    /// Fails with [`TriangleCountOverflow`](SfMeshError::TriangleCountOverflow)
    /// when the triangle count cannot be carried by the u16 wire field.
    pub fn metadata(&self) -> Result<ObjectMetadata> {
        if self.triangles.len() > MAX_TRIANGLES_PER_OBJECT {
            return Err(SfMeshError::TriangleCountOverflow {
                object: self.name.clone(),
                count: self.triangles.len(),
            });
        }
        Ok(ObjectMetadata {
            name: self.name.clone(),
            triangle_count: self.triangles.len() as u16,
        })
    }
}

/// Parsed stream header: version, options and object metadata in stream
/// order.
///
/// Header order equals data-section order; that ordering is the only
/// mechanism for locating an object's triangles.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshHeader {
    pub version: FormatVersion,
    pub options: OptionFlags,
    pub objects: Vec<ObjectMetadata>,
}

impl MeshHeader {
    /// Fixed leading part of the header: version (3) + options (4) +
    /// num-objects (4).
    pub const FIXED_SIZE: usize = 11;

    /// Total byte length of the data section the header declares.
    pub fn data_len(&self) -> usize {
        self.objects.iter().map(|o| o.data_len()).sum()
    }

    /// Total declared triangle count.
    pub fn triangle_count(&self) -> usize {
        self.objects
            .iter()
            .map(|o| o.triangle_count as usize)
            .sum()
    }
}

/// A complete SFMesh file.
#[derive(Debug, Clone, Default)]
pub struct MeshFile {
    /// Format version of the stream.
    pub version: FormatVersion,

    /// Option word (no bits assigned in format 1.x).
    pub options: OptionFlags,

    /// Objects in stream order.
    pub objects: Vec<MeshObject>,

    /// Notifications collected during the last read operation.
    pub notifications: NotificationCollection,
}

impl MeshFile {
    /// Create an empty mesh file at the current format version.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mesh file with a specific version.
    pub fn with_version(version: FormatVersion) -> Self {
        Self {
            version,
            ..Self::default()
        }
    }

    /// Append an object. Objects are serialized in insertion order.
    pub fn add_object(&mut self, object: MeshObject) {
        self.objects.push(object);
    }

    /// Number of objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Total triangle count across all objects.
    pub fn triangle_count(&self) -> usize {
        self.objects.iter().map(|o| o.triangles.len()).sum()
    }

    /// Look up an object by name (first match in stream order).
    pub fn object_by_name(&self, name: &str) -> Option<&MeshObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Build the stream header for this file.
    ///
    /// Validates every object's triangle count against the u16 limit.
    pub fn header(&self) -> Result<MeshHeader> {
        let objects = self
            .objects
            .iter()
            .map(|o| o.metadata())
            .collect::<Result<Vec<_>>>()?;
        Ok(MeshHeader {
            version: self.version,
            options: self.options,
            objects,
        })
    }
}

// Notifications are read diagnostics, not document state.
impl PartialEq for MeshFile {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
            && self.options == other.options
            && self.objects == other.objects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_sizes() {
        assert_eq!(Vertex::SIZE, 44);
        assert_eq!(Triangle::SIZE, 132);
        assert_eq!(MeshHeader::FIXED_SIZE, 11);
    }

    #[test]
    fn test_metadata_overflow() {
        let mut object = MeshObject::new("Big");
        object.triangles = vec![Triangle::default(); MAX_TRIANGLES_PER_OBJECT];
        assert_eq!(object.metadata().unwrap().triangle_count, u16::MAX);

        object.triangles.push(Triangle::default());
        let err = object.metadata().unwrap_err();
        assert!(matches!(
            err,
            SfMeshError::TriangleCountOverflow { count: 65536, .. }
        ));
    }

    #[test]
    fn test_header_data_len() {
        let mut mesh = MeshFile::new();
        mesh.add_object(MeshObject::with_triangles(
            "A",
            vec![Triangle::default(); 2],
        ));
        mesh.add_object(MeshObject::new("B"));
        let header = mesh.header().unwrap();
        assert_eq!(header.data_len(), 2 * Triangle::SIZE);
        assert_eq!(header.triangle_count(), 2);
    }

    #[test]
    fn test_object_lookup() {
        let mut mesh = MeshFile::new();
        mesh.add_object(MeshObject::new("Cube"));
        assert!(mesh.object_by_name("Cube").is_some());
        assert!(mesh.object_by_name("Sphere").is_none());
        assert_eq!(mesh.object_count(), 1);
    }
}
