//! SFMesh stream writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::io::compression;
use crate::io::container::{self, ContainerMode};
use crate::io::cursor::MeshBuffer;
use crate::mesh::{MeshFile, MeshHeader, Vertex};

/// SFMesh writer: encodes a [`MeshFile`] into any of the container
/// layouts.
pub struct MeshWriter<'a> {
    mesh: &'a MeshFile,
}

impl<'a> MeshWriter<'a> {
    /// Create a writer for a mesh file.
    pub fn new(mesh: &'a MeshFile) -> Self {
        Self { mesh }
    }

    /// Encode the raw, uncompressed mesh stream.
    ///
    /// Triangle counts are validated up front, so no partial output
    /// escapes on [`TriangleCountOverflow`](crate::SfMeshError::TriangleCountOverflow).
    pub fn encode(&self) -> Result<Vec<u8>> {
        let header = self.mesh.header()?;

        let mut buf = MeshBuffer::with_capacity(MeshHeader::FIXED_SIZE + header.data_len());
        buf.write_u8(header.version.major);
        buf.write_u8(header.version.minor);
        buf.write_u8(header.version.stream_type.to_wire());
        buf.write_u32(header.options.bits());
        buf.write_u32(header.objects.len() as u32);
        for meta in &header.objects {
            buf.write_string(&meta.name);
            buf.write_u16(meta.triangle_count);
        }

        for object in &self.mesh.objects {
            for triangle in &object.triangles {
                for vertex in triangle.vertices() {
                    write_vertex(&mut buf, vertex);
                }
            }
        }

        Ok(buf.into_inner())
    }

    /// Encode and compress: the binary container payload.
    pub fn encode_compressed(&self) -> Result<Vec<u8>> {
        compression::compress(&self.encode()?)
    }

    /// Encode, compress and Base64: the text container payload.
    pub fn encode_text(&self) -> Result<String> {
        Ok(container::to_text(&self.encode_compressed()?))
    }

    /// Write a container file.
    ///
    /// [`ContainerMode::Text`] emits the Lua module shell around the
    /// Base64 payload; [`ContainerMode::Binary`] writes the compressed
    /// bytes as-is.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P, mode: ContainerMode) -> Result<()> {
        let mut file = File::create(path)?;
        match mode {
            ContainerMode::Text => {
                let module = container::wrap_lua_module(&self.encode_text()?);
                file.write_all(module.as_bytes())?;
            }
            ContainerMode::Binary => {
                file.write_all(&self.encode_compressed()?)?;
            }
        }
        Ok(())
    }
}

/// Field order on the wire: position, normal, uv, tangent.
fn write_vertex(buf: &mut MeshBuffer, vertex: &Vertex) {
    buf.write_f32(vertex.position.x);
    buf.write_f32(vertex.position.y);
    buf.write_f32(vertex.position.z);
    buf.write_f32(vertex.normal.x);
    buf.write_f32(vertex.normal.y);
    buf.write_f32(vertex.normal.z);
    buf.write_f32(vertex.uv.x);
    buf.write_f32(vertex.uv.y);
    buf.write_f32(vertex.tangent.x);
    buf.write_f32(vertex.tangent.y);
    buf.write_f32(vertex.tangent.z);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{MeshObject, Triangle};

    #[test]
    fn test_empty_mesh_is_fixed_header_only() {
        let mesh = MeshFile::new();
        let encoded = MeshWriter::new(&mesh).encode().unwrap();
        assert_eq!(encoded.len(), MeshHeader::FIXED_SIZE);
        // version 1.0 release, options 0, num-objects 0
        assert_eq!(encoded, vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_header_layout() {
        let mut mesh = MeshFile::new();
        mesh.add_object(MeshObject::with_triangles(
            "Ab",
            vec![Triangle::default(); 3],
        ));
        let encoded = MeshWriter::new(&mesh).encode().unwrap();

        // num-objects at offset 7
        assert_eq!(&encoded[7..11], &[1, 0, 0, 0]);
        // name-length, name, triangle-count
        assert_eq!(&encoded[11..15], &[2, 0, 0, 0]);
        assert_eq!(&encoded[15..17], b"Ab");
        assert_eq!(&encoded[17..19], &[3, 0]);
        assert_eq!(encoded.len(), 19 + 3 * Triangle::SIZE);
    }

    #[test]
    fn test_overflow_rejected_before_output() {
        let mut mesh = MeshFile::new();
        mesh.objects.push(MeshObject {
            name: "Big".into(),
            triangles: vec![Triangle::default(); 65536],
        });
        assert!(matches!(
            MeshWriter::new(&mesh).encode().unwrap_err(),
            crate::SfMeshError::TriangleCountOverflow { .. }
        ));
    }
}
