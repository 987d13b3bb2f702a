//! SFMesh stream reader with full and selective decoding.

use std::fs;
use std::path::Path;

use crate::error::{Result, SfMeshError};
use crate::io::compression;
use crate::io::container;
use crate::io::cursor::MeshCursor;
use crate::mesh::{MeshFile, MeshHeader, MeshObject, ObjectMetadata, Triangle, Vertex};
use crate::notification::{NotificationCollection, NotificationType};
use crate::types::{FormatVersion, OptionFlags, StreamType, Vector2, Vector3};

/// Compatibility policy for a reader.
///
/// Carried per reader, so decoders with different policies can coexist in
/// one process.
#[derive(Debug, Clone, Copy)]
pub struct DecoderConfig {
    /// Major format version this decoder understands. Streams with any
    /// other major are rejected; any minor within this major is
    /// accepted.
    pub supported_major: u8,

    /// Accept development (`type != 0`) streams.
    ///
    /// This only lifts the version gate. A development stream whose
    /// layout diverges from the released one fails with the ordinary
    /// structural errors; no alternative layout is guessed.
    pub accept_development: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            supported_major: FormatVersion::CURRENT.major,
            accept_development: false,
        }
    }
}

/// SFMesh reader over a raw (decompressed) mesh stream.
///
/// Constructors mirror the container layering: [`from_raw`] wraps mesh
/// bytes directly, [`from_compressed`] runs the compression adapter
/// first, [`from_text`] additionally strips the Base64 layer, and
/// [`from_file`] sniffs which container a file holds.
///
/// [`from_raw`]: MeshReader::from_raw
/// [`from_compressed`]: MeshReader::from_compressed
/// [`from_text`]: MeshReader::from_text
/// [`from_file`]: MeshReader::from_file
#[derive(Debug)]
pub struct MeshReader {
    data: Vec<u8>,
    config: DecoderConfig,
}

impl MeshReader {
    /// Wrap an already-decompressed mesh stream.
    pub fn from_raw(data: Vec<u8>) -> Self {
        Self {
            data,
            config: DecoderConfig::default(),
        }
    }

    /// Decompress a binary container payload and wrap the result.
    pub fn from_compressed(compressed: &[u8]) -> Result<Self> {
        Ok(Self::from_raw(compression::decompress(compressed)?))
    }

    /// Decode a text container payload (Base64 of the compressed
    /// stream).
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_compressed(&container::from_text(text)?)
    }

    /// Open a container file, sniffing the layout.
    ///
    /// A file whose content starts with the Lua `return` keyword is the
    /// text container; anything else is treated as compressed bytes.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(path)?;
        if is_lua_module(&bytes) {
            let source = std::str::from_utf8(&bytes)
                .map_err(|e| SfMeshError::InvalidEncoding(format!("module text: {e}")))?;
            Self::from_text(container::extract_lua_string(source)?)
        } else {
            Self::from_compressed(&bytes)
        }
    }

    /// Set the compatibility policy.
    pub fn with_config(mut self, config: DecoderConfig) -> Self {
        self.config = config;
        self
    }

    /// Parse and gate the header without touching the data section.
    pub fn read_header(&self) -> Result<MeshHeader> {
        let mut cursor = MeshCursor::new(&self.data);
        self.read_header_at(&mut cursor).map(|(header, _)| header)
    }

    /// Full decode. All-or-nothing: a short buffer fails with
    /// [`TruncatedInput`](SfMeshError::TruncatedInput), excess bytes with
    /// [`TrailingData`](SfMeshError::TrailingData).
    pub fn read(&self) -> Result<MeshFile> {
        let mut cursor = MeshCursor::new(&self.data);
        let (header, notifications) = self.read_header_at(&mut cursor)?;

        let mut objects = Vec::with_capacity(header.objects.len());
        for meta in &header.objects {
            let mut triangles = Vec::with_capacity(meta.triangle_count as usize);
            for _ in 0..meta.triangle_count {
                triangles.push(read_triangle(&mut cursor)?);
            }
            objects.push(MeshObject {
                name: meta.name.clone(),
                triangles,
            });
        }

        if !cursor.is_at_end() {
            return Err(SfMeshError::TrailingData {
                remaining: cursor.remaining(),
            });
        }

        Ok(MeshFile {
            version: header.version,
            options: header.options,
            objects,
            notifications,
        })
    }

    /// Selective decode: extract object `index` alone.
    ///
    /// The stream stores no offsets, so the data of every earlier object
    /// is passed over with an arithmetic cursor advance; none of its
    /// floats are parsed. Bytes after the selected object's data are the
    /// later objects' data and are not an error here, but the buffer must
    /// still cover every skipped and declared range.
    pub fn read_object(&self, index: usize) -> Result<MeshObject> {
        let mut cursor = MeshCursor::new(&self.data);
        let (header, _) = self.read_header_at(&mut cursor)?;

        if index >= header.objects.len() {
            return Err(SfMeshError::ObjectIndexOutOfRange {
                index,
                count: header.objects.len(),
            });
        }

        for meta in &header.objects[..index] {
            cursor.skip("triangle-data", meta.data_len())?;
        }

        let meta = &header.objects[index];
        let mut triangles = Vec::with_capacity(meta.triangle_count as usize);
        for _ in 0..meta.triangle_count {
            triangles.push(read_triangle(&mut cursor)?);
        }

        let rest: usize = header.objects[index + 1..]
            .iter()
            .map(|m| m.data_len())
            .sum();
        if cursor.remaining() < rest {
            return Err(SfMeshError::TruncatedInput {
                field: "triangle-data",
                needed: rest - cursor.remaining(),
            });
        }

        Ok(MeshObject {
            name: meta.name.clone(),
            triangles,
        })
    }

    /// Parse the header at the cursor, applying the version and option
    /// gates.
    fn read_header_at(
        &self,
        cursor: &mut MeshCursor,
    ) -> Result<(MeshHeader, NotificationCollection)> {
        let mut notifications = NotificationCollection::new();

        let major = cursor.read_u8("version.major")?;
        let minor = cursor.read_u8("version.minor")?;
        let stream_type = StreamType::from_wire(cursor.read_u8("version.type")?);
        let version = FormatVersion::new(major, minor, stream_type);

        if major != self.config.supported_major {
            return Err(SfMeshError::UnsupportedVersion(format!(
                "stream is {version}, decoder supports major {}",
                self.config.supported_major
            )));
        }
        if !stream_type.is_release() {
            if !self.config.accept_development {
                return Err(SfMeshError::UnsupportedVersion(format!(
                    "stream {version} is a development stream"
                )));
            }
            notifications.notify(
                NotificationType::Compatibility,
                format!("accepted development stream {version}"),
            );
        }
        if minor > FormatVersion::CURRENT.minor {
            notifications.notify(
                NotificationType::Compatibility,
                format!("stream minor version {minor} is newer than this build"),
            );
        }

        let raw_options = cursor.read_u32("options")?;
        let unknown = OptionFlags::unknown_bits(raw_options);
        if unknown != 0 {
            return Err(SfMeshError::UnknownRequiredOption { bits: unknown });
        }
        let options = OptionFlags::from_bits_truncate(raw_options);

        let num_objects = cursor.read_u32("num-objects")?;
        // Capacity clamped; the declared count is untrusted input.
        let mut objects = Vec::with_capacity(num_objects.min(1024) as usize);
        for _ in 0..num_objects {
            let name = cursor.read_string("object.name")?;
            let triangle_count = cursor.read_u16("object.triangle-count")?;
            objects.push(ObjectMetadata {
                name,
                triangle_count,
            });
        }

        Ok((
            MeshHeader {
                version,
                options,
                objects,
            },
            notifications,
        ))
    }
}

/// Whether file content looks like the Lua text container.
///
/// Tolerates a UTF-8 BOM and leading whitespace before `return`.
fn is_lua_module(bytes: &[u8]) -> bool {
    let mut rest = bytes;
    if let Some(stripped) = rest.strip_prefix(&[0xEF, 0xBB, 0xBF][..]) {
        rest = stripped;
    }
    while let [first, tail @ ..] = rest {
        if first.is_ascii_whitespace() {
            rest = tail;
        } else {
            break;
        }
    }
    rest.starts_with(b"return")
}

fn read_vector3(cursor: &mut MeshCursor, field: &'static str) -> Result<Vector3> {
    let x = cursor.read_f32(field)?;
    let y = cursor.read_f32(field)?;
    let z = cursor.read_f32(field)?;
    Ok(Vector3::new(x, y, z))
}

fn read_vertex(cursor: &mut MeshCursor) -> Result<Vertex> {
    let position = read_vector3(cursor, "vertex.position")?;
    let normal = read_vector3(cursor, "vertex.normal")?;
    let u = cursor.read_f32("vertex.uv")?;
    let v = cursor.read_f32("vertex.uv")?;
    let tangent = read_vector3(cursor, "vertex.tangent")?;
    Ok(Vertex::new(position, normal, Vector2::new(u, v), tangent))
}

fn read_triangle(cursor: &mut MeshCursor) -> Result<Triangle> {
    let a = read_vertex(cursor)?;
    let b = read_vertex(cursor)?;
    let c = read_vertex(cursor)?;
    Ok(Triangle::new(a, b, c))
}
