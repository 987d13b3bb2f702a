//! Shared builders for integration tests.

use sfmesh_rs::{MeshFile, MeshObject, Triangle, Vector2, Vector3, Vertex};

/// Deterministic vertex derived from a seed value.
pub fn vertex(seed: f32) -> Vertex {
    Vertex::new(
        Vector3::new(seed, seed + 0.25, seed - 0.5),
        Vector3::new(0.0, 0.0, 1.0),
        Vector2::new(seed * 0.5, 1.0 - seed * 0.5),
        Vector3::new(1.0, 0.0, 0.0),
    )
}

pub fn triangle(seed: f32) -> Triangle {
    Triangle::new(vertex(seed), vertex(seed + 1.0), vertex(seed + 2.0))
}

pub fn triangles(count: usize) -> Vec<Triangle> {
    (0..count).map(|i| triangle(i as f32 * 0.125)).collect()
}

/// One object named "Cube" with 12 triangles of fixed data.
pub fn cube_mesh() -> MeshFile {
    let mut mesh = MeshFile::new();
    mesh.add_object(MeshObject::with_triangles("Cube", triangles(12)));
    mesh
}

/// Several objects of varying sizes, including an empty one.
pub fn scene_mesh() -> MeshFile {
    let mut mesh = MeshFile::new();
    mesh.add_object(MeshObject::with_triangles("Floor", triangles(2)));
    mesh.add_object(MeshObject::new("Empty"));
    mesh.add_object(MeshObject::with_triangles("Cube", triangles(12)));
    mesh.add_object(MeshObject::with_triangles("Prop", triangles(5)));
    mesh
}
