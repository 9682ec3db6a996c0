//! Collision shape derivation from raw mesh data.
//!
//! Static environment geometry gets exact triangle meshes (large, rarely
//! moving, so the trimesh cost is acceptable); dynamic actor parts get cheap
//! axis-aligned boxes derived from bounding volumes, which keeps the solver
//! stable. A mesh that cannot produce a shape yields a typed
//! [`GeometryError`] — never a defaulted empty shape.

use nalgebra::Point3;
use rapier3d::prelude::SharedShape;

use strut_core::error::GeometryError;
use strut_scene::types::MeshData;

// ---------------------------------------------------------------------------
// trimesh_from_mesh
// ---------------------------------------------------------------------------

/// Build an exact triangle-mesh shape from a node's vertex and index buffers.
///
/// # Errors
///
/// Returns [`GeometryError`] if either buffer is missing, truncated, or any
/// index references a vertex outside the position buffer.
pub fn trimesh_from_mesh(mesh: &MeshData) -> Result<SharedShape, GeometryError> {
    if mesh.positions.is_empty() {
        return Err(GeometryError::MissingPositions);
    }
    if mesh.positions.len() % 3 != 0 {
        return Err(GeometryError::TruncatedPositions(mesh.positions.len()));
    }

    let indices = match &mesh.indices {
        Some(indices) if !indices.is_empty() => indices,
        _ => return Err(GeometryError::MissingIndices),
    };
    if indices.len() % 3 != 0 {
        return Err(GeometryError::TruncatedIndices(indices.len()));
    }

    let vertex_count = u32::try_from(mesh.vertex_count()).unwrap_or(u32::MAX);
    if let Some(&index) = indices.iter().find(|&&index| index >= vertex_count) {
        return Err(GeometryError::IndexOutOfRange {
            index,
            vertex_count,
        });
    }

    let vertices: Vec<Point3<f32>> = mesh
        .positions
        .chunks_exact(3)
        .map(|p| Point3::new(p[0], p[1], p[2]))
        .collect();
    let triangles: Vec<[u32; 3]> = indices
        .chunks_exact(3)
        .map(|t| [t[0], t[1], t[2]])
        .collect();

    Ok(SharedShape::trimesh(vertices, triangles))
}

// ---------------------------------------------------------------------------
// cuboid_from_bounds
// ---------------------------------------------------------------------------

/// Build an axis-aligned box shape from a mesh's bounding box.
///
/// Meshes are authored with origin-centered bounds, so the max corner is the
/// half-extent vector.
///
/// # Errors
///
/// Returns [`GeometryError`] if the bounding box is missing or any extent is
/// not strictly positive.
pub fn cuboid_from_bounds(mesh: &MeshData) -> Result<SharedShape, GeometryError> {
    let half = mesh
        .bounding_box_max
        .ok_or(GeometryError::MissingBoundingBox)?;
    if half.x <= 0.0 || half.y <= 0.0 || half.z <= 0.0 {
        return Err(GeometryError::DegenerateBoundingBox(half.x, half.y, half.z));
    }
    Ok(SharedShape::cuboid(half.x, half.y, half.z))
}

// ---------------------------------------------------------------------------
// static_shape
// ---------------------------------------------------------------------------

/// Shape for a static environment node: an exact trimesh when the mesh is
/// indexed, falling back to a bounding-box cuboid for unindexed meshes.
///
/// # Errors
///
/// Returns [`GeometryError`] when neither representation can be built.
pub fn static_shape(mesh: &MeshData) -> Result<SharedShape, GeometryError> {
    match trimesh_from_mesh(mesh) {
        Ok(shape) => Ok(shape),
        Err(GeometryError::MissingIndices) => cuboid_from_bounds(mesh),
        Err(err) => Err(err),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
