//! Hand-built mesh buffers with known vertex counts and bounds.

use bevy::math::Vec3;

use strut_scene::types::MeshData;

/// Indexed box mesh centered at the origin with the given half-extents.
///
/// Eight vertices, twelve triangles, and a bounding box matching the
/// half-extents exactly.
#[must_use]
pub fn box_mesh(half: Vec3) -> MeshData {
    let (x, y, z) = (half.x, half.y, half.z);
    #[rustfmt::skip]
    let positions = vec![
        -x, -y, -z,
         x, -y, -z,
         x,  y, -z,
        -x,  y, -z,
        -x, -y,  z,
         x, -y,  z,
         x,  y,  z,
        -x,  y,  z,
    ];
    #[rustfmt::skip]
    let indices = vec![
        0, 1, 2,  0, 2, 3, // back
        4, 6, 5,  4, 7, 6, // front
        0, 3, 7,  0, 7, 4, // left
        1, 5, 6,  1, 6, 2, // right
        3, 2, 6,  3, 6, 7, // top
        0, 4, 5,  0, 5, 1, // bottom
    ];
    MeshData {
        positions,
        indices: Some(indices),
        bounding_box_max: Some(half),
    }
}

/// Indexed cube mesh with uniform half-extent.
#[must_use]
pub fn cube_mesh(half: f32) -> MeshData {
    box_mesh(Vec3::splat(half))
}

/// Box mesh without an index buffer. Exercises the bounding-box fallback
/// path for static collision.
#[must_use]
pub fn unindexed_box_mesh(half: Vec3) -> MeshData {
    MeshData {
        indices: None,
        ..box_mesh(half)
    }
}

/// Flat ground quad at y = 0: four vertices, two triangles.
///
/// Carries no bounding box; it is only usable through the exact triangle
/// mesh path.
#[must_use]
pub fn ground_mesh(half_x: f32, half_z: f32) -> MeshData {
    #[rustfmt::skip]
    let positions = vec![
        -half_x, 0.0, -half_z,
         half_x, 0.0, -half_z,
         half_x, 0.0,  half_z,
        -half_x, 0.0,  half_z,
    ];
    MeshData {
        positions,
        indices: Some(vec![0, 1, 2, 0, 2, 3]),
        bounding_box_max: None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
