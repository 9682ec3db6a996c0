//! Conversions between bevy's glam types and rapier's nalgebra types.
//!
//! Pose round-trips through these helpers must be lossless: rotation
//! components are moved field by field, never re-normalized.

use bevy::math::{Quat, Vec3};
use bevy::transform::components::Transform;
use nalgebra::{
    Isometry3, Point3, Quaternion, Translation3, UnitQuaternion, UnitVector3, Vector3,
};

/// Convert a glam vector to a nalgebra vector.
#[must_use]
pub fn to_vector(v: Vec3) -> Vector3<f32> {
    Vector3::new(v.x, v.y, v.z)
}

/// Convert a glam vector to a nalgebra point.
#[must_use]
pub fn to_point(v: Vec3) -> Point3<f32> {
    Point3::new(v.x, v.y, v.z)
}

/// Convert a glam direction to a unit axis. The input is normalized, so axes
/// authored as unit vectors pass through unchanged.
#[must_use]
pub fn to_axis(v: Vec3) -> UnitVector3<f32> {
    UnitVector3::new_normalize(to_vector(v))
}

/// Build an isometry from translation and rotation. The rotation is taken
/// as-is without normalization.
#[must_use]
pub fn isometry(translation: Vec3, rotation: Quat) -> Isometry3<f32> {
    Isometry3::from_parts(
        Translation3::new(translation.x, translation.y, translation.z),
        UnitQuaternion::new_unchecked(Quaternion::new(
            rotation.w, rotation.x, rotation.y, rotation.z,
        )),
    )
}

/// Build an isometry from a transform's translation and rotation. Scale does
/// not participate in rigid-body poses and is ignored.
#[must_use]
pub fn to_isometry(transform: &Transform) -> Isometry3<f32> {
    isometry(transform.translation, transform.rotation)
}

/// Split an isometry back into glam translation and rotation.
#[must_use]
pub fn from_isometry(iso: &Isometry3<f32>) -> (Vec3, Quat) {
    let t = iso.translation.vector;
    let q = iso.rotation.coords;
    (Vec3::new(t.x, t.y, t.z), Quat::from_xyzw(q.x, q.y, q.z, q.w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isometry_round_trip_is_exact() {
        let translation = Vec3::new(1.25, -3.5, 0.0625);
        let rotation = Quat::from_xyzw(0.1, 0.2, 0.3, 0.9273618);

        let iso = isometry(translation, rotation);
        let (t, q) = from_isometry(&iso);

        // Field-by-field bit equality, not approximate equality.
        assert_eq!(t.to_array(), translation.to_array());
        assert_eq!(q.to_array(), rotation.to_array());
    }

    #[test]
    fn transform_conversion_ignores_scale() {
        let transform = Transform::from_xyz(0.0, 2.0, 0.0).with_scale(Vec3::splat(4.0));
        let iso = to_isometry(&transform);
        assert_eq!(iso.translation.vector.y, 2.0);
    }

    #[test]
    fn axis_is_normalized() {
        let axis = to_axis(Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(axis.into_inner(), Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn point_and_vector_conversions() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(to_vector(v), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(to_point(v), Point3::new(1.0, 2.0, 3.0));
    }
}
