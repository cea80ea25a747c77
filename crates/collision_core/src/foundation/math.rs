//! Math utilities and types
//!
//! Provides fundamental math types for rigid-body collision geometry.
//! Transforms between frames are represented as [`Isometry`], a rigid
//! motion (rotation + translation, no scale or shear), so orthonormality
//! of the rotation part is carried by the type rather than checked at
//! runtime.

pub use nalgebra::{Isometry3, Quaternion, Translation3, Unit, UnitQuaternion, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = UnitQuaternion<f32>;

/// Rigid isometry (rotation + translation) between two frames
pub type Isometry = Isometry3<f32>;

/// Create an isometry from a translation and rotation
pub fn isometry(translation: Vec3, rotation: Quat) -> Isometry {
    Isometry::from_parts(Translation3::from(translation), rotation)
}

/// Create a pure-translation isometry
pub fn translation(translation: Vec3) -> Isometry {
    Isometry::from_parts(Translation3::from(translation), Quat::identity())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_isometry_maps_local_point() {
        let t = isometry(
            Vec3::new(1.0, 2.0, 3.0),
            Quat::from_axis_angle(&Vector3::z_axis(), std::f32::consts::FRAC_PI_2),
        );
        let p = t.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 3.0, epsilon = 1e-6);
        assert_relative_eq!(p.z, 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_translation_keeps_identity_rotation() {
        let t = translation(Vec3::new(4.0, 0.0, -1.0));
        assert_eq!(t.rotation, Quat::identity());
        assert_relative_eq!(t.translation.vector.x, 4.0);
    }
}
