//! Shape descriptions owned by collision elements
//!
//! A [`ShapeDescription`] is configuration data only: it records what an
//! element's geometry is, in the element's local frame. Intersection
//! algorithms live in the narrow-phase engine that consumes these
//! descriptions, not here.

use crate::foundation::math::{Point3, Vec3};

/// Description of a collision shape in the element's local frame
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeDescription {
    /// No geometry attached yet (placeholder element)
    Empty,
    /// Sphere centered at the local origin
    Sphere {
        /// Sphere radius
        radius: f32,
    },
    /// Axis-aligned box centered at the local origin
    Cuboid {
        /// Half-extent along each local axis
        half_extents: Vec3,
    },
    /// Capsule aligned with the local Y axis
    Capsule {
        /// Half the distance between the two cap centers
        half_length: f32,
        /// Cap and cylinder radius
        radius: f32,
    },
    /// Convex hull of a point cloud in local coordinates
    ConvexMesh {
        /// Hull vertices in the element's local frame
        vertices: Vec<Point3>,
    },
}

impl ShapeDescription {
    /// Creates a spherical shape with the given radius
    pub const fn sphere(radius: f32) -> Self {
        Self::Sphere { radius }
    }

    /// Creates a box shape from its half-extents
    pub const fn cuboid(half_extents: Vec3) -> Self {
        Self::Cuboid { half_extents }
    }

    /// Creates a Y-aligned capsule shape
    pub const fn capsule(half_length: f32, radius: f32) -> Self {
        Self::Capsule {
            half_length,
            radius,
        }
    }

    /// Creates a convex mesh shape from local-frame hull vertices
    pub fn convex_mesh(vertices: Vec<Point3>) -> Self {
        Self::ConvexMesh { vertices }
    }

    /// Short name of the shape kind, for diagnostics
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Sphere { .. } => "sphere",
            Self::Cuboid { .. } => "cuboid",
            Self::Capsule { .. } => "capsule",
            Self::ConvexMesh { .. } => "convex_mesh",
        }
    }

    /// Radius of the smallest origin-centered sphere enclosing the shape
    /// in its local frame
    pub fn local_bounding_radius(&self) -> f32 {
        match self {
            Self::Empty => 0.0,
            Self::Sphere { radius } => *radius,
            Self::Cuboid { half_extents } => half_extents.norm(),
            Self::Capsule {
                half_length,
                radius,
            } => half_length + radius,
            Self::ConvexMesh { vertices } => vertices
                .iter()
                .map(|v| v.coords.norm())
                .fold(0.0, f32::max),
        }
    }
}

impl Default for ShapeDescription {
    fn default() -> Self {
        Self::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_empty() {
        assert_eq!(ShapeDescription::default(), ShapeDescription::Empty);
        assert_eq!(ShapeDescription::default().local_bounding_radius(), 0.0);
    }

    #[test]
    fn test_bounding_radius_per_kind() {
        assert_relative_eq!(
            ShapeDescription::sphere(2.0).local_bounding_radius(),
            2.0
        );
        assert_relative_eq!(
            ShapeDescription::cuboid(Vec3::new(1.0, 2.0, 2.0)).local_bounding_radius(),
            3.0
        );
        assert_relative_eq!(
            ShapeDescription::capsule(1.5, 0.5).local_bounding_radius(),
            2.0
        );
    }

    #[test]
    fn test_convex_mesh_bounding_radius_is_farthest_vertex() {
        let shape = ShapeDescription::convex_mesh(vec![
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, -3.0, 0.0),
            Point3::new(0.0, 0.0, 2.0),
        ]);
        assert_relative_eq!(shape.local_bounding_radius(), 3.0);
    }

    #[test]
    fn test_kind_names_are_distinct() {
        let kinds = [
            ShapeDescription::Empty.kind_name(),
            ShapeDescription::sphere(1.0).kind_name(),
            ShapeDescription::cuboid(Vec3::new(1.0, 1.0, 1.0)).kind_name(),
            ShapeDescription::capsule(1.0, 0.5).kind_name(),
            ShapeDescription::convex_mesh(Vec::new()).kind_name(),
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
