//! # Collision Core
//!
//! Entity model for a rigid-body collision subsystem: the collision
//! **element**, one piece of collidable geometry attached to a rigid body.
//!
//! ## Features
//!
//! - **Stable identity**: process-unique [`ElementId`] assigned at
//!   construction, safe under concurrent construction
//! - **Local-to-body transform**: rigid isometry owned by the element
//! - **Polymorphic duplication**: [`CollisionElement::clone_element`]
//!   preserves the runtime type behind a trait object
//! - **Composable filtering**: group/mask layers and self-body exclusion
//!   via [`FilterPolicy`], no subclass hierarchy required
//!
//! Broad-phase indexing, narrow-phase contact generation, and the
//! rigid-body tree that owns elements are external consumers of this
//! crate, not part of it.
//!
//! ## Quick Start
//!
//! ```rust
//! use collision_core::prelude::*;
//!
//! let ball = Element::with_geometry(
//!     ShapeDescription::sphere(0.5),
//!     Isometry::identity(),
//! );
//! let ground = Element::with_geometry(
//!     ShapeDescription::cuboid(Vec3::new(50.0, 1.0, 50.0)),
//!     Isometry::identity(),
//! )
//! .anchored(true);
//!
//! assert!(!ball.is_static());
//! assert!(ground.is_static());
//!
//! // Admission is one-sided; test both directions before narrow phase.
//! assert!(ball.collides_with(&ground) && ground.collides_with(&ball));
//!
//! // Duplication goes through the trait and never reuses an id.
//! let copy = ball.clone_element();
//! assert_ne!(copy.id(), ball.id());
//! assert_eq!(copy.geometry(), ball.geometry());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;

pub mod element;
pub mod filter;
pub mod geometry;

pub use element::{CollisionElement, Element, ElementId};
pub use filter::{BodyKey, FilterPolicy, Layers};
pub use geometry::ShapeDescription;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        element::{CollisionElement, Element, ElementId},
        filter::{BodyKey, FilterPolicy, Layers},
        foundation::math::{Isometry, Point3, Quat, Vec3},
        geometry::ShapeDescription,
    };
}
