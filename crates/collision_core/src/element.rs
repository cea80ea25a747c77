//! Collision element entity
//!
//! An [`Element`] is one piece of collidable geometry attached to a rigid
//! body: a shape description, a rigid transform from the element's local
//! frame to its owning body's frame, and a process-unique identifier that
//! broad-phase indices and contact caches use as a stable key.
//!
//! The [`CollisionElement`] trait is the extension contract the collision
//! engine consumes. Custom element types wrap an [`Element`] for the shared
//! state and override the trait hooks they care about.

use std::any::Any;
use std::fmt;
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

use log::trace;

use crate::filter::FilterPolicy;
use crate::foundation::math::Isometry;
use crate::geometry::ShapeDescription;

/// Process-wide unique identifier for a collision element
///
/// Assigned from a global atomic counter at construction, stable for the
/// element's lifetime, and never reused in-process. Nonzero by
/// construction, so external indices may use zero as a sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(NonZeroU64);

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

impl ElementId {
    /// Allocate the next identifier
    fn fresh() -> Self {
        // The counter only increments, so ids are never reused. The loop
        // skips the zero value a wrapped counter would produce.
        loop {
            let raw = NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed);
            if let Some(id) = NonZeroU64::new(raw) {
                return Self(id);
            }
        }
    }

    /// Get the raw identifier value
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Extension contract consumed by the collision engine
///
/// Object-safe so a collision world can aggregate heterogeneous elements
/// as `Box<dyn CollisionElement>`. All provided defaults match a plain
/// [`Element`]: movable, and willing to collide with anything.
pub trait CollisionElement: fmt::Debug + Send + Sync {
    /// Stable unique identifier, used as a lookup key by external indices
    fn id(&self) -> ElementId;

    /// Rigid transform from the element's local frame to its owning
    /// body's frame
    fn transform(&self) -> &Isometry;

    /// The owned shape description
    fn geometry(&self) -> &ShapeDescription;

    /// Filtering state consulted by [`collides_with`](Self::collides_with)
    ///
    /// The default is fully permissive.
    fn filter_policy(&self) -> FilterPolicy {
        FilterPolicy::permissive()
    }

    /// Whether this element is immovable environment geometry
    ///
    /// The engine partitions elements into static and dynamic sets with
    /// this; static-static pairs are never retested across steps.
    fn is_static(&self) -> bool {
        false
    }

    /// One-sided admission test run before narrow-phase contact work
    ///
    /// Not assumed symmetric: the engine must also evaluate
    /// `other.collides_with(self)` before admitting the pair.
    fn collides_with(&self, other: &dyn CollisionElement) -> bool {
        self.filter_policy().admits(&other.filter_policy())
    }

    /// Duplicate this element, preserving its runtime type
    ///
    /// The clone owns copies of the geometry, transform, and policy state
    /// and receives a fresh [`ElementId`]; it is never identity-equal to
    /// the source. This is the sole sanctioned duplication path.
    fn clone_element(&self) -> Box<dyn CollisionElement>;

    /// Escape hatch for recovering the concrete element type
    fn as_any(&self) -> &dyn Any;
}

/// One piece of collidable geometry attached to a rigid body
///
/// `Element` deliberately does not implement [`Clone`]: duplicating it
/// through a plain copy would either reuse the identifier or silently drop
/// wrapper-type state. Use [`CollisionElement::clone_element`], or
/// [`Element::duplicate`] when implementing `clone_element` for a wrapper
/// type.
#[derive(Debug)]
pub struct Element {
    id: ElementId,
    geometry: ShapeDescription,
    transform: Isometry,
    anchored: bool,
    filter: FilterPolicy,
}

impl Element {
    /// Creates an element with empty geometry and the given local-to-body
    /// transform
    pub fn new(transform: Isometry) -> Self {
        Self::with_geometry(ShapeDescription::Empty, transform)
    }

    /// Creates an element owning the given geometry and transform
    pub fn with_geometry(geometry: ShapeDescription, transform: Isometry) -> Self {
        let id = ElementId::fresh();
        trace!("created element {id} ({})", geometry.kind_name());
        Self {
            id,
            geometry,
            transform,
            anchored: false,
            filter: FilterPolicy::permissive(),
        }
    }

    /// Mark the element as immovable environment geometry
    #[must_use]
    pub const fn anchored(mut self, anchored: bool) -> Self {
        self.anchored = anchored;
        self
    }

    /// Attach a filtering policy
    #[must_use]
    pub const fn with_filter(mut self, filter: FilterPolicy) -> Self {
        self.filter = filter;
        self
    }

    /// Get the local-to-body transform
    pub const fn transform(&self) -> &Isometry {
        &self.transform
    }

    /// Replace the local-to-body transform (e.g. when the geometry is
    /// re-anchored on its body)
    pub fn set_transform(&mut self, transform: Isometry) {
        self.transform = transform;
    }

    /// Get the owned shape description
    pub const fn geometry(&self) -> &ShapeDescription {
        &self.geometry
    }

    /// Replace the owned shape description
    pub fn set_geometry(&mut self, geometry: ShapeDescription) {
        self.geometry = geometry;
    }

    /// Get the configured filtering policy
    pub const fn filter(&self) -> &FilterPolicy {
        &self.filter
    }

    /// Duplication primitive for wrapper element types
    ///
    /// Copies geometry, transform, and policy state under a fresh
    /// identifier. Wrapper types call this from their own
    /// [`CollisionElement::clone_element`] to duplicate the shared state,
    /// then copy their added state themselves.
    pub fn duplicate(&self) -> Self {
        let id = ElementId::fresh();
        trace!("cloned element {} as {id}", self.id);
        Self {
            id,
            geometry: self.geometry.clone(),
            transform: self.transform,
            anchored: self.anchored,
            filter: self.filter,
        }
    }
}

impl Default for Element {
    fn default() -> Self {
        Self::new(Isometry::identity())
    }
}

impl CollisionElement for Element {
    fn id(&self) -> ElementId {
        self.id
    }

    fn transform(&self) -> &Isometry {
        &self.transform
    }

    fn geometry(&self) -> &ShapeDescription {
        &self.geometry
    }

    fn filter_policy(&self) -> FilterPolicy {
        self.filter
    }

    fn is_static(&self) -> bool {
        self.anchored
    }

    fn clone_element(&self) -> Box<dyn CollisionElement> {
        Box::new(self.duplicate())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Value equality over configured state: geometry, transform, anchoring,
/// and filter policy. The identifier is excluded — ids exist for external
/// indexing, not value semantics, so two independently built elements with
/// the same configuration compare equal while their ids differ.
impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.geometry == other.geometry
            && self.transform == other.transform
            && self.anchored == other.anchored
            && self.filter == other.filter
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.transform.translation.vector;
        write!(
            f,
            "Element {} [{}{}] at ({:.3}, {:.3}, {:.3})",
            self.id,
            self.geometry.kind_name(),
            if self.anchored { ", static" } else { "" },
            t.x,
            t.y,
            t.z
        )
    }
}
