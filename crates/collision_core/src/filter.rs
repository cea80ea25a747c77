//! Pairwise collision filtering policy
//!
//! Filtering is composed onto each element rather than expressed through a
//! hierarchy of element types: a [`FilterPolicy`] combines layer
//! membership, a mask of admitted layers, and an optional owning-body key
//! for self-collision exclusion.
//!
//! Admission is evaluated one-sided. A pair enters narrow phase only if
//! both directions admit it, and callers are responsible for testing both.

use bitflags::bitflags;

bitflags! {
    /// Collision layers for group/mask filtering
    ///
    /// Layers are a 32-bit space. A handful of common roles are named;
    /// the remaining bits are available through [`Layers::group`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Layers: u32 {
        /// Ordinary dynamic geometry
        const DEFAULT = 1 << 0;
        /// Static environment geometry
        const ENVIRONMENT = 1 << 1;
        /// Sensor volumes that detect contact without responding to it
        const SENSOR = 1 << 2;
        /// Small debris that only needs to collide with the environment
        const DEBRIS = 1 << 3;
        /// Every layer, including user-defined groups
        const ALL = u32::MAX;
    }
}

impl Layers {
    /// A user-defined layer occupying the given bit
    ///
    /// # Panics
    /// Panics if `index` is 32 or greater.
    pub fn group(index: u8) -> Self {
        assert!(index < 32, "layer group index must be below 32");
        Self::from_bits_retain(1_u32 << u32::from(index))
    }
}

impl Default for Layers {
    fn default() -> Self {
        Self::ALL
    }
}

/// Opaque key identifying the rigid body that owns an element
///
/// Two elements carrying the same key belong to the same body and are
/// never admitted against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyKey(u64);

impl BodyKey {
    /// Create a body key from a raw value
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw key value
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Per-element filtering state consulted before narrow-phase testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterPolicy {
    /// Layers this element belongs to
    pub membership: Layers,
    /// Layers this element is willing to collide with
    pub mask: Layers,
    /// Owning body, if self-body pairs should be excluded
    pub body: Option<BodyKey>,
}

impl FilterPolicy {
    /// Fully permissive policy: member of all layers, admits all layers,
    /// no body exclusion
    pub const fn permissive() -> Self {
        Self {
            membership: Layers::ALL,
            mask: Layers::ALL,
            body: None,
        }
    }

    /// Policy restricted to the given membership and mask
    pub const fn with_layers(membership: Layers, mask: Layers) -> Self {
        Self {
            membership,
            mask,
            body: None,
        }
    }

    /// Attach the owning body, excluding pairs within that body
    pub const fn owned_by(mut self, body: BodyKey) -> Self {
        self.body = Some(body);
        self
    }

    /// One-sided admission test: does this policy admit `other`?
    ///
    /// Admission requires `other`'s membership to intersect this policy's
    /// mask, and the two policies not to share an owning body. This test
    /// is NOT symmetric; callers must also check `other.admits(self)`.
    pub fn admits(&self, other: &Self) -> bool {
        if let (Some(a), Some(b)) = (self.body, other.body) {
            if a == b {
                return false;
            }
        }
        self.mask.intersects(other.membership)
    }
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self::permissive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_admits_everything() {
        let a = FilterPolicy::default();
        let b = FilterPolicy::with_layers(Layers::DEBRIS, Layers::ENVIRONMENT);
        assert!(a.admits(&b));
        assert!(a.admits(&a));
    }

    #[test]
    fn test_admission_is_one_sided() {
        // Debris hits the environment, but the environment ignores debris.
        let debris = FilterPolicy::with_layers(Layers::DEBRIS, Layers::ENVIRONMENT);
        let environment = FilterPolicy::with_layers(Layers::ENVIRONMENT, Layers::DEFAULT);
        assert!(debris.admits(&environment));
        assert!(!environment.admits(&debris));
    }

    #[test]
    fn test_shared_body_vetoes_admission() {
        let body = BodyKey::new(7);
        let a = FilterPolicy::permissive().owned_by(body);
        let b = FilterPolicy::permissive().owned_by(body);
        let c = FilterPolicy::permissive().owned_by(BodyKey::new(8));
        assert!(!a.admits(&b));
        assert!(!b.admits(&a));
        assert!(a.admits(&c));
        assert!(c.admits(&a));
    }

    #[test]
    fn test_user_defined_groups_intersect_all() {
        let custom = FilterPolicy::with_layers(Layers::group(17), Layers::group(17));
        let open = FilterPolicy::permissive();
        assert!(open.admits(&custom));
        assert!(!custom.admits(&FilterPolicy::with_layers(
            Layers::DEFAULT,
            Layers::ALL
        )));
    }

    #[test]
    #[should_panic(expected = "layer group index")]
    fn test_group_index_out_of_range_panics() {
        let _ = Layers::group(32);
    }
}
