//! Strongly-typed resource identifiers.

use serde::{Deserialize, Serialize};

/// Identifier of a resource scope (e.g. a category) a permission is granted in.
///
/// Legacy stores use `-1` for "default/uncategorized"; downstream consumers
/// expect `0` for that scope, see [`ResourceId::output_id`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(i64);

impl ResourceId {
    /// The legacy "no specific resource" marker.
    pub const LEGACY_DEFAULT: ResourceId = ResourceId(-1);

    /// The canonical "no specific resource" identifier.
    pub const DEFAULT: ResourceId = ResourceId(0);

    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    /// The identifier as emitted in formatted output (`-1` becomes `0`).
    pub const fn output_id(self) -> i64 {
        if self.0 == Self::LEGACY_DEFAULT.0 {
            Self::DEFAULT.0
        } else {
            self.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_default_maps_to_zero() {
        assert_eq!(ResourceId::LEGACY_DEFAULT.output_id(), 0);
        assert_eq!(ResourceId::new(-1).output_id(), 0);
    }

    #[test]
    fn other_ids_pass_through() {
        assert_eq!(ResourceId::new(5).output_id(), 5);
        assert_eq!(ResourceId::new(0).output_id(), 0);
        assert_eq!(ResourceId::new(-2).output_id(), -2);
    }

    #[test]
    fn serializes_as_plain_integer() {
        let json = serde_json::to_string(&ResourceId::new(7)).unwrap();
        assert_eq!(json, "7");
        let back: ResourceId = serde_json::from_str("-1").unwrap();
        assert_eq!(back, ResourceId::LEGACY_DEFAULT);
    }
}
