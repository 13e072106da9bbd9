//! Boundary to the permission store.

use crate::RawPermissionSet;

/// Source of truth for a principal's raw permission state.
///
/// Implementations live outside this crate (database, session, cache).
pub trait PermissionSource {
    fn permissions(&self) -> RawPermissionSet;
}

impl<F> PermissionSource for F
where
    F: Fn() -> RawPermissionSet,
{
    fn permissions(&self) -> RawPermissionSet {
        self()
    }
}

/// A source that always reports the same raw set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticPermissionSource {
    raw: RawPermissionSet,
}

impl StaticPermissionSource {
    pub fn new(raw: RawPermissionSet) -> Self {
        Self { raw }
    }
}

impl From<RawPermissionSet> for StaticPermissionSource {
    fn from(raw: RawPermissionSet) -> Self {
        Self::new(raw)
    }
}

impl PermissionSource for StaticPermissionSource {
    fn permissions(&self) -> RawPermissionSet {
        self.raw.clone()
    }
}
