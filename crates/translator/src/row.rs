//! Output rows.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use permnames_core::ResourceId;

/// Scope a formatted row describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeKind {
    Global,
    Category,
}

/// One scope's canonical permissions, ready for an API response.
///
/// `permissions` values are `Some(true)`/`Some(false)` for uniform state and
/// `None` (JSON `null`) for a consolidated permission whose children disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedPermissionRow {
    #[serde(rename = "type")]
    pub kind: ScopeKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub permissions: BTreeMap<String, Option<bool>>,
}

impl FormattedPermissionRow {
    pub fn global(permissions: BTreeMap<String, Option<bool>>) -> Self {
        Self {
            kind: ScopeKind::Global,
            id: None,
            permissions,
        }
    }

    pub fn category(resource: ResourceId, permissions: BTreeMap<String, Option<bool>>) -> Self {
        Self {
            kind: ScopeKind::Category,
            id: Some(resource.output_id()),
            permissions,
        }
    }

    pub fn is_global(&self) -> bool {
        self.kind == ScopeKind::Global
    }
}
