//! Raw permission state as reported by the permission store.
//!
//! The store uses two encodings side by side:
//! - a granted *global* permission is stored as the entry's **value**
//!   (the key is positional and carries no meaning);
//! - a *resource-scoped* permission is stored as its name mapped to the list
//!   of resource ids it is granted for.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use permnames_core::{ResourceId, TranslateError, TranslateResult};

/// Value of one raw entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawGrant {
    /// The value names a globally granted permission.
    Global(String),
    /// The entry key is granted for each listed resource.
    Resources(Vec<ResourceId>),
    /// Any other shape; ignored when partitioning.
    Unrecognized(serde_json::Value),
}

/// Insertion-ordered raw permission set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawPermissionSet {
    entries: IndexMap<String, RawGrant>,
}

/// Raw grants split by scope. Every value is `true`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionedPermissions {
    pub global: BTreeMap<String, bool>,
    /// Per-resource grants, in the order each resource was first seen.
    pub categories: IndexMap<ResourceId, BTreeMap<String, bool>>,
}

impl RawPermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the store's JSON encoding.
    ///
    /// The top level is either an object, or a list holding only global
    /// grants (element `i` is keyed `"i"`).
    pub fn from_json_str(input: &str) -> TranslateResult<Self> {
        // Decode straight from the text: going through `Value` would reorder keys.
        match input.trim_start().chars().next() {
            Some('{') => Ok(serde_json::from_str(input)?),
            Some('[') => {
                let values: Vec<serde_json::Value> = serde_json::from_str(input)?;
                Ok(values
                    .into_iter()
                    .enumerate()
                    .map(|(position, value)| {
                        let grant = match value {
                            serde_json::Value::String(name) => RawGrant::Global(name),
                            other => RawGrant::Unrecognized(other),
                        };
                        (position.to_string(), grant)
                    })
                    .collect())
            }
            _ => Err(TranslateError::invalid_input(
                "raw permission set must be a JSON object or list",
            )),
        }
    }

    /// Insert (or replace) a raw entry as-is.
    pub fn insert(&mut self, key: impl Into<String>, grant: RawGrant) -> &mut Self {
        self.entries.insert(key.into(), grant);
        self
    }

    /// Record a global grant under the next free positional key.
    pub fn grant_global(&mut self, name: impl Into<String>) -> &mut Self {
        let mut position = self.entries.len();
        while self.entries.contains_key(&position.to_string()) {
            position += 1;
        }
        self.insert(position.to_string(), RawGrant::Global(name.into()))
    }

    /// Record `name` as granted for `resources`, appending to earlier grants.
    pub fn grant_resources<I>(&mut self, name: impl Into<String>, resources: I) -> &mut Self
    where
        I: IntoIterator<Item = ResourceId>,
    {
        let entry = self
            .entries
            .entry(name.into())
            .or_insert_with(|| RawGrant::Resources(Vec::new()));

        match entry {
            RawGrant::Resources(ids) => ids.extend(resources),
            other => *other = RawGrant::Resources(resources.into_iter().collect()),
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawGrant)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Split entries into global and per-resource grants.
    ///
    /// Unrecognized entries are dropped.
    pub fn partition(&self) -> PartitionedPermissions {
        let mut out = PartitionedPermissions::default();

        for (key, grant) in &self.entries {
            match grant {
                RawGrant::Global(name) => {
                    out.global.insert(name.clone(), true);
                }
                RawGrant::Resources(ids) => {
                    for id in ids {
                        out.categories
                            .entry(*id)
                            .or_default()
                            .insert(key.clone(), true);
                    }
                }
                RawGrant::Unrecognized(value) => {
                    tracing::trace!(key = %key, value = %value, "skipping unrecognized raw permission entry");
                }
            }
        }

        out
    }
}

impl<K: Into<String>> FromIterator<(K, RawGrant)> for RawPermissionSet {
    fn from_iter<T: IntoIterator<Item = (K, RawGrant)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
