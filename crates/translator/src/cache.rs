//! Memoized legacy -> canonical renames.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Append-only rename cache owned by one translator.
///
/// Entries are never removed. The cache is purely an optimization (recomputing
/// a rename yields the same value), so a poisoned lock is recovered rather
/// than reported.
#[derive(Debug, Default)]
pub struct RenameCache {
    entries: RwLock<HashMap<String, String>>,
}

impl RenameCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache pre-populated with fixed renames.
    pub fn seeded<'a, I>(seed: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let entries = seed
            .into_iter()
            .map(|(legacy, canonical)| (legacy.to_string(), canonical.to_string()))
            .collect();
        Self {
            entries: RwLock::new(entries),
        }
    }

    pub fn get(&self, legacy: &str) -> Option<String> {
        self.read().get(legacy).cloned()
    }

    /// Record `canonical` for `legacy` unless an entry already exists.
    ///
    /// Returns the stored value, so concurrent writers agree on one answer.
    pub fn insert(&self, legacy: impl Into<String>, canonical: impl Into<String>) -> String {
        self.write()
            .entry(legacy.into())
            .or_insert_with(|| canonical.into())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.entries.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.entries.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
