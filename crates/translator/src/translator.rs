//! The permission name translator.
//!
//! - No IO
//! - No panics
//! - Only side effect: the per-instance rename cache

use std::collections::BTreeMap;

use crate::{
    CamelCaseScheme, FormattedPermissionRow, NameScheme, PermissionSource, RawPermissionSet,
    RenameCache, TranslationTables,
};

/// Translates legacy permission state into canonical, consolidated rows.
///
/// Holds immutable [`TranslationTables`] plus a [`RenameCache`] scoped to this
/// instance. `Send + Sync`, so one instance can serve concurrent callers.
#[derive(Debug)]
pub struct PermissionTranslator<S = CamelCaseScheme> {
    tables: TranslationTables,
    cache: RenameCache,
    scheme: S,
}

impl PermissionTranslator<CamelCaseScheme> {
    /// Translator over the compiled-in legacy vocabulary.
    pub fn new() -> Self {
        Self::with_tables(TranslationTables::legacy())
    }

    pub fn with_tables(tables: TranslationTables) -> Self {
        Self::with_scheme(tables, CamelCaseScheme)
    }
}

impl Default for PermissionTranslator<CamelCaseScheme> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: NameScheme> PermissionTranslator<S> {
    pub fn with_scheme(tables: TranslationTables, scheme: S) -> Self {
        let cache = RenameCache::seeded(tables.renames());
        Self {
            tables,
            cache,
            scheme,
        }
    }

    pub fn tables(&self) -> &TranslationTables {
        &self.tables
    }

    pub fn cache(&self) -> &RenameCache {
        &self.cache
    }

    /// Whether a legacy name is no longer recognized.
    pub fn is_deprecated(&self, name: &str) -> bool {
        self.tables.is_deprecated(name)
    }

    /// Canonical name for a legacy permission name.
    ///
    /// Seeded or previously computed names are returned from the cache.
    /// Otherwise an exactly-three-segment name that isn't fixed loses its
    /// leading (addon) segment, and each remaining segment goes through the
    /// name scheme.
    pub fn rename(&self, name: &str) -> String {
        if let Some(hit) = self.cache.get(name) {
            return hit;
        }

        let mut segments: Vec<&str> = name.split('.').collect();
        if segments.len() == 3 && !self.tables.is_fixed(name) {
            segments.remove(0);
        }

        let canonical = segments
            .iter()
            .map(|segment| self.scheme.convert(segment))
            .collect::<Vec<_>>()
            .join(".");

        self.cache.insert(name, canonical)
    }

    /// Collapse each consolidation group whose children are all present.
    ///
    /// The parent becomes `Some(true)` when every child is granted,
    /// `Some(false)` when none is, and `None` otherwise. Children of an
    /// evaluated group are always removed; a group with any child missing is
    /// left untouched.
    pub fn consolidate(&self, perms: BTreeMap<String, bool>) -> BTreeMap<String, Option<bool>> {
        let mut out: BTreeMap<String, Option<bool>> =
            perms.into_iter().map(|(name, granted)| (name, Some(granted))).collect();

        for group in self.tables.groups() {
            if !group.children.iter().all(|child| out.contains_key(child)) {
                continue;
            }

            let total = group.children.len();
            let pass = group
                .children
                .iter()
                .filter(|child| out.get(child.as_str()) == Some(&Some(true)))
                .count();

            let value = if pass == total {
                Some(true)
            } else if pass == 0 {
                Some(false)
            } else {
                None
            };

            for child in &group.children {
                out.remove(child);
            }
            out.insert(group.parent.clone(), value);

            tracing::trace!(parent = %group.parent, pass, total, "consolidated permission group");
        }

        out
    }

    /// Translate one scope: drop deprecated names, rename, consolidate.
    ///
    /// Legacy names that share a canonical name are merged (granted if any
    /// is granted). The result is ordered by key.
    pub fn translate_scope(&self, perms: &BTreeMap<String, bool>) -> BTreeMap<String, Option<bool>> {
        let mut renamed: BTreeMap<String, bool> = BTreeMap::new();

        for (name, granted) in perms {
            if self.is_deprecated(name) {
                tracing::trace!(permission = %name, "dropping deprecated permission");
                continue;
            }
            *renamed.entry(self.rename(name)).or_insert(false) |= *granted;
        }

        self.consolidate(renamed)
    }

    /// Format a raw permission set into API rows.
    ///
    /// The global row always comes first, followed by one category row per
    /// resource in the order resources first appear in `raw`.
    pub fn format(&self, raw: &RawPermissionSet) -> Vec<FormattedPermissionRow> {
        let parts = raw.partition();

        let mut rows = Vec::with_capacity(1 + parts.categories.len());
        rows.push(FormattedPermissionRow::global(self.translate_scope(&parts.global)));
        for (resource, perms) in &parts.categories {
            rows.push(FormattedPermissionRow::category(
                *resource,
                self.translate_scope(perms),
            ));
        }

        tracing::debug!(
            raw_entries = raw.len(),
            global = rows[0].permissions.len(),
            categories = parts.categories.len(),
            "formatted permissions"
        );

        rows
    }

    /// Fetch raw state from `source` and format it.
    pub fn format_source<P>(&self, source: &P) -> Vec<FormattedPermissionRow>
    where
        P: PermissionSource + ?Sized,
    {
        self.format(&source.permissions())
    }
}
