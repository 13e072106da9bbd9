//! Static lookup tables driving translation.
//!
//! The compiled-in tables describe the legacy permission vocabulary. Hosts
//! that register extra legacy permissions (addons) extend a copy through the
//! `with_*` builders before constructing a translator.

use std::collections::{HashMap, HashSet};

/// Parent permission -> children it subsumes, in evaluation order.
const CONSOLIDATED: &[(&str, &[&str])] = &[
    (
        "discussions.moderate",
        &["discussions.announce", "discussions.close", "discussions.sink"],
    ),
    ("discussions.manage", &["discussions.delete", "discussions.edit"]),
];

/// Legacy names that never appear in output.
const DEPRECATED: &[&str] = &[
    "Garden.Activity.Delete",
    "Garden.Activity.View",
    "Garden.SignIn.Allow",
    "Garden.Curation.Manage",
    "Vanilla.Comments.Me",
    "Vanilla.Approval.Require",
    "Garden.Email.View",
    "Garden.Messages.Manage",
    "Garden.Tokens.Manage",
    "Garden.Applicants.Manage",
];

/// Legacy names whose canonical name can't be derived from segments.
const RENAMED: &[(&str, &str)] = &[
    ("Conversations.Moderation.Manage", "conversations.moderate"),
    ("Email.Comments.Add", "comments.email"),
    ("Email.Conversations.Add", "conversations.email"),
    ("Email.Discussions.Add", "discussions.email"),
    ("Garden.Moderation.Manage", "community.moderate"),
    ("Garden.NoAds.Allow", "noAds.use"),
    ("Garden.Settings.Manage", "site.manage"),
    ("Garden.Users.Approve", "applicants.manage"),
    ("Groups.Group.Add", "groups.add"),
    ("Groups.Moderation.Manage", "groups.moderate"),
    ("Reputation.Badges.Give", "badges.give"),
    ("Vanilla.Tagging.Add", "tags.add"),
];

/// Three-segment legacy names that keep their leading segment.
const FIXED: &[&str] = &[
    "Reactions.Email.Add",
    "Reactions.Flag.Add",
    "Reactions.Negative.Add",
    "Reactions.Positive.Add",
];

/// A parent permission and the children it replaces when all are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsolidationGroup {
    pub parent: String,
    pub children: Vec<String>,
}

/// Immutable seed data for a translator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTables {
    groups: Vec<ConsolidationGroup>,
    deprecated: HashSet<String>,
    renames: HashMap<String, String>,
    fixed: HashSet<String>,
}

impl TranslationTables {
    /// Tables with no entries: every name is translated algorithmically.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The compiled-in legacy vocabulary.
    pub fn legacy() -> Self {
        let mut tables = Self::empty();
        for (parent, children) in CONSOLIDATED {
            tables = tables.with_group(*parent, children.iter().copied());
        }
        for name in DEPRECATED {
            tables = tables.with_deprecated(*name);
        }
        for (legacy, canonical) in RENAMED {
            tables = tables.with_rename(*legacy, *canonical);
        }
        for name in FIXED {
            tables = tables.with_fixed(*name);
        }
        tables
    }

    /// Add a consolidation group, or replace the children of an existing
    /// parent while keeping its position.
    pub fn with_group<I, C>(mut self, parent: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        let parent = parent.into();
        let children: Vec<String> = children.into_iter().map(Into::into).collect();

        match self.groups.iter_mut().find(|g| g.parent == parent) {
            Some(group) => group.children = children,
            None => self.groups.push(ConsolidationGroup { parent, children }),
        }
        self
    }

    pub fn with_deprecated(mut self, legacy: impl Into<String>) -> Self {
        self.deprecated.insert(legacy.into());
        self
    }

    pub fn with_rename(mut self, legacy: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.renames.insert(legacy.into(), canonical.into());
        self
    }

    pub fn with_fixed(mut self, legacy: impl Into<String>) -> Self {
        self.fixed.insert(legacy.into());
        self
    }

    pub fn groups(&self) -> &[ConsolidationGroup] {
        &self.groups
    }

    pub fn is_deprecated(&self, legacy: &str) -> bool {
        self.deprecated.contains(legacy)
    }

    pub fn is_fixed(&self, legacy: &str) -> bool {
        self.fixed.contains(legacy)
    }

    pub fn renames(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.renames.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn deprecated(&self) -> impl Iterator<Item = &str> + '_ {
        self.deprecated.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_tables_load_every_seed() {
        let tables = TranslationTables::legacy();

        assert_eq!(tables.groups().len(), CONSOLIDATED.len());
        assert_eq!(tables.deprecated().count(), DEPRECATED.len());
        assert_eq!(tables.renames().count(), RENAMED.len());
        for name in FIXED {
            assert!(tables.is_fixed(name));
        }
    }

    #[test]
    fn groups_keep_declaration_order() {
        let tables = TranslationTables::legacy();
        let parents: Vec<&str> = tables.groups().iter().map(|g| g.parent.as_str()).collect();
        assert_eq!(parents, vec!["discussions.moderate", "discussions.manage"]);
    }

    #[test]
    fn with_group_replaces_children_in_place() {
        let tables = TranslationTables::legacy().with_group("discussions.moderate", ["discussions.close"]);

        assert_eq!(tables.groups()[0].parent, "discussions.moderate");
        assert_eq!(tables.groups()[0].children, vec!["discussions.close".to_string()]);
        assert_eq!(tables.groups().len(), 2);
    }

    #[test]
    fn builders_extend_the_vocabulary() {
        let tables = TranslationTables::empty()
            .with_rename("Addon.Widgets.Manage", "widgets.admin")
            .with_deprecated("Addon.Widgets.View")
            .with_fixed("Addon.Widgets.Add");

        let renames: Vec<(&str, &str)> = tables.renames().collect();
        assert_eq!(renames, vec![("Addon.Widgets.Manage", "widgets.admin")]);
        assert!(tables.is_deprecated("Addon.Widgets.View"));
        assert!(tables.is_fixed("Addon.Widgets.Add"));
        assert!(!tables.is_deprecated("Addon.Widgets.Manage"));
    }
}
