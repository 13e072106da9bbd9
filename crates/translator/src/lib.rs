//! `permnames-translator` — legacy permission names to canonical names.
//!
//! This crate is intentionally decoupled from HTTP, storage, and the source
//! of truth for grants: it only reshapes what a [`PermissionSource`] reports.

pub mod cache;
pub mod raw;
pub mod row;
pub mod scheme;
pub mod source;
pub mod tables;
pub mod translator;

pub use cache::RenameCache;
pub use raw::{PartitionedPermissions, RawGrant, RawPermissionSet};
pub use row::{FormattedPermissionRow, ScopeKind};
pub use scheme::{CamelCaseScheme, NameScheme};
pub use source::{PermissionSource, StaticPermissionSource};
pub use tables::{ConsolidationGroup, TranslationTables};
pub use translator::PermissionTranslator;
