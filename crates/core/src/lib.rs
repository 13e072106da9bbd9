//! `permnames-core` — shared primitives for permission name translation.
//!
//! This crate contains **pure** building blocks (no IO, no logging setup).

pub mod error;
pub mod id;

pub use error::{TranslateError, TranslateResult};
pub use id::ResourceId;
