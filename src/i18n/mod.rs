//! Internationalization: languages and localized message templates.
//!
//! # Architecture
//!
//! - `registry`: single source of truth for supported languages and their
//!   metadata
//! - `language`: validated `Language` type constructed through the
//!   registry
//! - `catalog`: (rule, language) → message template mapping with
//!   placeholder substitution and generic fallback
//!
//! Only the canonical language's catalog is seeded by default; other
//! languages are activation targets for caller-supplied catalogs.

mod catalog;
mod language;
mod registry;

pub use catalog::{Catalog, FIELD_PLACEHOLDER};
pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
