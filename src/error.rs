//! Error types for validator construction and catalog registration.

use thiserror::Error;

/// Errors produced while assembling a `Validator`.
///
/// A build error means no instance was produced; callers must not proceed
/// with a partially-wired validator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The requested language code is not present in the registry.
    #[error("unknown language code: '{0}'")]
    UnknownLanguage(String),

    /// The requested language exists but is not enabled.
    #[error("language '{0}' is not enabled")]
    LanguageDisabled(String),

    /// The registry defines no canonical language to default to.
    #[error("no canonical language defined in the registry")]
    NoCanonicalLanguage,

    /// Seeding the built-in message templates failed.
    #[error("failed to register built-in translations: {0}")]
    Translation(#[from] CatalogError),
}

/// Errors produced when registering a single translation entry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The rule name was empty.
    #[error("rule name is empty")]
    EmptyRuleName,

    /// The template does not contain the `{field}` placeholder.
    #[error("template for rule '{0}' is missing the {{field}} placeholder")]
    MissingPlaceholder(String),
}
