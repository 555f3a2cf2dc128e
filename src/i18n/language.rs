//! Validated language representation.
//!
//! A `Language` can only be obtained through the registry, so holding one
//! proves the code names a supported, enabled language.

use crate::error::BuildError;
use crate::i18n::{LanguageConfig, LanguageRegistry};

/// A language validated against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    code: &'static str,
}

impl Language {
    /// English, the canonical language.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Spanish.
    pub const SPANISH: Language = Language { code: "es" };

    /// Create a `Language` from an ISO 639-1 code.
    ///
    /// Fails when the code is unknown or the language is disabled.
    pub fn from_code(code: &str) -> Result<Language, BuildError> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => Err(BuildError::LanguageDisabled(code.to_string())),
            None => Err(BuildError::UnknownLanguage(code.to_string())),
        }
    }

    /// The canonical (default) language.
    ///
    /// Fails when the registry defines no canonical entry; the assembler
    /// surfaces this as a construction error rather than proceeding with
    /// a partially-wired instance.
    pub fn canonical() -> Result<Language, BuildError> {
        LanguageRegistry::get()
            .canonical()
            .map(|config| Language { code: config.code })
            .ok_or(BuildError::NoCanonicalLanguage)
    }

    /// The ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Full registry metadata for this language.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot
    /// happen for a `Language` obtained through `from_code`, `canonical`,
    /// or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("language code validated at construction")
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Whether this is the canonical language.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}
