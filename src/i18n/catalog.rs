//! Translation catalog: message templates keyed by (rule, language).
//!
//! Templates carry a single `{field}` placeholder that is replaced with
//! the violating field's public name at resolution time. Missing entries
//! resolve to a generic fallback naming the field and the rule; the
//! fallback never propagates as an error.

use crate::error::CatalogError;
use crate::i18n::Language;
use std::collections::HashMap;
use tracing::warn;

/// Placeholder substituted with the field's public name.
pub const FIELD_PLACEHOLDER: &str = "{field}";

/// Default-language templates for the built-in rules.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("required", "{field} is a required field"),
    ("email", "{field} must be a valid email address"),
    ("min", "{field} is shorter than the minimum allowed"),
    ("max", "{field} is longer than the maximum allowed"),
    ("len", "{field} does not have the required length"),
];

/// Message templates keyed by (language code, rule name).
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    templates: HashMap<(&'static str, String), String>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog seeded with the built-in rule templates for the
    /// given language.
    pub fn with_defaults(language: Language) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for (rule, template) in BUILTIN_TEMPLATES {
            catalog.register(language, rule, template)?;
        }
        Ok(catalog)
    }

    /// Register a template for (rule, language). Last registration wins.
    ///
    /// Fails when the rule name is empty or the template lacks the
    /// `{field}` placeholder.
    pub fn register(
        &mut self,
        language: Language,
        rule: &str,
        template: &str,
    ) -> Result<(), CatalogError> {
        if rule.is_empty() {
            return Err(CatalogError::EmptyRuleName);
        }
        if !template.contains(FIELD_PLACEHOLDER) {
            return Err(CatalogError::MissingPlaceholder(rule.to_string()));
        }
        self.templates
            .insert((language.code(), rule.to_string()), template.to_string());
        Ok(())
    }

    /// The registered template for (rule, language), if any.
    pub fn lookup(&self, language: Language, rule: &str) -> Option<&str> {
        self.templates
            .get(&(language.code(), rule.to_string()))
            .map(String::as_str)
    }

    /// Resolve a violation into a final message, substituting the field's
    /// public name. Falls back to a generic message naming the field and
    /// the rule when no template is registered.
    pub fn resolve(&self, language: Language, rule: &str, public_name: &str) -> String {
        match self.lookup(language, rule) {
            Some(template) => template.replace(FIELD_PLACEHOLDER, public_name),
            None => {
                warn!(
                    rule,
                    language = language.code(),
                    "no translation registered, using fallback message"
                );
                format!("{} is invalid ({})", public_name, rule)
            }
        }
    }
}
