//! Language registry: single source of truth for supported languages.
//!
//! The registry holds static metadata only. Validator instances are
//! caller-owned; nothing here keeps per-validator state.

use std::sync::OnceLock;

/// Metadata for one supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g. "en", "es")
    pub code: &'static str,

    /// English name of the language
    pub name: &'static str,

    /// Native name of the language
    pub native_name: &'static str,

    /// Whether this is the canonical language messages default to
    pub is_canonical: bool,

    /// Whether this language may be activated
    pub enabled: bool,
}

/// Read-only registry of supported languages, initialized once.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Global registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: supported_languages(),
        })
    }

    /// Look up a language by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// The canonical language, if the registry defines one.
    pub fn canonical(&self) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.is_canonical)
    }

    /// All languages that may be activated.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Whether a language code exists and is enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code).is_some_and(|lang| lang.enabled)
    }
}

/// The supported language set. English is canonical; Spanish is an
/// enabled activation target for caller-supplied catalogs.
fn supported_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_canonical: true,
            enabled: true,
        },
        LanguageConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            is_canonical: false,
            enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_singleton() {
        let a = LanguageRegistry::get();
        let b = LanguageRegistry::get();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_get_by_code() {
        let registry = LanguageRegistry::get();

        let en = registry.get_by_code("en").expect("en registered");
        assert_eq!(en.name, "English");
        assert!(en.is_canonical);

        let es = registry.get_by_code("es").expect("es registered");
        assert_eq!(es.native_name, "Español");
        assert!(!es.is_canonical);
    }

    #[test]
    fn test_get_by_code_unknown() {
        assert!(LanguageRegistry::get().get_by_code("fr").is_none());
    }

    #[test]
    fn test_canonical_is_english() {
        let canonical = LanguageRegistry::get()
            .canonical()
            .expect("canonical defined");
        assert_eq!(canonical.code, "en");
    }

    #[test]
    fn test_exactly_one_canonical() {
        let canonicals = LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .filter(|lang| lang.is_canonical)
            .count();
        assert_eq!(canonicals, 1);
    }

    #[test]
    fn test_is_enabled() {
        let registry = LanguageRegistry::get();
        assert!(registry.is_enabled("en"));
        assert!(registry.is_enabled("es"));
        assert!(!registry.is_enabled("fr"));
    }
}
