//! Validator assembly and record validation.
//!
//! `Validator::build` wires the default sub-components (built-in +
//! custom rules, seeded catalog, canonical language, serde-alias naming
//! policy) and then applies the caller's override directives in order.
//! The resulting instance is immutable and safe to share across threads
//! for any number of concurrent `validate` calls.

use crate::error::{BuildError, CatalogError};
use crate::i18n::{Catalog, Language};
use crate::naming::NamingPolicy;
use crate::record::Record;
use crate::rules::{self, Predicate, RuleSet};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Custom rules installed by the default build, each paired with its
/// default-language message template.
const CUSTOM_RULES: &[(&str, Predicate, &str)] = &[
    (
        "password",
        rules::password,
        "{field} is not strong enough, password must be at least 6 characters",
    ),
    (
        "countryCode",
        rules::country_code,
        "{field} must be at least 2 characters and start with '+'",
    ),
];

/// A caller-supplied substitution applied during assembly.
///
/// Directives are applied left-to-right; a later directive of the same
/// kind wins over an earlier one. Each replaces its sub-component
/// wholesale, with no cross-component compatibility checks.
pub enum Override {
    /// Replace the rule engine.
    Rules(RuleSet),
    /// Replace the translation catalog.
    Catalog(Catalog),
    /// Replace the active language.
    Language(Language),
    /// Replace the field-naming policy.
    Naming(NamingPolicy),
}

/// A fail-soft translation registration failure recorded during assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationWarning {
    /// Rule whose translation failed to register.
    pub rule: String,
    /// The underlying registration error.
    pub error: CatalogError,
}

/// Outcome of one validation call: ok, or a mapping from each violating
/// field's public name to its resolved message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    violations: BTreeMap<String, String>,
}

impl Report {
    /// Whether the record passed validation.
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    /// Public field name → resolved message, for every violating field.
    pub fn violations(&self) -> &BTreeMap<String, String> {
        &self.violations
    }

    /// The message for one public field name, if it violated a rule.
    pub fn message(&self, public_name: &str) -> Option<&str> {
        self.violations.get(public_name).map(String::as_str)
    }
}

/// An assembled, immutable validation instance.
pub struct Validator {
    rules: RuleSet,
    catalog: Catalog,
    language: Language,
    naming: NamingPolicy,
    warnings: Vec<RegistrationWarning>,
}

impl Validator {
    /// Assemble a validator from defaults, then apply `overrides` in
    /// order.
    ///
    /// Fails when the canonical language cannot be located in the
    /// registry or when seeding the built-in translations fails; no
    /// partially-wired instance is returned. Custom-rule translation
    /// failures are fail-soft: they are logged, recorded in
    /// [`Validator::warnings`], and do not abort assembly.
    pub fn build(overrides: impl IntoIterator<Item = Override>) -> Result<Validator, BuildError> {
        let language = Language::canonical()?;
        let mut catalog = Catalog::with_defaults(language)?;
        let mut rule_set = RuleSet::with_builtins();
        let mut warnings = Vec::new();

        for (name, predicate, template) in CUSTOM_RULES {
            if let Err(error) = catalog.register(language, name, template) {
                warn!(rule = *name, %error, "custom translation registration failed");
                warnings.push(RegistrationWarning {
                    rule: (*name).to_string(),
                    error,
                });
            }
            rule_set.register(*name, *predicate);
        }

        let mut validator = Validator {
            rules: rule_set,
            catalog,
            language,
            naming: NamingPolicy::default(),
            warnings,
        };
        for directive in overrides {
            validator.apply(directive);
        }

        debug!(language = validator.language.code(), "validator assembled");
        Ok(validator)
    }

    /// Assemble a validator with no overrides.
    pub fn default_build() -> Result<Validator, BuildError> {
        Self::build([])
    }

    fn apply(&mut self, directive: Override) {
        match directive {
            Override::Rules(rules) => self.rules = rules,
            Override::Catalog(catalog) => self.catalog = catalog,
            Override::Language(language) => self.language = language,
            Override::Naming(naming) => self.naming = naming,
        }
    }

    /// The active language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Fail-soft translation registration failures accumulated during
    /// assembly. Empty for a cleanly-assembled default instance.
    pub fn warnings(&self) -> &[RegistrationWarning] {
        &self.warnings
    }

    /// Validate a record against its declared constraints.
    ///
    /// Violations are collected exhaustively across all fields. A field
    /// whose public name is suppressed is excluded from the report even
    /// when it violates a rule. When a field violates several
    /// constraints, the first declared one provides its message.
    pub fn validate(&self, record: &Record) -> Report {
        let mut violations = BTreeMap::new();

        for field in record.fields() {
            let Some(public_name) = self.naming.public_name(field) else {
                debug!(field = field.name(), "field suppressed by naming policy");
                continue;
            };
            if public_name.is_empty() {
                debug!(field = field.name(), "field suppressed by naming policy");
                continue;
            }

            let Some(rule) = self.rules.evaluate(field).into_iter().next() else {
                continue;
            };
            let message = self.catalog.resolve(self.language, rule, &public_name);
            violations.entry(public_name).or_insert(message);
        }

        Report { violations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Field;
    use serde_json::json;

    fn signup_record(password: &str, country_code: &str) -> Record {
        Record::new()
            .with_field(
                Field::new("Password", json!(password))
                    .with_alias("password")
                    .with_tags("password"),
            )
            .with_field(
                Field::new("CountryCode", json!(country_code))
                    .with_alias("countryCode")
                    .with_tags("countryCode"),
            )
    }

    // ==================== Build Tests ====================

    #[test]
    fn test_default_build_succeeds_without_warnings() {
        let validator = Validator::default_build().expect("default build");
        assert!(validator.warnings().is_empty());
        assert_eq!(validator.language(), Language::ENGLISH);
    }

    #[test]
    fn test_default_build_is_deterministic() {
        let a = Validator::default_build().expect("build");
        let b = Validator::default_build().expect("build");

        let record = signup_record("abc", "44");
        assert_eq!(a.validate(&record), b.validate(&record));

        let record = signup_record("abcdef", "+44");
        assert_eq!(a.validate(&record), b.validate(&record));
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_invalid_password_and_country_code() {
        let validator = Validator::default_build().expect("build");
        let report = validator.validate(&signup_record("abc", "44"));

        assert!(!report.is_ok());
        assert_eq!(
            report.message("password"),
            Some("password is not strong enough, password must be at least 6 characters")
        );
        assert_eq!(
            report.message("countryCode"),
            Some("countryCode must be at least 2 characters and start with '+'")
        );
    }

    #[test]
    fn test_valid_password_and_empty_country_code() {
        let validator = Validator::default_build().expect("build");
        let report = validator.validate(&signup_record("abcdef", ""));
        assert!(report.is_ok());
    }

    #[test]
    fn test_valid_password_and_country_code() {
        let validator = Validator::default_build().expect("build");
        let report = validator.validate(&signup_record("abcdef", "+44"));
        assert!(report.is_ok());
    }

    #[test]
    fn test_first_declared_constraint_provides_the_message() {
        let validator = Validator::default_build().expect("build");
        let record = Record::new().with_field(
            Field::new("Password", json!(""))
                .with_alias("password")
                .with_tags("required,password"),
        );

        let report = validator.validate(&record);
        assert_eq!(
            report.message("password"),
            Some("password is a required field")
        );
    }

    #[test]
    fn test_suppressed_field_excluded() {
        let validator = Validator::default_build().expect("build");
        let record = Record::new().with_field(
            Field::new("Password", json!(""))
                .with_alias("-")
                .with_tags("password"),
        );

        let report = validator.validate(&record);
        assert!(report.is_ok());
    }

    // ==================== Override Tests ====================

    #[test]
    fn test_rules_override_replaces_engine_wholesale() {
        // An empty engine knows no rules, so nothing can be violated.
        let validator =
            Validator::build([Override::Rules(RuleSet::new())]).expect("build");
        let report = validator.validate(&signup_record("abc", "44"));
        assert!(report.is_ok());
    }

    #[test]
    fn test_catalog_override_replaces_catalog_wholesale() {
        // The replacement is empty, so resolution falls back for every rule.
        let validator =
            Validator::build([Override::Catalog(Catalog::new())]).expect("build");
        let report = validator.validate(&signup_record("abc", "+44"));
        assert_eq!(report.message("password"), Some("password is invalid (password)"));
    }

    #[test]
    fn test_language_and_catalog_override_pair() {
        let mut catalog = Catalog::new();
        catalog
            .register(
                Language::SPANISH,
                "password",
                "{field} no es suficientemente segura",
            )
            .expect("valid template");

        let validator = Validator::build([
            Override::Catalog(catalog),
            Override::Language(Language::SPANISH),
        ])
        .expect("build");

        let report = validator.validate(&signup_record("abc", ""));
        assert_eq!(
            report.message("password"),
            Some("password no es suficientemente segura")
        );
    }

    #[test]
    fn test_later_directive_of_same_kind_wins() {
        let validator = Validator::build([
            Override::Language(Language::SPANISH),
            Override::Language(Language::ENGLISH),
        ])
        .expect("build");
        assert_eq!(validator.language(), Language::ENGLISH);
    }

    #[test]
    fn test_naming_override() {
        let validator = Validator::build([Override::Naming(NamingPolicy::new(|field| {
            Some(format!("record.{}", field.name()))
        }))])
        .expect("build");

        let report = validator.validate(&signup_record("abc", ""));
        assert!(report.message("record.Password").is_some());
        assert!(report.message("password").is_none());
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_serializes_as_plain_map() {
        let validator = Validator::default_build().expect("build");
        let report = validator.validate(&signup_record("abc", "44"));

        let value = serde_json::to_value(&report).expect("serialize");
        assert!(value.get("password").is_some());
        assert!(value.get("countryCode").is_some());
    }

    #[test]
    fn test_empty_report_is_ok() {
        let report = Report::default();
        assert!(report.is_ok());
        assert!(report.violations().is_empty());
    }
}
