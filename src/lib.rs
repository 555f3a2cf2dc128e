//! Structured record validation with localized, field-keyed error
//! messages.
//!
//! A caller assembles a [`Validator`] once (built-in rules, the
//! `password` and `countryCode` custom rules, a seeded message catalog,
//! and the serde-alias field-naming policy), optionally substituting any
//! sub-component through ordered [`Override`] directives. The instance is
//! immutable afterwards and safe to share across threads; each
//! [`Validator::validate`] call returns either an ok verdict or a map
//! from public field name to localized message.
//!
//! # Architecture
//!
//! - `record`: schema-description model of a record under validation
//! - `rules`: the rule engine (named predicates over field values)
//! - `i18n`: languages and the translation catalog
//! - `naming`: public-name resolution from serde-style aliases
//! - `validator`: the configuration assembler and validation entrypoint
//! - `logging`: tracing subscriber profiles for embedding hosts
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::{Field, Record, Validator};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), fieldcheck::BuildError> {
//! let validator = Validator::default_build()?;
//!
//! let record = Record::new()
//!     .with_field(
//!         Field::new("Password", json!("abc"))
//!             .with_alias("password")
//!             .with_tags("required,password"),
//!     )
//!     .with_field(
//!         Field::new("PhoneCountryCode", json!("44"))
//!             .with_alias("countryCode,omitempty")
//!             .with_tags("countryCode"),
//!     );
//!
//! let report = validator.validate(&record);
//! assert!(!report.is_ok());
//! assert!(report.message("countryCode").is_some());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod i18n;
pub mod logging;
pub mod naming;
pub mod record;
pub mod rules;
pub mod validator;

pub use error::{BuildError, CatalogError};
pub use i18n::{Catalog, Language};
pub use naming::NamingPolicy;
pub use record::{Constraint, Field, Record};
pub use rules::RuleSet;
pub use validator::{Override, RegistrationWarning, Report, Validator};
