//! The rule engine: named predicates evaluated against a record's fields.
//!
//! A rule is a pure function from a field's runtime value (plus an
//! optional tag parameter, e.g. the `6` in `min=6`) to a boolean. A rule
//! named `R` runs on every field whose constraint tag list declares `R`.
//! Registering a name that already exists replaces the prior rule.

use crate::record::Field;
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::debug;

/// A rule predicate: field value plus optional tag parameter.
pub type Predicate = fn(&Value, Option<&str>) -> bool;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

/// Named rule set evaluated against declared constraint tags.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: HashMap<String, Predicate>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a rule set pre-loaded with the built-in rules:
    /// `required`, `email`, `min`, `max`, `len`.
    pub fn with_builtins() -> Self {
        let mut set = Self::new();
        set.register("required", required);
        set.register("email", email);
        set.register("min", min);
        set.register("max", max);
        set.register("len", len);
        set
    }

    /// Register a rule. Last registration wins for a given name.
    pub fn register(&mut self, name: impl Into<String>, predicate: Predicate) {
        self.rules.insert(name.into(), predicate);
    }

    /// Whether a rule with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Evaluate one field against its declared constraints, returning the
    /// names of the violated rules in declaration order.
    ///
    /// Constraint tags with no registered rule are skipped.
    pub fn evaluate<'a>(&'a self, field: &'a Field) -> Vec<&'a str> {
        let mut violated = Vec::new();
        for constraint in field.constraints() {
            let Some((name, predicate)) = self.rules.get_key_value(constraint.name) else {
                debug!(field = field.name(), tag = constraint.name, "no rule registered for tag");
                continue;
            };
            if !predicate(field.value(), constraint.param) {
                violated.push(name.as_str());
            }
        }
        violated
    }
}

// ==================== Built-in rules ====================

/// `required`: the value must be present and non-empty.
fn required(value: &Value, _param: Option<&str>) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(entries) => !entries.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}

/// `email`: the value must be a string of the shape `local@domain.tld`.
fn email(value: &Value, _param: Option<&str>) -> bool {
    let regex = EMAIL_REGEX
        .get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());
    value.as_str().is_some_and(|s| regex.is_match(s))
}

/// Measure a value for the length-family rules: character count for
/// strings, element count for arrays, the number itself for numbers.
fn measure(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => Some(s.chars().count() as f64),
        Value::Array(items) => Some(items.len() as f64),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

/// Parse the numeric parameter of a length-family constraint.
fn numeric_param(param: Option<&str>) -> Option<f64> {
    param.and_then(|p| p.parse().ok())
}

/// `min=N`: measured size/value must be at least N. A missing or
/// unparseable parameter counts as a violation so misconfigured schemas
/// surface in output.
fn min(value: &Value, param: Option<&str>) -> bool {
    match (measure(value), numeric_param(param)) {
        (Some(measured), Some(bound)) => measured >= bound,
        _ => false,
    }
}

/// `max=N`: measured size/value must be at most N.
fn max(value: &Value, param: Option<&str>) -> bool {
    match (measure(value), numeric_param(param)) {
        (Some(measured), Some(bound)) => measured <= bound,
        _ => false,
    }
}

/// `len=N`: measured size must be exactly N.
fn len(value: &Value, param: Option<&str>) -> bool {
    match (measure(value), numeric_param(param)) {
        (Some(measured), Some(bound)) => measured == bound,
        _ => false,
    }
}

// ==================== Custom rules ====================

/// `password`: the string value must be at least 6 characters.
///
/// No upper bound and no character-class requirement. Non-string values
/// fail.
pub fn password(value: &Value, _param: Option<&str>) -> bool {
    value.as_str().is_some_and(|s| s.chars().count() >= 6)
}

/// `countryCode`: an absent or empty value is valid; a non-empty value
/// must be at least 2 characters and start with `+`.
pub fn country_code(value: &Value, _param: Option<&str>) -> bool {
    let code = match value {
        Value::Null => return true,
        Value::String(s) => s,
        _ => return false,
    };
    if code.is_empty() {
        return true;
    }
    code.chars().count() >= 2 && code.starts_with('+')
}
