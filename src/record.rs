//! Schema-description model for records under validation.
//!
//! A `Record` is an ordered list of `Field`s. Each field carries its
//! internal identifier, an optional external-facing alias (serde-style,
//! e.g. `"phone,omitempty"`), a comma-separated constraint tag list
//! (e.g. `"required,min=6"`), and its runtime value.

use serde_json::Value;

/// A single field of a record: identifier, optional alias, constraint
/// tags, and runtime value.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    alias: Option<String>,
    tags: String,
    value: Value,
}

impl Field {
    /// Create a field with an internal identifier and a runtime value.
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            alias: None,
            tags: String::new(),
            value,
        }
    }

    /// Set the external-facing alias (wire/JSON name, options after a comma).
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Set the comma-separated constraint tag list, e.g. `"required,password"`.
    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    /// The field's internal identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared external-facing alias, if any.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// The field's runtime value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Iterate over the declared constraints in declaration order.
    ///
    /// Empty segments are skipped, so `"required,,password"` yields two
    /// constraints.
    pub fn constraints(&self) -> impl Iterator<Item = Constraint<'_>> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(Constraint::parse)
    }
}

/// A single parsed constraint: a rule name plus an optional parameter
/// (`min=6` carries the parameter `6`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint<'a> {
    /// Name of the rule this constraint triggers.
    pub name: &'a str,
    /// Optional parameter after `=`.
    pub param: Option<&'a str>,
}

impl<'a> Constraint<'a> {
    fn parse(segment: &'a str) -> Self {
        match segment.split_once('=') {
            Some((name, param)) => Self {
                name: name.trim(),
                param: Some(param.trim()),
            },
            None => Self {
                name: segment,
                param: None,
            },
        }
    }
}

/// An ordered collection of fields forming one record.
#[derive(Debug, Clone, Default)]
pub struct Record {
    fields: Vec<Field>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field to the record.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// All fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}
