//! Field-naming resolution: deriving the public name of a field.
//!
//! The public name is the identifier shown in error messages and used as
//! the key of the returned violation map. The default policy follows the
//! serde alias convention: the portion of the alias before the first
//! comma, with `-` as the suppression sentinel and the internal
//! identifier as fallback.

use crate::record::Field;
use std::fmt;
use std::sync::Arc;

/// Alias sentinel meaning "never expose this field".
const SUPPRESSED: &str = "-";

/// Policy deriving a field's public name.
///
/// Returning `None` suppresses the field: it is excluded from
/// external-facing error maps even when it violates a rule.
#[derive(Clone)]
pub struct NamingPolicy {
    resolve: Arc<dyn Fn(&Field) -> Option<String> + Send + Sync>,
}

impl NamingPolicy {
    /// Create a policy from an arbitrary resolution function.
    pub fn new(resolve: impl Fn(&Field) -> Option<String> + Send + Sync + 'static) -> Self {
        Self {
            resolve: Arc::new(resolve),
        }
    }

    /// The serde alias convention:
    ///
    /// - alias declared: use the portion before the first `,` (options
    ///   such as `omitempty` are not part of the name)
    /// - that portion equals `-`: the field is suppressed
    /// - that portion is empty (alias like `",omitempty"`) or no alias at
    ///   all: fall back to the internal identifier unmodified
    pub fn serde_alias() -> Self {
        Self::new(|field| {
            let Some(alias) = field.alias() else {
                return Some(field.name().to_string());
            };

            let public = alias.split_once(',').map(|(head, _)| head).unwrap_or(alias);
            match public {
                SUPPRESSED => None,
                "" => Some(field.name().to_string()),
                name => Some(name.to_string()),
            }
        })
    }

    /// Resolve the public name of `field`, or `None` when suppressed.
    pub fn public_name(&self, field: &Field) -> Option<String> {
        (self.resolve)(field)
    }
}

impl Default for NamingPolicy {
    fn default() -> Self {
        Self::serde_alias()
    }
}

impl fmt::Debug for NamingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamingPolicy").finish_non_exhaustive()
    }
}
