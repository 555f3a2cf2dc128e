//! Logging setup for hosts embedding the validator.
//!
//! Pure formatting/output configuration, no decision logic: production
//! gets compact INFO output on stderr, everything else gets DEBUG with
//! targets. `RUST_LOG` overrides the profile's default level. The core
//! only emits `tracing` events; calling `init` is optional and repeated
//! calls are no-ops.

use std::io;
use tracing_subscriber::EnvFilter;

/// Deployment environment selecting a logging profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Staging,
    Development,
}

impl Environment {
    /// Parse an environment name, defaulting to `Development`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "production" => Environment::Production,
            "staging" => Environment::Staging,
            _ => Environment::Development,
        }
    }

    /// Canonical name of the environment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Staging => "staging",
            Environment::Development => "development",
        }
    }

    fn default_level(&self) -> &'static str {
        match self {
            Environment::Production => "info",
            Environment::Staging | Environment::Development => "debug",
        }
    }
}

/// Install the global tracing subscriber for the given environment.
///
/// Does nothing if a subscriber is already installed.
pub fn init(environment: Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(environment.default_level()));

    let result = match environment {
        Environment::Production => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .compact()
            .try_init(),
        Environment::Staging | Environment::Development => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init(),
    };
    let _ = result;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Environment::from_name("production"), Environment::Production);
        assert_eq!(Environment::from_name("staging"), Environment::Staging);
        assert_eq!(Environment::from_name("development"), Environment::Development);
        assert_eq!(Environment::from_name("anything-else"), Environment::Development);
    }

    #[test]
    fn test_as_str_round_trips() {
        for env in [
            Environment::Production,
            Environment::Staging,
            Environment::Development,
        ] {
            assert_eq!(Environment::from_name(env.as_str()), env);
        }
    }

    #[test]
    fn test_init_is_idempotent() {
        init(Environment::Development);
        init(Environment::Production);
    }
}
