//! Error types for configuration loading.
//!
//! Every variant is fatal at this layer: the provider runs once during
//! application startup and callers propagate these errors to abort the boot.

use thiserror::Error;

/// Failures while resolving the application configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    /// `VCAP_SERVICES` did not contain valid JSON
    #[error("VCAP_SERVICES is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// No binding exists for the requested service type
    #[error("no {0} service is bound in VCAP_SERVICES")]
    ServiceNotBound(String),

    /// The service type is present but carries no instances
    #[error("service {0} is bound with an empty instance list")]
    NoBindings(String),

    /// The binding's credentials object is missing fields or has wrong types
    #[error("malformed credentials for service {service}: {source}")]
    BadCredentials {
        service: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_message() {
        let err = ConfigError::MissingEnv("VCAP_SERVICES");
        assert_eq!(
            err.to_string(),
            "environment variable VCAP_SERVICES is not set"
        );
    }

    #[test]
    fn test_service_not_bound_message() {
        let err = ConfigError::ServiceNotBound("cleardb".to_string());
        assert_eq!(err.to_string(), "no cleardb service is bound in VCAP_SERVICES");
    }

    #[test]
    fn test_invalid_json_keeps_source() {
        use std::error::Error as _;

        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ConfigError::InvalidJson(source);
        assert!(err.to_string().starts_with("VCAP_SERVICES is not valid JSON"));
        assert!(err.source().is_some());
    }
}
