//! Bound-service credentials advertised through `VCAP_SERVICES`.
//!
//! Cloud Foundry exposes every service bound to an application as a JSON
//! document mapping the service-type name (e.g. `cleardb`) to a list of
//! binding descriptors. Each descriptor carries a `credentials` object whose
//! shape is specific to the service type, plus descriptive fields the
//! platform adds (`name`, `label`, `plan`, `tags`) that are preserved here
//! but not interpreted.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::env::Environment;
use crate::error::{ConfigError, ConfigResult};

/// Environment variable the platform uses to advertise bound services.
pub const VCAP_SERVICES: &str = "VCAP_SERVICES";

/// One bound-service descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceBinding {
    /// Instance name assigned when the service was bound
    #[serde(default)]
    pub name: Option<String>,

    /// Service offering label
    #[serde(default)]
    pub label: Option<String>,

    /// Service plan
    #[serde(default)]
    pub plan: Option<String>,

    /// Tags attached by the platform or broker
    #[serde(default)]
    pub tags: Vec<String>,

    /// Connection credentials, shape specific to the service type
    #[serde(default)]
    pub credentials: Value,
}

impl ServiceBinding {
    /// Deserialize the credentials object into a typed struct.
    ///
    /// Missing fields or wrong types surface as
    /// [`ConfigError::BadCredentials`] tagged with the service name.
    pub fn credentials_as<T: DeserializeOwned>(&self, service: &str) -> ConfigResult<T> {
        serde_json::from_value(self.credentials.clone()).map_err(|source| {
            ConfigError::BadCredentials {
                service: service.to_string(),
                source,
            }
        })
    }
}

/// The decoded `VCAP_SERVICES` document: service-type name to bound instances.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VcapServices(BTreeMap<String, Vec<ServiceBinding>>);

impl VcapServices {
    /// Read and decode `VCAP_SERVICES` from the given environment.
    pub fn from_env(env: &impl Environment) -> ConfigResult<Self> {
        let raw = env
            .var(VCAP_SERVICES)
            .ok_or(ConfigError::MissingEnv(VCAP_SERVICES))?;
        Self::parse(&raw)
    }

    /// Decode a raw `VCAP_SERVICES` JSON document.
    pub fn parse(raw: &str) -> ConfigResult<Self> {
        serde_json::from_str(raw).map_err(ConfigError::InvalidJson)
    }

    /// All bindings for a service type.
    pub fn service(&self, service: &str) -> ConfigResult<&[ServiceBinding]> {
        self.0
            .get(service)
            .map(Vec::as_slice)
            .ok_or_else(|| ConfigError::ServiceNotBound(service.to_string()))
    }

    /// First binding for a service type.
    ///
    /// An application bound to several instances of the same service type
    /// conventionally uses the first one.
    pub fn first_binding(&self, service: &str) -> ConfigResult<&ServiceBinding> {
        self.service(service)?
            .first()
            .ok_or_else(|| ConfigError::NoBindings(service.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const CLEARDB_DOC: &str = r#"{
        "cleardb": [
            {
                "name": "mysql-prod",
                "label": "cleardb",
                "plan": "spark",
                "tags": ["mysql", "relational"],
                "credentials": {
                    "hostname": "db.example.com",
                    "name": "appdb",
                    "username": "admin",
                    "password": "s3cret"
                }
            }
        ]
    }"#;

    #[test]
    fn test_parse_and_lookup() {
        let vcap = VcapServices::parse(CLEARDB_DOC).unwrap();
        let binding = vcap.first_binding("cleardb").unwrap();
        assert_eq!(binding.name.as_deref(), Some("mysql-prod"));
        assert_eq!(binding.plan.as_deref(), Some("spark"));
        assert_eq!(binding.tags, vec!["mysql", "relational"]);
        assert_eq!(binding.credentials["hostname"], json!("db.example.com"));
    }

    #[test]
    fn test_descriptor_fields_are_optional() {
        let vcap =
            VcapServices::parse(r#"{"cleardb":[{"credentials":{"hostname":"h"}}]}"#).unwrap();
        let binding = vcap.first_binding("cleardb").unwrap();
        assert!(binding.name.is_none());
        assert!(binding.tags.is_empty());
    }

    #[test]
    fn test_unknown_descriptor_fields_tolerated() {
        let vcap = VcapServices::parse(
            r#"{"cleardb":[{"credentials":{},"binding_guid":"abc","volume_mounts":[]}]}"#,
        )
        .unwrap();
        assert!(vcap.first_binding("cleardb").is_ok());
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = VcapServices::parse("not json").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidJson(_)));
    }

    #[test]
    fn test_unbound_service() {
        let vcap = VcapServices::parse("{}").unwrap();
        let err = vcap.first_binding("cleardb").unwrap_err();
        assert!(matches!(err, ConfigError::ServiceNotBound(s) if s == "cleardb"));
    }

    #[test]
    fn test_empty_instance_list() {
        let vcap = VcapServices::parse(r#"{"cleardb":[]}"#).unwrap();
        let err = vcap.first_binding("cleardb").unwrap_err();
        assert!(matches!(err, ConfigError::NoBindings(s) if s == "cleardb"));
    }

    #[test]
    fn test_missing_env_var() {
        let env: std::collections::HashMap<String, String> = std::collections::HashMap::new();
        let err = VcapServices::from_env(&env).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv("VCAP_SERVICES")));
    }

    #[test]
    fn test_typed_credentials_error_names_service() {
        #[derive(Debug, serde::Deserialize)]
        struct Creds {
            #[allow(dead_code)]
            hostname: String,
        }

        let vcap = VcapServices::parse(r#"{"cleardb":[{"credentials":{}}]}"#).unwrap();
        let binding = vcap.first_binding("cleardb").unwrap();
        let err = binding.credentials_as::<Creds>("cleardb").unwrap_err();
        assert!(matches!(err, ConfigError::BadCredentials { service, .. } if service == "cleardb"));
    }
}
