//! Service-container registrations merged at bootstrap.
//!
//! These map abstract service names to the class that constructs (factory)
//! or is itself (invokable) the service instance. The strings are opaque
//! registration tokens for the downstream container; their exact spelling,
//! backslashes included, is the contract.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

const DB_ADAPTER_SERVICE: &str = r"Zend\Db\Adapter\Adapter";
const DB_ADAPTER_FACTORY: &str = r"Zend\Db\Adapter\AdapterServiceFactory";
const SESSION_MANAGER_SERVICE: &str = r"Zend\Session\SessionManager";

/// The `service_manager` configuration section.
///
/// Always carries exactly the two fixed registrations, regardless of the
/// environment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceManagerConfig {
    /// Service name to factory class
    pub factories: BTreeMap<String, String>,

    /// Service name to directly-constructible class
    pub invokables: BTreeMap<String, String>,
}

impl Default for ServiceManagerConfig {
    fn default() -> Self {
        let mut factories = BTreeMap::new();
        factories.insert(
            DB_ADAPTER_SERVICE.to_string(),
            DB_ADAPTER_FACTORY.to_string(),
        );

        let mut invokables = BTreeMap::new();
        invokables.insert(
            SESSION_MANAGER_SERVICE.to_string(),
            SESSION_MANAGER_SERVICE.to_string(),
        );

        Self {
            factories,
            invokables,
        }
    }
}
