//! Database section mapped from the ClearDB service binding.

use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;
use crate::vcap::VcapServices;

/// Service-type key under which ClearDB appears in `VCAP_SERVICES`.
pub const DB_SERVICE: &str = "cleardb";

/// Driver identifier the database adapter factory expects.
const DB_DRIVER: &str = "PdoMysql";

/// Credentials as they appear inside the ClearDB binding.
///
/// The binding calls the database `name`; the output section calls it
/// `database`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DbCredentials {
    pub hostname: String,
    pub name: String,
    pub username: String,
    pub password: String,
}

/// The `db` configuration section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DbConfig {
    /// Adapter driver, always `PdoMysql`
    pub driver: String,
    pub hostname: String,
    pub database: String,
    pub username: String,
    pub password: String,
}

impl DbConfig {
    /// Resolve the section from the first ClearDB binding.
    pub fn from_vcap(vcap: &VcapServices) -> ConfigResult<Self> {
        let binding = vcap.first_binding(DB_SERVICE)?;
        let creds: DbCredentials = binding.credentials_as(DB_SERVICE)?;
        Ok(Self::from_credentials(creds))
    }

    /// Map bound credentials onto the section, fixing the driver.
    pub fn from_credentials(creds: DbCredentials) -> Self {
        Self {
            driver: DB_DRIVER.to_string(),
            hostname: creds.hostname,
            database: creds.name,
            username: creds.username,
            password: creds.password,
        }
    }
}
