//! Application bootstrap configuration sections.
//!
//! The top-level [`AppConfig`] mirrors the structure the application's
//! service container merges during boot: a `db` section mapped from the
//! ClearDB binding, the `scn-social-auth` OAuth keys, and the fixed
//! `service_manager` registrations.

mod db;
mod service_manager;
mod social_auth;

pub use db::{DbConfig, DbCredentials, DB_SERVICE};
pub use service_manager::ServiceManagerConfig;
pub use social_auth::SocialAuthConfig;

use serde::{Deserialize, Serialize};

use crate::env::{Environment, ProcessEnv};
use crate::error::ConfigResult;
use crate::vcap::VcapServices;

/// Configuration handed to the application's service container at boot.
///
/// Built fresh on every load, never mutated afterwards. Serialized key names
/// match what the downstream configuration merge expects, including the
/// `scn-social-auth` section name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Database adapter settings
    pub db: DbConfig,

    /// Social-login OAuth keys
    #[serde(rename = "scn-social-auth")]
    pub social_auth: SocialAuthConfig,

    /// Service-container registrations
    pub service_manager: ServiceManagerConfig,
}

impl AppConfig {
    /// Build the configuration from the given environment.
    ///
    /// Fails when `VCAP_SERVICES` is missing, malformed, or carries no
    /// usable database binding. The caller is expected to abort startup on
    /// any error; no partial configuration is ever returned.
    pub fn load(env: &impl Environment) -> ConfigResult<Self> {
        let vcap = VcapServices::from_env(env)?;
        let db = DbConfig::from_vcap(&vcap)?;
        tracing::debug!(
            hostname = %db.hostname,
            database = %db.database,
            "resolved database binding"
        );

        Ok(Self {
            db,
            social_auth: SocialAuthConfig::from_env(env),
            service_manager: ServiceManagerConfig::default(),
        })
    }

    /// Load from the real process environment.
    pub fn from_process_env() -> ConfigResult<Self> {
        Self::load(&ProcessEnv)
    }
}
