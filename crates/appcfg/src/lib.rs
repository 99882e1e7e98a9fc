//! Application bootstrap configuration for Cloud Foundry deployments.
//!
//! When the platform binds backing services to an application it advertises
//! their credentials through the `VCAP_SERVICES` environment variable as a
//! JSON document. This crate decodes that document, picks up the social-login
//! OAuth keys from their own environment variables, and shapes everything
//! into the configuration structure the application's service container
//! consumes at boot:
//!
//! - **`db`**: MySQL adapter settings mapped from the ClearDB binding
//! - **`scn-social-auth`**: Facebook/Twitter OAuth keys, optional
//! - **`service_manager`**: fixed factory and invokable registrations
//!
//! Loading is synchronous and runs once during startup. Any missing or
//! malformed binding is a hard error; the application must not boot with a
//! partial configuration.
//!
//! ## Modules
//!
//! - [`env`]: environment accessor abstraction for deterministic tests
//! - [`vcap`]: the decoded `VCAP_SERVICES` model and typed lookups
//! - [`config`]: the output sections and the top-level [`AppConfig`]
//! - [`error`]: typed configuration errors
//!
//! ## Example
//!
//! ```
//! use std::collections::HashMap;
//! use appcfg::AppConfig;
//!
//! let mut env = HashMap::new();
//! env.insert(
//!     "VCAP_SERVICES".to_string(),
//!     r#"{"cleardb":[{"credentials":{"hostname":"h","name":"d","username":"u","password":"p"}}]}"#
//!         .to_string(),
//! );
//!
//! let config = AppConfig::load(&env).unwrap();
//! assert_eq!(config.db.driver, "PdoMysql");
//! assert_eq!(config.db.database, "d");
//! ```

pub mod config;
pub mod env;
pub mod error;
pub mod vcap;

pub use config::AppConfig;
pub use env::{Environment, ProcessEnv};
pub use error::{ConfigError, ConfigResult};
pub use vcap::VcapServices;
