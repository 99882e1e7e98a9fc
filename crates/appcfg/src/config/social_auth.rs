//! OAuth keys for the social-login module.
//!
//! The platform injects these as lowercase environment variables set by the
//! operator; any of them may be absent. An unset variable stays `None`, a
//! variable set to the empty string stays `Some("")`, and this section never
//! fails to load.

use serde::{Deserialize, Serialize};

use crate::env::Environment;

pub const FACEBOOK_CLIENT_ID: &str = "facebook_client_id";
pub const FACEBOOK_SECRET: &str = "facebook_secret";
pub const TWITTER_CONSUMER_KEY: &str = "twitter_consumer_key";
pub const TWITTER_CONSUMER_SECRET: &str = "twitter_consumer_secret";

/// The `scn-social-auth` configuration section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SocialAuthConfig {
    pub facebook_client_id: Option<String>,
    pub facebook_secret: Option<String>,
    pub twitter_consumer_key: Option<String>,
    pub twitter_consumer_secret: Option<String>,
}

impl SocialAuthConfig {
    /// Read the four OAuth variables from the environment.
    pub fn from_env(env: &impl Environment) -> Self {
        Self {
            facebook_client_id: env.var(FACEBOOK_CLIENT_ID),
            facebook_secret: env.var(FACEBOOK_SECRET),
            twitter_consumer_key: env.var(TWITTER_CONSUMER_KEY),
            twitter_consumer_secret: env.var(TWITTER_CONSUMER_SECRET),
        }
    }
}
