//! PDOK Locatieserver configuration

use domain::QueryData;
use serde::{Deserialize, Serialize};

/// Configuration for the PDOK Locatieserver geocoding provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdokConfig {
    /// Base URL of the Locatieserver search API (without endpoint suffix)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Extra query parameters sent with every request
    ///
    /// `fl`, `rows`, `type` and `wt` are ignored.
    #[serde(default)]
    pub options: QueryData,
}

fn default_base_url() -> String {
    "https://api.pdok.nl/bzk/locatieserver/search/v3_1".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("integration_pdok/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for PdokConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            options: QueryData::new(),
        }
    }
}

impl PdokConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if url::Url::parse(&self.base_url).is_err() {
            return Err(format!("base_url is not a valid URL: {}", self.base_url));
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
