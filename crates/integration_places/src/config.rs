//! Places autocomplete configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Places Autocomplete endpoint
pub const DEFAULT_ENDPOINT_URL: &str = "https://maps.googleapis.com/maps/api/place/autocomplete/json";

/// Configuration for the Google Places Autocomplete client
///
/// The API key, region and language are forwarded as-is. They are not
/// checked locally; the upstream API decides whether they are acceptable.
#[derive(Clone, Serialize, Deserialize)]
pub struct PlacesConfig {
    /// Google Maps Places API key (sensitive - uses `SecretString`)
    #[serde(skip_serializing)]
    pub api_key: SecretString,

    /// Region bias as a ccTLD code (e.g., "de")
    #[serde(default)]
    pub region: Option<String>,

    /// Result language (default: "en")
    #[serde(default = "default_language")]
    pub language: Option<String>,

    /// Autocomplete endpoint
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,

    /// Timeout for the bundled HTTP transport in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[allow(clippy::unnecessary_wraps)] // serde default must match the field type
fn default_language() -> Option<String> {
    Some("en".to_string())
}

fn default_endpoint_url() -> String {
    DEFAULT_ENDPOINT_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl std::fmt::Debug for PlacesConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesConfig")
            .field("api_key", &"[REDACTED]")
            .field("region", &self.region)
            .field("language", &self.language)
            .field("endpoint_url", &self.endpoint_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl PlacesConfig {
    /// Create a configuration with the given API key and default settings
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            region: None,
            language: default_language(),
            endpoint_url: default_endpoint_url(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Self::new("test-api-key")
        }
    }

    /// Set the region bias
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the result language
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Drop the language parameter from requests entirely
    #[must_use]
    pub fn without_language(mut self) -> Self {
        self.language = None;
        self
    }

    /// Point the client at a different endpoint
    #[must_use]
    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = endpoint_url.into();
        self
    }

    /// Get the API key as a string slice
    pub(crate) fn api_key_str(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Validate the transport-facing settings
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is empty or the timeout is zero.
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint_url.is_empty() {
            return Err("endpoint_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
