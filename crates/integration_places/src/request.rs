//! Request parameter construction
//!
//! Turns a [`GeocodeQuery`] plus client settings into the ordered parameter
//! list of an autocomplete call. The API key is appended only when the final
//! URL is built.

use serde_json::Value;
use url::Url;

use crate::query::{DATA_LOCATION, DATA_RADIUS, DATA_SESSION_TOKEN, GeocodeQuery};

/// Placeholder used in place of the API key in loggable URLs
pub(crate) const REDACTED_KEY: &str = "REDACTED";

/// Autocomplete restricted to geocoding results
const TYPES_GEOCODE: &str = "geocode";

/// Ordered query parameters for one autocomplete call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    params: Vec<(&'static str, String)>,
}

impl RequestParams {
    /// Build the parameters for `query`
    ///
    /// `language` and `region` are included only when set. The text is
    /// forwarded even when empty.
    #[must_use]
    pub fn build(query: &GeocodeQuery, language: Option<&str>, region: Option<&str>) -> Self {
        let mut params = Self::default();

        params.push("input", query.text());
        params.push("types", TYPES_GEOCODE);

        if let Some(language) = language {
            params.push("language", language);
        }

        if let Some(region) = region {
            params.push("region", region);
        }

        if let Some(radius) = query.data(DATA_RADIUS).and_then(render_value) {
            params.push("radius", radius);
        }

        if let Some(bounds) = query.bounds() {
            params.push(
                "locationbias",
                format!(
                    "rectangle:{},{}|{},{}",
                    bounds.south, bounds.west, bounds.north, bounds.east
                ),
            );
        }

        // The flag and the value share the `location` key, so the value sent
        // is the flag itself.
        if let Some(location) = query
            .data(DATA_LOCATION)
            .filter(|value| value.as_bool() == Some(true))
        {
            if let Some(value) = render_value(location) {
                params.push("location", value);
            }
            params.push("strictbounds", "true");
        }

        if let Some(token) = query.data(DATA_SESSION_TOKEN).and_then(render_value) {
            params.push("sessiontoken", token);
        }

        params
    }

    fn push(&mut self, name: &'static str, value: impl Into<String>) {
        self.params.push((name, value.into()));
    }

    /// Value of the first parameter called `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether a parameter called `name` is present
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Parameter names in order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.params.iter().map(|(key, _)| *key)
    }

    /// Form-encode the parameters onto `endpoint`, appending `key` last
    ///
    /// # Errors
    ///
    /// Returns an error if `endpoint` is not a valid absolute URL.
    pub fn to_url(&self, endpoint: &str, key: &str) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(endpoint)?;
        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.params {
                pairs.append_pair(name, value);
            }
            pairs.append_pair("key", key);
        }
        Ok(url)
    }

    /// Same as [`to_url`](Self::to_url) with the key replaced by a placeholder
    ///
    /// # Errors
    ///
    /// Returns an error if `endpoint` is not a valid absolute URL.
    pub fn to_redacted_url(&self, endpoint: &str) -> Result<Url, url::ParseError> {
        self.to_url(endpoint, REDACTED_KEY)
    }
}

/// Render an auxiliary value as a query parameter; `null` means absent
fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}
