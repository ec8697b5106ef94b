//! Query value objects
//!
//! Caller-constructed inputs for the provider. They are read-only once handed
//! to the client.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Auxiliary data key for the search radius in meters
pub const DATA_RADIUS: &str = "radius";

/// Auxiliary data key for the strict-bounds flag
pub const DATA_LOCATION: &str = "location";

/// Auxiliary data key for the billing session token
pub const DATA_SESSION_TOKEN: &str = "sessiontoken";

/// Geographic bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Southern latitude
    pub south: f64,
    /// Western longitude
    pub west: f64,
    /// Northern latitude
    pub north: f64,
    /// Eastern longitude
    pub east: f64,
}

impl Bounds {
    /// Create a bounding box from its four edges
    #[must_use]
    pub const fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }
}

/// Opaque token grouping a sequence of autocomplete calls for billing
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Generate a fresh random token
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the token as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionToken {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for SessionToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SessionToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Forward geocoding query
///
/// Besides the free text and optional bounds, a query carries an auxiliary
/// data map. The client understands [`DATA_RADIUS`], [`DATA_LOCATION`] and
/// [`DATA_SESSION_TOKEN`]; other keys are carried but ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeocodeQuery {
    text: String,
    #[serde(default)]
    bounds: Option<Bounds>,
    #[serde(default)]
    data: BTreeMap<String, Value>,
}

impl GeocodeQuery {
    /// Create a query for the given free text
    ///
    /// Empty text is accepted and forwarded to the API.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bounds: None,
            data: BTreeMap::new(),
        }
    }

    /// Bias results to the given bounding box
    #[must_use]
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Attach an arbitrary auxiliary value
    #[must_use]
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Set the search radius in meters
    #[must_use]
    pub fn with_radius(self, radius: impl Into<Value>) -> Self {
        self.with_data(DATA_RADIUS, radius)
    }

    /// Set the strict-bounds flag
    #[must_use]
    pub fn with_location_flag(self, strict: bool) -> Self {
        self.with_data(DATA_LOCATION, strict)
    }

    /// Group this call into a billing session
    #[must_use]
    pub fn with_session_token(self, token: &SessionToken) -> Self {
        self.with_data(DATA_SESSION_TOKEN, token.as_str())
    }

    /// Free-text search string
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Bounding box, if any
    #[must_use]
    pub const fn bounds(&self) -> Option<&Bounds> {
        self.bounds.as_ref()
    }

    /// Auxiliary value stored under `key`; JSON `null` counts as absent
    #[must_use]
    pub fn data(&self, key: &str) -> Option<&Value> {
        self.data.get(key).filter(|value| !value.is_null())
    }
}

/// Reverse geocoding query (coordinates to place)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReverseQuery {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl ReverseQuery {
    /// Create a reverse query for the given coordinates
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults() {
        let query = GeocodeQuery::new("Berlin");
        assert_eq!(query.text(), "Berlin");
        assert!(query.bounds().is_none());
        assert!(query.data(DATA_RADIUS).is_none());
    }

    #[test]
    fn test_query_builders() {
        let token = SessionToken::from("tok-1");
        let query = GeocodeQuery::new("Berlin")
            .with_bounds(Bounds::new(1.0, 2.0, 3.0, 4.0))
            .with_radius(500)
            .with_location_flag(true)
            .with_session_token(&token);

        assert_eq!(query.bounds(), Some(&Bounds::new(1.0, 2.0, 3.0, 4.0)));
        assert_eq!(query.data(DATA_RADIUS), Some(&Value::from(500)));
        assert_eq!(query.data(DATA_LOCATION), Some(&Value::Bool(true)));
        assert_eq!(query.data(DATA_SESSION_TOKEN), Some(&Value::from("tok-1")));
    }

    #[test]
    fn test_null_data_counts_as_absent() {
        let query = GeocodeQuery::new("x").with_data(DATA_RADIUS, Value::Null);
        assert!(query.data(DATA_RADIUS).is_none());
    }

    #[test]
    fn test_session_tokens_are_unique() {
        let a = SessionToken::new();
        let b = SessionToken::new();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
    }

    #[test]
    fn test_session_token_display() {
        let token = SessionToken::from("abc".to_string());
        assert_eq!(token.to_string(), "abc");
    }

    #[test]
    fn test_query_deserialization() {
        let json = r#"{"text": "Paris", "data": {"radius": 1000}}"#;
        let query: GeocodeQuery = serde_json::from_str(json).unwrap();
        assert_eq!(query.text(), "Paris");
        assert!(query.bounds().is_none());
        assert_eq!(query.data(DATA_RADIUS), Some(&Value::from(1000)));
    }
}
