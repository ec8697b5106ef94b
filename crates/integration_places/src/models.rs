//! Places autocomplete data models
//!
//! Public result types plus the raw wire schema of the autocomplete endpoint.

use serde::{Deserialize, Serialize};

/// One candidate place suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacePrediction {
    description: String,
    place_id: String,
    types: Vec<String>,
}

impl PlacePrediction {
    /// Create a prediction from its three required fields
    #[must_use]
    pub const fn new(description: String, place_id: String, types: Vec<String>) -> Self {
        Self {
            description,
            place_id,
            types,
        }
    }

    /// Human-readable place label
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Opaque place identifier
    #[must_use]
    pub fn place_id(&self) -> &str {
        &self.place_id
    }

    /// Category tags in API order
    #[must_use]
    pub fn types(&self) -> &[String] {
        &self.types
    }
}

/// Ordered predictions, in the order the API returned them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictionCollection {
    predictions: Vec<PlacePrediction>,
}

impl PredictionCollection {
    /// Create a collection from predictions already in API order
    #[must_use]
    pub const fn new(predictions: Vec<PlacePrediction>) -> Self {
        Self { predictions }
    }

    /// Create an empty collection
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of predictions
    #[must_use]
    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    /// Whether the collection holds no predictions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    /// First prediction, if any
    #[must_use]
    pub fn first(&self) -> Option<&PlacePrediction> {
        self.predictions.first()
    }

    /// Prediction at `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PlacePrediction> {
        self.predictions.get(index)
    }

    /// Iterate in API order
    pub fn iter(&self) -> std::slice::Iter<'_, PlacePrediction> {
        self.predictions.iter()
    }

    /// Consume into the underlying vector
    #[must_use]
    pub fn into_vec(self) -> Vec<PlacePrediction> {
        self.predictions
    }
}

impl IntoIterator for PredictionCollection {
    type Item = PlacePrediction;
    type IntoIter = std::vec::IntoIter<PlacePrediction>;

    fn into_iter(self) -> Self::IntoIter {
        self.predictions.into_iter()
    }
}

impl<'a> IntoIterator for &'a PredictionCollection {
    type Item = &'a PlacePrediction;
    type IntoIter = std::slice::Iter<'a, PlacePrediction>;

    fn into_iter(self) -> Self::IntoIter {
        self.predictions.iter()
    }
}

/// Raw autocomplete API response structures
pub(crate) mod api {
    use serde::{Deserialize, Deserializer};

    /// Status returned with a successful lookup
    pub const STATUS_OK: &str = "OK";
    pub const STATUS_INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const STATUS_REQUEST_DENIED: &str = "REQUEST_DENIED";
    pub const STATUS_OVER_QUERY_LIMIT: &str = "OVER_QUERY_LIMIT";

    /// Message the API sends alongside `REQUEST_DENIED` for a bad key
    pub const INVALID_KEY_MESSAGE: &str = "The provided API key is invalid.";

    #[derive(Debug, Deserialize)]
    pub struct AutocompleteResponse {
        #[serde(default, deserialize_with = "null_as_default")]
        pub status: String,
        pub error_message: Option<String>,
        #[serde(default, deserialize_with = "null_as_default")]
        pub predictions: Vec<Prediction>,
    }

    /// Treat an explicit JSON `null` like a missing key
    fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }

    #[derive(Debug, Deserialize)]
    pub struct Prediction {
        pub description: Option<String>,
        pub place_id: Option<String>,
        pub types: Option<Vec<String>>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(description: &str, place_id: &str) -> PlacePrediction {
        PlacePrediction::new(
            description.to_string(),
            place_id.to_string(),
            vec!["geocode".to_string()],
        )
    }

    #[test]
    fn test_prediction_accessors() {
        let p = PlacePrediction::new(
            "Berlin, Germany".to_string(),
            "ChIJAVkDPzdOqEcRcDteW0YgIQQ".to_string(),
            vec!["locality".to_string(), "political".to_string()],
        );
        assert_eq!(p.description(), "Berlin, Germany");
        assert_eq!(p.place_id(), "ChIJAVkDPzdOqEcRcDteW0YgIQQ");
        assert_eq!(p.types(), ["locality", "political"]);
    }

    #[test]
    fn test_prediction_serializes_place_id_camel_case() {
        let json = serde_json::to_value(prediction("A", "p1")).unwrap();
        assert_eq!(json["placeId"], "p1");
        assert!(json.get("place_id").is_none());
    }

    #[test]
    fn test_collection_preserves_order() {
        let collection =
            PredictionCollection::new(vec![prediction("A", "p1"), prediction("B", "p2")]);
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.first().map(PlacePrediction::place_id), Some("p1"));
        assert_eq!(collection.get(1).map(PlacePrediction::place_id), Some("p2"));

        let ids: Vec<_> = collection.iter().map(PlacePrediction::place_id).collect();
        assert_eq!(ids, ["p1", "p2"]);
    }

    #[test]
    fn test_empty_collection() {
        let collection = PredictionCollection::empty();
        assert!(collection.is_empty());
        assert!(collection.first().is_none());
        assert_eq!(collection, PredictionCollection::default());
    }

    #[test]
    fn test_collection_into_iter() {
        let collection = PredictionCollection::new(vec![prediction("A", "p1")]);
        let descriptions: Vec<String> = collection
            .into_iter()
            .map(|p| p.description().to_string())
            .collect();
        assert_eq!(descriptions, ["A"]);
    }

    #[test]
    fn test_api_response_parsing() {
        let json = r#"{
            "status": "OK",
            "predictions": [
                {"description": "A", "place_id": "p1", "types": ["x"], "terms": []}
            ]
        }"#;
        let response: api::AutocompleteResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, "OK");
        assert!(response.error_message.is_none());
        assert_eq!(response.predictions.len(), 1);
        assert_eq!(response.predictions[0].place_id.as_deref(), Some("p1"));
    }

    #[test]
    fn test_api_response_tolerates_missing_fields() {
        let response: api::AutocompleteResponse =
            serde_json::from_str(r#"{"status": "OVER_QUERY_LIMIT"}"#).unwrap();
        assert!(response.predictions.is_empty());
        assert!(response.error_message.is_none());

        let response: api::AutocompleteResponse = serde_json::from_str("{}").unwrap();
        assert!(response.status.is_empty());
    }

    #[test]
    fn test_api_response_tolerates_null_fields() {
        let response: api::AutocompleteResponse =
            serde_json::from_str(r#"{"status": "ZERO_RESULTS", "predictions": null}"#).unwrap();
        assert_eq!(response.status, "ZERO_RESULTS");
        assert!(response.predictions.is_empty());

        let response: api::AutocompleteResponse =
            serde_json::from_str(r#"{"status": null, "error_message": null}"#).unwrap();
        assert!(response.status.is_empty());
        assert!(response.error_message.is_none());
    }
}
