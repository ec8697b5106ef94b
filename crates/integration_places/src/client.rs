//! Google Places Autocomplete client

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use crate::config::PlacesConfig;
use crate::error::PlacesError;
use crate::models::{PlacePrediction, PredictionCollection, api};
use crate::provider::GeocodingProvider;
use crate::query::{GeocodeQuery, ReverseQuery};
use crate::request::RequestParams;
use crate::transport::{HttpTransport, ReqwestTransport};

/// Identifier returned by [`GeocodingProvider::name`]
pub const PROVIDER_NAME: &str = "google_maps_places_autocomplete";

/// Places Autocomplete provider
///
/// Holds only immutable configuration and a shared transport, so a single
/// instance can serve concurrent calls.
pub struct PlacesAutocompleteClient {
    transport: Arc<dyn HttpTransport>,
    config: PlacesConfig,
}

impl std::fmt::Debug for PlacesAutocompleteClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesAutocompleteClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl PlacesAutocompleteClient {
    /// Create a client backed by a reqwest transport
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP transport
    /// cannot be initialized.
    pub fn new(config: PlacesConfig) -> Result<Self, PlacesError> {
        config.validate().map_err(PlacesError::Configuration)?;

        let transport = ReqwestTransport::new(config.timeout_secs)
            .map_err(|e| PlacesError::Configuration(e.to_string()))?;

        Ok(Self::with_transport(Arc::new(transport), config))
    }

    /// Create a client over an existing transport
    #[must_use]
    pub fn with_transport(transport: Arc<dyn HttpTransport>, config: PlacesConfig) -> Self {
        Self { transport, config }
    }

    /// Create a shareable client wrapped in Arc
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be initialized.
    pub fn new_shared(config: PlacesConfig) -> Result<Arc<Self>, PlacesError> {
        Ok(Arc::new(Self::new(config)?))
    }

    /// Configured region bias
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.config.region.as_deref()
    }

    /// Configured result language
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.config.language.as_deref()
    }

    /// Build the request parameters for `query` (without the key)
    #[must_use]
    pub fn build_params(&self, query: &GeocodeQuery) -> RequestParams {
        RequestParams::build(query, self.language(), self.region())
    }

    /// Fetch and translate one autocomplete call
    async fn fetch(&self, params: &RequestParams) -> Result<PredictionCollection, PlacesError> {
        let endpoint = &self.config.endpoint_url;
        let url = params
            .to_url(endpoint, self.config.api_key_str())
            .map_err(|e| PlacesError::Configuration(format!("Invalid endpoint URL: {e}")))?;
        let redacted = params
            .to_redacted_url(endpoint)
            .map_err(|e| PlacesError::Configuration(format!("Invalid endpoint URL: {e}")))?
            .to_string();

        debug!(url = %redacted, "Sending autocomplete request");

        let response = self.transport.get(url.as_str()).await?;

        match response.status {
            401 | 403 => {
                warn!(status = response.status, "Autocomplete rejected the credentials");
                return Err(PlacesError::InvalidCredentials(format!(
                    "API key is invalid {redacted}"
                )));
            },
            429 => {
                warn!(status = response.status, "Autocomplete rate limited the request");
                return Err(PlacesError::QuotaExceeded(format!("Daily quota exceeded {redacted}")));
            },
            _ if !response.is_success() => {
                warn!(
                    status = response.status,
                    url = %redacted,
                    "Autocomplete returned HTTP error"
                );
                return Err(PlacesError::InvalidServerResponse(format!(
                    "The server returned an invalid response ({}) for \"{redacted}\"",
                    response.status
                )));
            },
            _ => {},
        }

        if response.body.is_empty() {
            return Err(PlacesError::InvalidServerResponse(format!(
                "The server returned an empty response for \"{redacted}\""
            )));
        }

        let api_response = Self::validate_response(&redacted, &response.body)?;
        let predictions = Self::convert_predictions(&redacted, api_response)?;

        debug!(results = predictions.len(), "Autocomplete completed");

        Ok(predictions)
    }

    /// Decode the body and map upstream error statuses
    ///
    /// `url` must already be redacted; it ends up in error messages.
    fn validate_response(
        url: &str,
        body: &str,
    ) -> Result<api::AutocompleteResponse, PlacesError> {
        let response = serde_json::from_str::<Option<api::AutocompleteResponse>>(body)
            .ok()
            .flatten()
            .ok_or_else(|| {
                PlacesError::InvalidServerResponse(format!(
                    "The server returned an invalid response for \"{url}\", it could not be parsed"
                ))
            })?;

        let status = response.status.clone();
        match status.as_str() {
            api::STATUS_INVALID_REQUEST => {
                warn!(%status, "Autocomplete rejected the request");
                Err(PlacesError::InvalidArgument(format!("Invalid Request {url}")))
            },
            api::STATUS_REQUEST_DENIED
                if response.error_message.as_deref() == Some(api::INVALID_KEY_MESSAGE) =>
            {
                warn!(%status, "Autocomplete rejected the API key");
                Err(PlacesError::InvalidCredentials(format!("API key is invalid {url}")))
            },
            api::STATUS_REQUEST_DENIED => {
                let message = response.error_message.unwrap_or_default();
                warn!(%status, %message, "Autocomplete denied access");
                Err(PlacesError::InvalidServerResponse(format!(
                    "API access denied. Request: {url} - Message: {message}"
                )))
            },
            api::STATUS_OVER_QUERY_LIMIT => {
                warn!(%status, "Autocomplete quota exhausted");
                Err(PlacesError::QuotaExceeded(format!("Daily quota exceeded {url}")))
            },
            _ => Ok(response),
        }
    }

    /// Convert a validated response into predictions, preserving API order
    ///
    /// Anything other than `OK` with at least one entry yields an empty
    /// collection.
    fn convert_predictions(
        url: &str,
        response: api::AutocompleteResponse,
    ) -> Result<PredictionCollection, PlacesError> {
        if response.predictions.is_empty() || response.status != api::STATUS_OK {
            debug!(status = %response.status, "No predictions in autocomplete response");
            return Ok(PredictionCollection::empty());
        }

        response
            .predictions
            .into_iter()
            .enumerate()
            .map(|(index, entry)| match (entry.description, entry.place_id, entry.types) {
                (Some(description), Some(place_id), Some(types)) => {
                    Ok(PlacePrediction::new(description, place_id, types))
                },
                _ => Err(PlacesError::InvalidServerResponse(format!(
                    "Prediction {index} is missing description, place_id or types for \"{url}\""
                ))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(PredictionCollection::new)
    }
}

#[async_trait]
impl GeocodingProvider for PlacesAutocompleteClient {
    #[instrument(skip(self, query), fields(provider = PROVIDER_NAME))]
    async fn geocode_query(
        &self,
        query: &GeocodeQuery,
    ) -> Result<PredictionCollection, PlacesError> {
        let params = self.build_params(query);
        self.fetch(&params).await
    }

    async fn reverse_query(
        &self,
        _query: &ReverseQuery,
    ) -> Result<PredictionCollection, PlacesError> {
        Err(PlacesError::InvalidArgument(
            "Reverse Query not supported".to_string(),
        ))
    }

    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }
}
