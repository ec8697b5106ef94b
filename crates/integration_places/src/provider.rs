//! Geocoding provider trait

use async_trait::async_trait;

use crate::{GeocodeQuery, PlacesError, PredictionCollection, ReverseQuery};

/// Trait for geocoding providers
///
/// A provider turns a query into an ordered collection of place predictions.
#[async_trait]
pub trait GeocodingProvider: Send + Sync {
    /// Resolve free text (and optional hints) to place predictions
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the upstream API rejects it.
    /// An empty collection is not an error.
    async fn geocode_query(
        &self,
        query: &GeocodeQuery,
    ) -> Result<PredictionCollection, PlacesError>;

    /// Resolve coordinates to place predictions
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::InvalidArgument`] if the provider does not
    /// support reverse lookups.
    async fn reverse_query(
        &self,
        query: &ReverseQuery,
    ) -> Result<PredictionCollection, PlacesError>;

    /// Stable provider identifier for selection and logging
    fn name(&self) -> &'static str;
}
