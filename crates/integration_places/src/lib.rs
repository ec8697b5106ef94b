//! Google Places Autocomplete integration for PiSovereign
//!
//! Translates a geocoding query into a call against the
//! [Places Autocomplete API](https://developers.google.com/maps/documentation/places/web-service/autocomplete)
//! and maps the JSON response into an ordered [`PredictionCollection`].
//!
//! # Architecture
//!
//! The crate follows the provider pattern of the other integration crates.
//! [`GeocodingProvider`] defines the interface, implemented by
//! [`PlacesAutocompleteClient`]. HTTP goes through the [`HttpTransport`] seam
//! ([`ReqwestTransport`] by default), so callers can share or mock it.
//!
//! Reverse geocoding is not supported by this API; [`GeocodingProvider::reverse_query`]
//! always fails with [`PlacesError::InvalidArgument`]. Requests are never retried.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_places::{
//!     Bounds, GeocodeQuery, GeocodingProvider, PlacesAutocompleteClient, PlacesConfig,
//!     SessionToken,
//! };
//!
//! let config = PlacesConfig::new(api_key).with_region("de");
//! let client = PlacesAutocompleteClient::new(config)?;
//!
//! let session = SessionToken::new();
//! let query = GeocodeQuery::new("Alexanderplatz")
//!     .with_bounds(Bounds::new(52.33, 13.08, 52.67, 13.76))
//!     .with_session_token(&session);
//!
//! for prediction in &client.geocode_query(&query).await? {
//!     println!("{} ({})", prediction.description(), prediction.place_id());
//! }
//! ```

mod client;
mod config;
mod error;
mod models;
mod provider;
mod query;
mod request;
mod transport;

pub use client::{PROVIDER_NAME, PlacesAutocompleteClient};
pub use config::{DEFAULT_ENDPOINT_URL, PlacesConfig};
pub use error::{PlacesError, TransportError};
pub use models::{PlacePrediction, PredictionCollection};
pub use provider::GeocodingProvider;
pub use query::{
    Bounds, DATA_LOCATION, DATA_RADIUS, DATA_SESSION_TOKEN, GeocodeQuery, ReverseQuery,
    SessionToken,
};
pub use request::RequestParams;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
