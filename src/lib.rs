//! # geocode-rs
//!
//! A thin client for the Google Geocoding API.
//!
//! The crate builds the request URL, performs one blocking HTTP call, decodes
//! the JSON response and hands back a [`Location`] bound to the first result.
//! A lookup that finds nothing, or that fails on the wire, still yields a
//! `Location`: its getters return empty strings and `0.0`, and
//! [`Location::outcome`] says what happened.
//!
//! ## Features
//!
//! - **Forgiving accessor**: probe any field without checking for a result first
//! - **Pluggable transport**: inject any [`Fetch`] implementation
//! - **Blocking HTTP**: reqwest-based [`HttpFetcher`] behind the default `http` feature
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use geocode_rs::Geocoder;
//!
//! let geocoder = Geocoder::new()?;
//! let location = geocoder.get("1600 Amphitheatre Parkway, Mountain View, CA")?;
//!
//! if location.has_result() {
//!     println!("{}", location.formatted_address());
//!     println!("{}, {}", location.latitude(), location.longitude());
//! }
//! # Ok::<(), geocode_rs::Error>(())
//! ```

#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

use std::fmt;

pub mod error;
pub mod location;
pub mod request;
pub mod response;
pub mod transport;
pub mod types;

// Re-export main API
pub use error::{Error, Result};
pub use location::{Location, LookupOutcome};
pub use request::RequestBuilder;
pub use response::{AddressComponent, GeocodeResponse, GeocodeResult, GeocodeStatus};
pub use transport::Fetch;
#[cfg(feature = "http")]
pub use transport::HttpFetcher;
pub use types::*;

/// Environment variable read by [`GeocoderConfig::from_env`] for the API key.
pub const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

/// Environment variable read by [`GeocoderConfig::from_env`] for the region.
pub const REGION_ENV: &str = "GOOGLE_MAPS_REGION";

/// Main entry point for geocode lookups.
///
/// A `Geocoder` holds no per-lookup state: every call to [`Geocoder::get`]
/// returns a fresh [`Location`].
///
/// # Examples
///
/// ```rust
/// use geocode_rs::{Geocoder, GeocoderConfig, Result};
///
/// let fetcher = |_url: &str| -> Result<Vec<u8>> {
///     Ok(br#"{"status":"ZERO_RESULTS","results":[]}"#.to_vec())
/// };
/// let geocoder = Geocoder::with_fetcher(GeocoderConfig::default(), fetcher);
///
/// let location = geocoder.get("an address that matches nothing")?;
/// assert!(!location.has_result());
/// assert_eq!(location.latitude(), 0.0);
/// # Ok::<(), geocode_rs::Error>(())
/// ```
pub struct Geocoder {
    config: GeocoderConfig,
    request: RequestBuilder,
    fetcher: Box<dyn Fetch>,
}

impl Geocoder {
    /// Create a geocoder with default configuration and the HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    #[cfg(feature = "http")]
    pub fn new() -> Result<Self> {
        Self::with_config(GeocoderConfig::default())
    }

    /// Create a geocoder with custom configuration and the HTTP transport.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use geocode_rs::{Geocoder, GeocoderConfig};
    ///
    /// let config = GeocoderConfig::builder()
    ///     .api_key("my-api-key")
    ///     .region("us")
    ///     .timeout_seconds(10)
    ///     .build();
    ///
    /// let geocoder = Geocoder::with_config(config)?;
    /// # Ok::<(), geocode_rs::Error>(())
    /// ```
    #[cfg(feature = "http")]
    pub fn with_config(config: GeocoderConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(config.timeout_seconds, &config.user_agent)?;
        Ok(Self::with_fetcher(config, fetcher))
    }

    /// Create a geocoder that uses `fetcher` for the HTTP round trip.
    pub fn with_fetcher(config: GeocoderConfig, fetcher: impl Fetch + 'static) -> Self {
        let request = config.request_builder();
        Self {
            config,
            request,
            fetcher: Box::new(fetcher),
        }
    }

    /// Look up `address`.
    ///
    /// Transport failures, undecodable bodies and non-OK statuses are not
    /// errors: they produce an unbound [`Location`] whose
    /// [`Location::outcome`] records the cause.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `address` is empty or blank.
    pub fn get(&self, address: &str) -> Result<Location> {
        let url = self.request.build_url(address)?;
        tracing::debug!(address, region = ?self.request.region(), "geocoding address");

        let body = match self.fetcher.fetch(&url) {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(address, error = %e, "geocode request failed");
                return Ok(Location::unbound(
                    address,
                    LookupOutcome::TransportFailed {
                        message: e.to_string(),
                    },
                ));
            }
        };

        let location = Location::from_slice(address, &body);
        if let LookupOutcome::DecodeFailed { message } = location.outcome() {
            tracing::warn!(address, error = %message, "geocode response could not be decoded");
        }
        Ok(location)
    }

    /// Look up `address`, surfacing transport and decode failures as errors.
    ///
    /// A well-formed response with a non-OK status still returns an unbound
    /// [`Location`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an empty address, the fetcher's
    /// error if the request fails, and [`Error::DecodeError`] if the body is
    /// not a geocode response.
    pub fn try_get(&self, address: &str) -> Result<Location> {
        let url = self.request.build_url(address)?;
        tracing::debug!(address, region = ?self.request.region(), "geocoding address");

        let body = self.fetcher.fetch(&url)?;
        let response = GeocodeResponse::from_slice(&body)
            .map_err(|e| Error::decode_error(format!("Invalid geocode response: {e}")))?;

        Ok(Location::from_response(address, response))
    }

    /// Base URL requests are built from.
    pub fn service_url(&self) -> &str {
        self.request.service_url()
    }

    /// Get the configuration used by this instance.
    pub fn config(&self) -> &GeocoderConfig {
        &self.config
    }
}

impl fmt::Debug for Geocoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Geocoder")
            .field("config", &self.config)
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

/// Configuration for a [`Geocoder`].
#[derive(Clone)]
pub struct GeocoderConfig {
    /// API key; switches requests to https when set
    pub api_key: Option<String>,

    /// Region hint sent with every request
    pub region: Option<String>,

    /// Endpoint host and path, without scheme
    pub endpoint: String,

    /// Timeout for the HTTP round trip
    pub timeout_seconds: u64,

    /// User agent sent by the HTTP transport
    pub user_agent: String,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            region: None,
            endpoint: request::DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: 30,
            user_agent: concat!("geocode-rs/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl fmt::Debug for GeocoderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeocoderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl GeocoderConfig {
    /// Create a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geocode_rs::GeocoderConfig;
    ///
    /// let config = GeocoderConfig::builder()
    ///     .region("uk")
    ///     .timeout_seconds(5)
    ///     .build();
    /// assert_eq!(config.region.as_deref(), Some("uk"));
    /// ```
    pub fn builder() -> GeocoderConfigBuilder {
        GeocoderConfigBuilder::new()
    }

    /// Default configuration with key and region taken from the environment.
    ///
    /// Reads [`API_KEY_ENV`] and [`REGION_ENV`]; unset or empty variables
    /// leave the corresponding setting empty.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());
        Self {
            api_key: var(API_KEY_ENV),
            region: var(REGION_ENV),
            ..Self::default()
        }
    }

    /// Request builder reflecting this configuration.
    pub fn request_builder(&self) -> RequestBuilder {
        let mut request = RequestBuilder::new().with_endpoint(self.endpoint.clone());
        request.configure(self.api_key.as_deref(), self.region.as_deref());
        request
    }
}

/// Builder for GeocoderConfig.
#[derive(Debug, Clone)]
pub struct GeocoderConfigBuilder {
    config: GeocoderConfig,
}

impl GeocoderConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: GeocoderConfig::default(),
        }
    }

    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Set the region hint.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.config.region = Some(region.into());
        self
    }

    /// Set the region hint from a [`Region`].
    pub fn region_hint(self, region: &Region) -> Self {
        self.region(region.as_str())
    }

    /// Override the endpoint host and path.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Set the HTTP timeout.
    pub fn timeout_seconds(mut self, seconds: u64) -> Self {
        self.config.timeout_seconds = seconds;
        self
    }

    /// Set the user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> GeocoderConfig {
        self.config
    }
}

impl Default for GeocoderConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::sync::{Arc, Mutex};

    const MOUNTAIN_VIEW: &[u8] = br#"{
        "status": "OK",
        "results": [{
            "formatted_address": "1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA",
            "geometry": { "location": { "lat": 37.4224764, "lng": -122.0842499 } }
        }]
    }"#;

    fn canned(body: &'static [u8]) -> impl Fetch {
        move |_url: &str| -> Result<Vec<u8>> { Ok(body.to_vec()) }
    }

    #[test]
    fn test_config_default() {
        let config = GeocoderConfig::default();
        assert!(config.api_key.is_none());
        assert!(config.region.is_none());
        assert_eq!(config.endpoint, request::DEFAULT_ENDPOINT);
        assert!(config.timeout_seconds > 0);
    }

    #[test]
    fn test_config_from_vars_ignores_empty_values() {
        let config = GeocoderConfig::from_vars(|name| match name {
            API_KEY_ENV => Some(String::new()),
            REGION_ENV => Some("nl".to_string()),
            _ => None,
        });
        assert!(config.api_key.is_none());
        assert_eq!(config.region.as_deref(), Some("nl"));

        let config = GeocoderConfig::from_vars(|name| match name {
            API_KEY_ENV => Some("key".to_string()),
            _ => None,
        });
        assert_eq!(config.api_key.as_deref(), Some("key"));
        assert!(config.region.is_none());
        assert!(config.request_builder().has_api_key());
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let config = GeocoderConfig::builder().api_key("super-secret").build();
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_get_found() {
        let geocoder = Geocoder::with_fetcher(GeocoderConfig::default(), canned(MOUNTAIN_VIEW));
        let location = geocoder.get("1600 Amphitheatre Parkway").unwrap();

        assert!(location.has_result());
        assert_eq!(location.queried_address(), "1600 Amphitheatre Parkway");
        assert_eq!(location.latitude(), 37.4224764);
        assert_eq!(location.longitude(), -122.0842499);
    }

    #[test]
    fn test_get_rejects_empty_address() {
        let geocoder = Geocoder::with_fetcher(GeocoderConfig::default(), canned(MOUNTAIN_VIEW));
        assert_matches!(geocoder.get(""), Err(Error::InvalidArgument { .. }));
        assert_matches!(geocoder.try_get(" "), Err(Error::InvalidArgument { .. }));
    }

    #[test]
    fn test_get_passes_built_url_to_fetcher() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let fetcher = move |url: &str| -> Result<Vec<u8>> {
            sink.lock().unwrap().push(url.to_string());
            Ok(MOUNTAIN_VIEW.to_vec())
        };

        let config = GeocoderConfig::builder().api_key("k").region("us").build();
        let geocoder = Geocoder::with_fetcher(config, fetcher);
        geocoder.get("Mountain View").unwrap();

        assert_eq!(
            seen.lock().unwrap().as_slice(),
            ["https://maps.googleapis.com/maps/api/geocode/json?key=k&address=Mountain+View&region=us"]
        );
    }

    #[test]
    fn test_get_collapses_transport_failure() {
        let fetcher =
            |_url: &str| -> Result<Vec<u8>> { Err(Error::transport_error("connection reset")) };
        let geocoder = Geocoder::with_fetcher(GeocoderConfig::default(), fetcher);

        let location = geocoder.get("Main St").unwrap();
        assert!(!location.has_result());
        assert_matches!(location.outcome(), LookupOutcome::TransportFailed { .. });

        assert_matches!(geocoder.try_get("Main St"), Err(Error::TransportError { .. }));
    }

    #[test]
    fn test_get_collapses_decode_failure() {
        let geocoder = Geocoder::with_fetcher(GeocoderConfig::default(), canned(b"not json"));

        let location = geocoder.get("Main St").unwrap();
        assert_matches!(location.outcome(), LookupOutcome::DecodeFailed { .. });

        assert_matches!(geocoder.try_get("Main St"), Err(Error::DecodeError { .. }));
    }

    #[test]
    fn test_try_get_zero_results_is_not_an_error() {
        let geocoder = Geocoder::with_fetcher(
            GeocoderConfig::default(),
            canned(br#"{"status":"ZERO_RESULTS","results":[]}"#),
        );
        let location = geocoder.try_get("nowhere").unwrap();
        assert!(!location.has_result());
        assert_eq!(location.formatted_address(), "");
    }

    #[test]
    fn test_each_lookup_is_independent() {
        let geocoder = Geocoder::with_fetcher(GeocoderConfig::default(), canned(MOUNTAIN_VIEW));
        let first = geocoder.get("first").unwrap();
        let second = geocoder.get("second").unwrap();

        assert_eq!(first.queried_address(), "first");
        assert_eq!(second.queried_address(), "second");
        assert_eq!(first.formatted_address(), second.formatted_address());
    }

    #[test]
    fn test_service_url_follows_config() {
        let geocoder = Geocoder::with_fetcher(
            GeocoderConfig::builder().endpoint("localhost:9/json").build(),
            canned(MOUNTAIN_VIEW),
        );
        assert_eq!(geocoder.service_url(), "http://localhost:9/json?");
        assert!(format!("{geocoder:?}").starts_with("Geocoder"));
    }
}
