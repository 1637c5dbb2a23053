//! Wire types for the geocode JSON response.
//!
//! Every field is optional on the wire. Missing values decode to their
//! defaults so that a partial result still yields a usable [`GeocodeResult`].

use serde::{Deserialize, Deserializer};
use std::fmt;

use crate::types::Coordinates;

/// Top-level geocode response.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct GeocodeResponse {
    /// Raw status string, e.g. `"OK"` or `"ZERO_RESULTS"`
    #[serde(default)]
    pub status: Option<String>,
    /// Results in the order returned by the API
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<GeocodeResult>,
    /// Human readable explanation attached to non-OK statuses
    #[serde(default)]
    pub error_message: Option<String>,
}

impl GeocodeResponse {
    /// Decode a response from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> crate::Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Typed status, if the payload carried one.
    pub fn status(&self) -> Option<GeocodeStatus> {
        self.status.as_deref().map(GeocodeStatus::from_str)
    }

    /// Whether the status is exactly `"OK"`.
    pub fn is_ok(&self) -> bool {
        self.status.as_deref() == Some("OK")
    }

    /// The first result, but only when the status is `"OK"`.
    pub fn first_result(&self) -> Option<&GeocodeResult> {
        if self.is_ok() {
            self.results.first()
        } else {
            None
        }
    }
}

/// A single geocode result.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[serde(default)]
pub struct GeocodeResult {
    /// Human readable address
    #[serde(deserialize_with = "null_as_default")]
    pub formatted_address: String,
    /// Location and viewport
    #[serde(deserialize_with = "null_as_default")]
    pub geometry: Geometry,
    /// Stable place identifier
    #[serde(deserialize_with = "null_as_default")]
    pub place_id: String,
    /// Structured address fragments
    #[serde(deserialize_with = "null_as_default")]
    pub address_components: Vec<AddressComponent>,
    /// Feature types of the result itself
    #[serde(deserialize_with = "null_as_default")]
    pub types: Vec<String>,
    /// Set when the API could only match part of the query
    #[serde(deserialize_with = "null_as_default")]
    pub partial_match: bool,
}

impl GeocodeResult {
    /// First component whose `types` contain `tag`.
    pub fn component(&self, tag: &str) -> Option<&AddressComponent> {
        self.address_components
            .iter()
            .find(|component| component.has_type(tag))
    }
}

/// Geometry block of a result.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[serde(default)]
pub struct Geometry {
    /// Geocoded point
    #[serde(deserialize_with = "null_as_default")]
    pub location: LatLng,
    /// Precision of the point, e.g. `"ROOFTOP"`
    pub location_type: Option<String>,
    /// Recommended display viewport
    pub viewport: Option<Viewport>,
    /// Bounding box that fully contains the result
    pub bounds: Option<Viewport>,
}

/// Wire representation of a point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[serde(default)]
pub struct LatLng {
    /// Latitude
    #[serde(deserialize_with = "null_as_default")]
    pub lat: f64,
    /// Longitude
    #[serde(deserialize_with = "null_as_default")]
    pub lng: f64,
}

impl From<LatLng> for Coordinates {
    fn from(point: LatLng) -> Self {
        Coordinates::new(point.lat, point.lng)
    }
}

/// Rectangle given by two corners.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[serde(default)]
pub struct Viewport {
    /// North-east corner
    #[serde(deserialize_with = "null_as_default")]
    pub northeast: LatLng,
    /// South-west corner
    #[serde(deserialize_with = "null_as_default")]
    pub southwest: LatLng,
}

/// A tagged fragment of a structured address.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[serde(default)]
pub struct AddressComponent {
    /// Full text, e.g. `"California"`
    #[serde(deserialize_with = "null_as_default")]
    pub long_name: String,
    /// Abbreviated text, e.g. `"CA"`
    #[serde(deserialize_with = "null_as_default")]
    pub short_name: String,
    /// Type tags, e.g. `["administrative_area_level_1", "political"]`
    #[serde(deserialize_with = "null_as_default")]
    pub types: Vec<String>,
}

impl AddressComponent {
    /// Whether this component carries `tag`.
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }
}

/// Decode `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Status codes returned by the geocoding API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum GeocodeStatus {
    /// At least one result was returned
    Ok,
    /// The query was valid but matched nothing
    ZeroResults,
    /// Billing or daily quota problem
    OverDailyLimit,
    /// Rate limit exceeded
    OverQueryLimit,
    /// Request rejected, usually a bad key
    RequestDenied,
    /// Missing query parameters
    InvalidRequest,
    /// Server-side error
    UnknownError,
    /// Any status not listed above
    Custom(String),
}

impl GeocodeStatus {
    /// Status as it appears on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            GeocodeStatus::Ok => "OK",
            GeocodeStatus::ZeroResults => "ZERO_RESULTS",
            GeocodeStatus::OverDailyLimit => "OVER_DAILY_LIMIT",
            GeocodeStatus::OverQueryLimit => "OVER_QUERY_LIMIT",
            GeocodeStatus::RequestDenied => "REQUEST_DENIED",
            GeocodeStatus::InvalidRequest => "INVALID_REQUEST",
            GeocodeStatus::UnknownError => "UNKNOWN_ERROR",
            GeocodeStatus::Custom(status) => status,
        }
    }

    /// Parse a wire status. Matching is exact.
    pub fn from_str(status: &str) -> Self {
        match status {
            "OK" => GeocodeStatus::Ok,
            "ZERO_RESULTS" => GeocodeStatus::ZeroResults,
            "OVER_DAILY_LIMIT" => GeocodeStatus::OverDailyLimit,
            "OVER_QUERY_LIMIT" => GeocodeStatus::OverQueryLimit,
            "REQUEST_DENIED" => GeocodeStatus::RequestDenied,
            "INVALID_REQUEST" => GeocodeStatus::InvalidRequest,
            "UNKNOWN_ERROR" => GeocodeStatus::UnknownError,
            _ => GeocodeStatus::Custom(status.to_string()),
        }
    }
}

impl fmt::Display for GeocodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
