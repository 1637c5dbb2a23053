//! The [`Location`] accessor over a geocode lookup.

use crate::response::{AddressComponent, GeocodeResponse, GeocodeResult, GeocodeStatus};
use crate::types::{ComponentType, Coordinates};

/// Why a [`Location`] is bound to a result or not.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// The API returned `OK` with at least one result
    Found,
    /// The API answered but had nothing to give back
    NoMatch {
        /// Status from the payload, `None` when the field was missing
        status: Option<GeocodeStatus>,
        /// `error_message` from the payload, if any
        message: Option<String>,
    },
    /// The HTTP round trip failed
    TransportFailed {
        /// Error message
        message: String,
    },
    /// The body could not be decoded as a geocode response
    DecodeFailed {
        /// Error message
        message: String,
    },
}

impl LookupOutcome {
    /// Whether a result was found.
    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found)
    }

    /// Whether the lookup broke down before the API could answer.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            LookupOutcome::TransportFailed { .. } | LookupOutcome::DecodeFailed { .. }
        )
    }
}

/// Result of a geocode lookup.
///
/// A `Location` is either bound to the first result of a successful lookup or
/// unbound. Every getter is safe on an unbound location and falls back to an
/// empty string or `0.0`, so callers can probe fields without checking
/// [`Location::has_result`] first.
///
/// # Examples
///
/// ```rust
/// use geocode_rs::Location;
///
/// let body = br#"{
///     "status": "OK",
///     "results": [{
///         "formatted_address": "1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA",
///         "geometry": { "location": { "lat": 37.4224764, "lng": -122.0842499 } },
///         "address_components": [
///             { "long_name": "California", "short_name": "CA",
///               "types": ["administrative_area_level_1", "political"] }
///         ]
///     }]
/// }"#;
///
/// let location = Location::from_slice("1600 Amphitheatre Parkway", body);
/// assert!(location.has_result());
/// assert_eq!(location.state_code(), "CA");
/// assert_eq!(location.postal_code(), "");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    address: String,
    result: Option<GeocodeResult>,
    outcome: LookupOutcome,
}

impl Location {
    /// Build a location from a decoded response.
    ///
    /// Binds to `results[0]` only when the status is exactly `"OK"` and the
    /// result list is non-empty.
    pub fn from_response(address: impl Into<String>, response: GeocodeResponse) -> Self {
        let address = address.into();
        if response.first_result().is_none() {
            return Self::unbound(
                address,
                LookupOutcome::NoMatch {
                    status: response.status(),
                    message: response.error_message,
                },
            );
        }

        Self {
            address,
            result: response.results.into_iter().next(),
            outcome: LookupOutcome::Found,
        }
    }

    /// Build a location from a raw response body.
    ///
    /// A body that does not decode yields an unbound location with
    /// [`LookupOutcome::DecodeFailed`].
    pub fn from_slice(address: impl Into<String>, body: &[u8]) -> Self {
        match GeocodeResponse::from_slice(body) {
            Ok(response) => Self::from_response(address, response),
            Err(e) => Self::unbound(
                address,
                LookupOutcome::DecodeFailed {
                    message: e.to_string(),
                },
            ),
        }
    }

    /// Build a location that holds no result.
    ///
    /// [`LookupOutcome::Found`] makes no sense without a result and is
    /// recorded as a `NoMatch` with no status.
    pub fn unbound(address: impl Into<String>, outcome: LookupOutcome) -> Self {
        let outcome = match outcome {
            LookupOutcome::Found => LookupOutcome::NoMatch {
                status: None,
                message: None,
            },
            other => other,
        };

        Self {
            address: address.into(),
            result: None,
            outcome,
        }
    }

    /// The address that was looked up, exactly as given.
    pub fn queried_address(&self) -> &str {
        &self.address
    }

    /// Whether the lookup produced a result.
    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    /// How the lookup ended.
    pub fn outcome(&self) -> &LookupOutcome {
        &self.outcome
    }

    /// The raw first result, if any.
    pub fn result(&self) -> Option<&GeocodeResult> {
        self.result.as_ref()
    }

    /// Normalized address returned by the API.
    pub fn formatted_address(&self) -> &str {
        self.result
            .as_ref()
            .map_or("", |r| r.formatted_address.as_str())
    }

    /// Latitude of the geocoded point.
    pub fn latitude(&self) -> f64 {
        self.coordinates().latitude
    }

    /// Longitude of the geocoded point.
    pub fn longitude(&self) -> f64 {
        self.coordinates().longitude
    }

    /// The geocoded point.
    pub fn coordinates(&self) -> Coordinates {
        self.result
            .as_ref()
            .map(|r| r.geometry.location.into())
            .unwrap_or_default()
    }

    /// North-east corner of the viewport.
    pub fn northeast(&self) -> Coordinates {
        self.viewport_corner(|viewport| viewport.northeast.into())
    }

    /// South-west corner of the viewport.
    pub fn southwest(&self) -> Coordinates {
        self.viewport_corner(|viewport| viewport.southwest.into())
    }

    fn viewport_corner(
        &self,
        corner: impl FnOnce(&crate::response::Viewport) -> Coordinates,
    ) -> Coordinates {
        self.result
            .as_ref()
            .and_then(|r| r.geometry.viewport.as_ref())
            .map(corner)
            .unwrap_or_default()
    }

    /// Precision of the point such as `"ROOFTOP"`, empty when unknown.
    pub fn location_type(&self) -> &str {
        self.result
            .as_ref()
            .and_then(|r| r.geometry.location_type.as_deref())
            .unwrap_or("")
    }

    /// Place identifier.
    pub fn place_id(&self) -> &str {
        self.result.as_ref().map_or("", |r| r.place_id.as_str())
    }

    /// Whether the API only matched part of the query.
    pub fn is_partial_match(&self) -> bool {
        self.result.as_ref().is_some_and(|r| r.partial_match)
    }

    /// First address component tagged with `tag`.
    pub fn component(&self, tag: &str) -> Option<&AddressComponent> {
        self.result.as_ref().and_then(|r| r.component(tag))
    }

    /// Long name of the first component tagged with `tag`.
    pub fn address_component_long_name(&self, tag: &str) -> &str {
        self.component(tag).map_or("", |c| c.long_name.as_str())
    }

    /// Short name of the first component tagged with `tag`.
    pub fn address_component_short_name(&self, tag: &str) -> &str {
        self.component(tag).map_or("", |c| c.short_name.as_str())
    }

    /// Street number, e.g. `"1600"`.
    pub fn street_number(&self) -> &str {
        self.address_component_long_name(ComponentType::StreetNumber.as_str())
    }

    /// Street name, e.g. `"Amphitheatre Parkway"`.
    pub fn route(&self) -> &str {
        self.address_component_long_name(ComponentType::Route.as_str())
    }

    /// City. Falls back to the postal town where no locality is given.
    pub fn locality(&self) -> &str {
        match self.address_component_long_name(ComponentType::Locality.as_str()) {
            "" => self.address_component_long_name(ComponentType::PostalTown.as_str()),
            city => city,
        }
    }

    /// State or province, e.g. `"California"`.
    pub fn state(&self) -> &str {
        self.address_component_long_name(ComponentType::AdministrativeAreaLevel1.as_str())
    }

    /// Abbreviated state or province, e.g. `"CA"`.
    pub fn state_code(&self) -> &str {
        self.address_component_short_name(ComponentType::AdministrativeAreaLevel1.as_str())
    }

    /// Postal code.
    pub fn postal_code(&self) -> &str {
        self.address_component_long_name(ComponentType::PostalCode.as_str())
    }

    /// Country name, e.g. `"United States"`.
    pub fn country(&self) -> &str {
        self.address_component_long_name(ComponentType::Country.as_str())
    }

    /// Country code, e.g. `"US"`.
    pub fn country_code(&self) -> &str {
        self.address_component_short_name(ComponentType::Country.as_str())
    }
}
