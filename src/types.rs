//! Common types and enums for geocode-rs.

use std::fmt;

/// Region hints for biasing geocode results.
///
/// The geocoding API takes a ccTLD-style region code, which mostly matches
/// ISO 3166-1 alpha-2 except for a few cases such as the United Kingdom.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum Region {
    /// United States
    UnitedStates,
    /// Canada
    Canada,
    /// United Kingdom
    UnitedKingdom,
    /// Germany
    Germany,
    /// France
    France,
    /// Spain
    Spain,
    /// Italy
    Italy,
    /// Netherlands
    Netherlands,
    /// Japan
    Japan,
    /// Australia
    Australia,
    /// India
    India,
    /// Brazil
    Brazil,
    /// Mexico
    Mexico,
    /// Pakistan
    Pakistan,
    /// Custom region code
    Custom(String),
}

impl Region {
    /// Region code as sent in the `region=` query parameter.
    pub fn as_str(&self) -> &str {
        match self {
            Region::UnitedStates => "us",
            Region::Canada => "ca",
            Region::UnitedKingdom => "uk",
            Region::Germany => "de",
            Region::France => "fr",
            Region::Spain => "es",
            Region::Italy => "it",
            Region::Netherlands => "nl",
            Region::Japan => "jp",
            Region::Australia => "au",
            Region::India => "in",
            Region::Brazil => "br",
            Region::Mexico => "mx",
            Region::Pakistan => "pk",
            Region::Custom(code) => code,
        }
    }

    /// Parse from a region code. Accepts `gb` as an alias of `uk`.
    pub fn from_str(code: &str) -> Self {
        match code.to_lowercase().as_str() {
            "us" => Region::UnitedStates,
            "ca" => Region::Canada,
            "uk" | "gb" => Region::UnitedKingdom,
            "de" => Region::Germany,
            "fr" => Region::France,
            "es" => Region::Spain,
            "it" => Region::Italy,
            "nl" => Region::Netherlands,
            "jp" => Region::Japan,
            "au" => Region::Australia,
            "in" => Region::India,
            "br" => Region::Brazil,
            "mx" => Region::Mexico,
            "pk" => Region::Pakistan,
            _ => Region::Custom(code.to_string()),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type tags carried by address components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum ComponentType {
    /// Street number
    StreetNumber,
    /// Named route (street)
    Route,
    /// City or town
    Locality,
    /// First-order civil entity below a locality
    Sublocality,
    /// Named neighborhood
    Neighborhood,
    /// Postal town (used in some countries instead of locality)
    PostalTown,
    /// State, province or equivalent
    AdministrativeAreaLevel1,
    /// County or equivalent
    AdministrativeAreaLevel2,
    /// Country
    Country,
    /// Postal code
    PostalCode,
    /// Named building or collection of buildings
    Premise,
    /// Unit within a premise
    Subpremise,
    /// Any other tag
    Custom(String),
}

impl ComponentType {
    /// Tag as it appears in the `types` array of a component.
    pub fn as_str(&self) -> &str {
        match self {
            ComponentType::StreetNumber => "street_number",
            ComponentType::Route => "route",
            ComponentType::Locality => "locality",
            ComponentType::Sublocality => "sublocality",
            ComponentType::Neighborhood => "neighborhood",
            ComponentType::PostalTown => "postal_town",
            ComponentType::AdministrativeAreaLevel1 => "administrative_area_level_1",
            ComponentType::AdministrativeAreaLevel2 => "administrative_area_level_2",
            ComponentType::Country => "country",
            ComponentType::PostalCode => "postal_code",
            ComponentType::Premise => "premise",
            ComponentType::Subpremise => "subpremise",
            ComponentType::Custom(tag) => tag,
        }
    }

    /// Parse from a component tag.
    pub fn from_str(tag: &str) -> Self {
        match tag {
            "street_number" => ComponentType::StreetNumber,
            "route" => ComponentType::Route,
            "locality" => ComponentType::Locality,
            "sublocality" => ComponentType::Sublocality,
            "neighborhood" => ComponentType::Neighborhood,
            "postal_town" => ComponentType::PostalTown,
            "administrative_area_level_1" => ComponentType::AdministrativeAreaLevel1,
            "administrative_area_level_2" => ComponentType::AdministrativeAreaLevel2,
            "country" => ComponentType::Country,
            "postal_code" => ComponentType::PostalCode,
            "premise" => ComponentType::Premise,
            "subpremise" => ComponentType::Subpremise,
            _ => ComponentType::Custom(tag.to_string()),
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ComponentType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Coordinates {
    /// Latitude
    pub latitude: f64,
    /// Longitude
    pub longitude: f64,
}

impl Coordinates {
    /// Create a new coordinate pair.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}
