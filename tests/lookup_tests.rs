//! End-to-end lookups through an in-memory transport.

use assert_matches::assert_matches;
use geocode_rs::{
    ComponentType, Coordinates, Error, Geocoder, GeocoderConfig, GeocodeStatus, LookupOutcome,
    Region, Result,
};

const AMPHITHEATRE: &[u8] = include_bytes!("fixtures/amphitheatre.json");

fn geocoder_with(config: GeocoderConfig, body: &'static [u8]) -> Geocoder {
    Geocoder::with_fetcher(config, move |_url: &str| -> Result<Vec<u8>> {
        Ok(body.to_vec())
    })
}

#[test]
fn lookup_exposes_first_result() {
    let geocoder = geocoder_with(GeocoderConfig::default(), AMPHITHEATRE);
    let location = geocoder
        .get("1600 Amphitheatre Parkway, Mountain View, CA")
        .unwrap();

    assert!(location.has_result());
    assert_eq!(
        location.formatted_address(),
        "1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA"
    );
    assert_eq!(location.coordinates(), Coordinates::new(37.4224764, -122.0842499));
    assert_eq!(location.place_id(), "ChIJ2eUgeAK6j4ARbn5u_wAGqWA");
    assert_eq!(location.street_number(), "1600");
    assert_eq!(location.route(), "Amphitheatre Parkway");
    assert_eq!(location.locality(), "Mountain View");
    assert_eq!(location.state(), "California");
    assert_eq!(location.state_code(), "CA");
    assert_eq!(location.postal_code(), "94043");
    assert_eq!(location.country_code(), "US");
    assert_eq!(
        location.address_component_long_name(ComponentType::AdministrativeAreaLevel2.as_str()),
        "Santa Clara County"
    );
    assert_eq!(location.address_component_short_name("neighborhood"), "");
}

#[test]
fn lookup_with_region_and_key_hits_https() {
    let config = GeocoderConfig::builder()
        .api_key("test-key")
        .region_hint(&Region::UnitedStates)
        .build();
    let geocoder = Geocoder::with_fetcher(config, |url: &str| -> Result<Vec<u8>> {
        assert!(url.starts_with("https://"));
        assert!(url.contains("key=test-key"));
        assert!(url.ends_with("&region=us"));
        Ok(AMPHITHEATRE.to_vec())
    });

    assert!(geocoder.get("Mountain View").unwrap().has_result());
}

#[test]
fn no_match_and_failures_are_distinguishable() {
    let zero = geocoder_with(
        GeocoderConfig::default(),
        br#"{"status":"ZERO_RESULTS","results":[]}"#,
    )
    .get("xyzzy")
    .unwrap();
    assert_matches!(
        zero.outcome(),
        LookupOutcome::NoMatch {
            status: Some(GeocodeStatus::ZeroResults),
            ..
        }
    );
    assert!(!zero.outcome().is_failure());

    let broken = geocoder_with(GeocoderConfig::default(), b"{\"status\":")
        .get("xyzzy")
        .unwrap();
    assert!(broken.outcome().is_failure());

    for location in [&zero, &broken] {
        assert!(!location.has_result());
        assert_eq!(location.formatted_address(), "");
        assert_eq!(location.latitude(), 0.0);
        assert_eq!(location.northeast(), Coordinates::default());
    }
}

#[test]
fn empty_address_never_reaches_the_transport() {
    let geocoder = Geocoder::with_fetcher(GeocoderConfig::default(), |_url: &str| -> Result<Vec<u8>> {
        panic!("transport must not be called for an empty address")
    });
    assert_matches!(geocoder.get(""), Err(Error::InvalidArgument { .. }));
}
