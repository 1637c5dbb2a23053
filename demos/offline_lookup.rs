//! Offline lookup example
//!
//! Plugs a canned response into the geocoder instead of the HTTP transport.

use geocode_rs::{Geocoder, GeocoderConfig, Result};

const RESPONSE: &[u8] = br#"{
    "status": "OK",
    "results": [{
        "formatted_address": "Brandenburger Tor, Pariser Platz, 10117 Berlin, Germany",
        "geometry": { "location": { "lat": 52.5162746, "lng": 13.3777041 } },
        "address_components": [
            { "long_name": "Berlin", "short_name": "Berlin", "types": ["locality", "political"] },
            { "long_name": "Germany", "short_name": "DE", "types": ["country", "political"] }
        ]
    }]
}"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let fetcher = |url: &str| -> Result<Vec<u8>> {
        println!("Would fetch: {url}");
        Ok(RESPONSE.to_vec())
    };
    let geocoder = Geocoder::with_fetcher(GeocoderConfig::builder().region("de").build(), fetcher);

    let location = geocoder.get("Brandenburger Tor")?;
    println!("Address: {}", location.formatted_address());
    println!("Point:   {:?}", location.coordinates());
    println!("City:    {}", location.locality());
    println!("Country: {}", location.country_code());
    println!("Postcode (missing): {:?}", location.postal_code());

    Ok(())
}
