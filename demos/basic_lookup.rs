//! Basic geocode lookup example
//!
//! Looks up a few addresses against the live API. Set `GOOGLE_MAPS_API_KEY`
//! (and optionally `GOOGLE_MAPS_REGION`) before running.

use geocode_rs::{Geocoder, GeocoderConfig, LookupOutcome};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("geocode-rs Basic Lookup Example");
    println!("===============================");

    let geocoder = Geocoder::with_config(GeocoderConfig::from_env())?;
    println!("Service URL scheme: {}", geocoder.service_url().split(':').next().unwrap_or(""));

    let addresses = [
        "1600 Amphitheatre Parkway, Mountain View, CA",
        "221B Baker Street, London",
        "Champ de Mars, 5 Avenue Anatole France, Paris",
    ];

    for address in addresses {
        println!("\nQuery: {address}");
        let location = geocoder.get(address)?;

        match location.outcome() {
            LookupOutcome::Found => {
                println!("  Address:  {}", location.formatted_address());
                println!("  Point:    {}, {}", location.latitude(), location.longitude());
                println!("  City:     {}", location.locality());
                println!("  State:    {}", location.state());
                println!("  Postcode: {}", location.postal_code());
                println!("  Country:  {} ({})", location.country(), location.country_code());
            }
            LookupOutcome::NoMatch { status, message } => {
                println!("  No match: {status:?} {}", message.as_deref().unwrap_or(""));
            }
            LookupOutcome::TransportFailed { message } | LookupOutcome::DecodeFailed { message } => {
                println!("  Lookup failed: {message}");
            }
        }
    }

    println!("\nExample complete!");
    Ok(())
}
