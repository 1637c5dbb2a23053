use criterion::{Criterion, criterion_group, criterion_main};
use geocode_rs::{GeocodeResponse, Location, RequestBuilder};
use std::hint::black_box;

const AMPHITHEATRE: &[u8] = include_bytes!("../tests/fixtures/amphitheatre.json");

fn bench_lookup(c: &mut Criterion) {
    c.bench_function("decode_response", |b| {
        b.iter(|| GeocodeResponse::from_slice(black_box(AMPHITHEATRE)))
    });

    c.bench_function("location_from_slice", |b| {
        b.iter(|| {
            let location = Location::from_slice("1600 Amphitheatre Parkway", black_box(AMPHITHEATRE));
            black_box(location.state_code().len())
        })
    });

    let request = RequestBuilder::new().with_api_key("bench-key").with_region("us");
    c.bench_function("build_url", |b| {
        b.iter(|| request.build_url(black_box("Apt 5B, 123 Main Street, New York, NY 10001")))
    });
}

criterion_group!(benches, bench_lookup);
criterion_main!(benches);
