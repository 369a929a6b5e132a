use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use usps_address::{AddressStandardizer, ErrorPolicy, StandardizerConfig};

fn bench_standardize(c: &mut Criterion) {
    let standardizer = AddressStandardizer::new();

    c.bench_function("standardize_simple_address", |b| {
        b.iter(|| standardizer.standardize(black_box("123 Main St, New York, NY 10001")))
    });

    c.bench_function("standardize_complex_address", |b| {
        b.iter(|| {
            standardizer.standardize(black_box(
                "500 North Martin Luther King Jr Boulevard Southwest Suite 100\nNew York, New York 10001-1234",
            ))
        })
    });

    let raising = AddressStandardizer::with_config(
        StandardizerConfig::builder()
            .error_policy(ErrorPolicy::Raise)
            .build(),
    );
    c.bench_function("standardize_invalid_zip_raise", |b| {
        b.iter(|| raising.standardize(black_box("1 Elm St, Anytown, TX 1234")))
    });
}

criterion_group!(benches, bench_standardize);
criterion_main!(benches);
