use addresskit::AddressParser;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_address_parsing(c: &mut Criterion) {
    let parser = AddressParser::new();

    c.bench_function("parse_full_address", |b| {
        b.iter(|| {
            parser.parse(black_box(
                "42, MG Road, Indiranagar, Bengaluru, Karnataka, 560038",
            ))
        })
    });

    c.bench_function("parse_sparse_address", |b| {
        b.iter(|| {
            parser.parse(black_box(
                "Flat 5B, Park View Apartments, Sector 15, Gurugram, Haryana",
            ))
        })
    });

    c.bench_function("parse_empty_input", |b| {
        b.iter(|| parser.parse(black_box("")))
    });
}

criterion_group!(benches, bench_address_parsing);
criterion_main!(benches);
