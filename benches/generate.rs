use criterion::{black_box, criterion_group, criterion_main, Criterion};

use joukowsky_rs::airfoil::generate::generate;
use joukowsky_rs::airfoil::AirfoilSpec;
use joukowsky_rs::flow::{field, FlowGrid};

fn benchmark(c: &mut Criterion) {
    let spec = AirfoilSpec::new(1.0, 0.9, 5.0, 1000).unwrap();
    let grid = FlowGrid::around(&spec, 4.0, 200, 200).unwrap();

    c.bench_function("Joukowsky outline", |b| b.iter(|| generate(black_box(&spec))));
    c.bench_function("Flow field 200x200", |b| {
        b.iter(|| field(black_box(&spec), 1.0, 4.0, black_box(&grid)))
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
