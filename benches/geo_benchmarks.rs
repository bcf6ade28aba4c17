use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use geoutil::{DistanceFormula, METER, Point, distance_between, geohash, get_boundary};

fn benchmark_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance");

    let p1 = Point::new(3.3000716307302, 101.57032339298446);
    let p2 = Point::new(3.3051875248786815, 101.5731201632972);

    for formula in DistanceFormula::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(formula),
            &formula,
            |b, &formula| b.iter(|| distance_between(black_box(&p1), black_box(&p2), formula)),
        );
    }

    group.finish();
}

fn benchmark_boundary(c: &mut Criterion) {
    let p = Point::new(3.3000716307302, 101.57032339298446);
    let radius = 10.0 * METER;

    c.bench_function("get_boundary", |b| {
        b.iter(|| get_boundary(black_box(&p), black_box(radius)))
    });
}

fn benchmark_geohash(c: &mut Criterion) {
    let mut group = c.benchmark_group("geohash");

    let p = Point::new(3.300071631, 101.570323393);
    let full = geohash::encode(&p, geohash::MAX_PRECISION);

    for precision in [8usize, 12, 22] {
        group.bench_with_input(
            BenchmarkId::new("encode", precision),
            &precision,
            |b, &precision| b.iter(|| geohash::encode(black_box(&p), precision)),
        );

        let hash = &full[..precision];
        group.bench_with_input(BenchmarkId::new("decode", precision), hash, |b, hash| {
            b.iter(|| geohash::decode(black_box(hash)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_distance,
    benchmark_boundary,
    benchmark_geohash
);
criterion_main!(benches);
