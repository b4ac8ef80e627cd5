use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use pmquad::{City, PmQuadtree, Point};
use std::sync::Arc;

/// Deterministic pseudo-random coordinates so runs are comparable.
fn scatter(n: usize, extent: f64) -> Vec<Arc<City>> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state % 1_000_000) as f64 / 1_000_000.0 * extent
    };
    (0..n)
        .map(|i| Arc::new(City::at(format!("city{}", i), next(), next())))
        .collect()
}

fn populated(n: usize) -> PmQuadtree {
    let mut index = PmQuadtree::new();
    index.set_universe(4096.0, 4096.0).unwrap();
    let cities = scatter(n, 4096.0);
    for city in &cities {
        let _ = index.add_city(city.clone());
    }
    for pair in cities.chunks(2).take(n / 4) {
        if let [a, b] = pair {
            let _ = index.add_road(a.clone(), b.clone());
        }
    }
    index
}

fn benchmark_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion");

    for size in [100, 1_000, 10_000] {
        let cities = scatter(size, 4096.0);
        group.bench_with_input(BenchmarkId::new("add_city", size), &cities, |b, cities| {
            b.iter(|| {
                let mut index = PmQuadtree::new();
                index.set_universe(4096.0, 4096.0).unwrap();
                for city in cities {
                    let _ = index.add_city(black_box(city.clone()));
                }
                index
            })
        });
    }

    group.finish();
}

fn benchmark_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");
    let index = populated(10_000);
    let center = Point::new(2048.0, 2048.0);

    for radius in [10.0, 100.0, 500.0] {
        group.bench_with_input(
            BenchmarkId::new("range_cities", radius),
            &radius,
            |b, &radius| b.iter(|| index.range_cities(black_box(center), black_box(radius))),
        );
        group.bench_with_input(
            BenchmarkId::new("range_roads", radius),
            &radius,
            |b, &radius| b.iter(|| index.range_roads(black_box(center), black_box(radius))),
        );
    }

    group.bench_function("nearest_city", |b| {
        b.iter(|| index.nearest_city(black_box(Point::new(1234.5, 3210.0))))
    });

    group.bench_function("nearest_road", |b| {
        b.iter(|| index.nearest_road(black_box(Point::new(1234.5, 3210.0))))
    });

    group.finish();
}

criterion_group!(benches, benchmark_insertion, benchmark_queries);
criterion_main!(benches);
