use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use sepdft::{Complex64, Grid, SeparableDft2d, Transformer};

const SIZES: &[(usize, usize)] = &[(8, 8), (32, 32), (64, 48), (128, 128)];

fn test_grid(width: usize, height: usize) -> Grid<f64> {
    Grid::from_fn(width, height, |x, y| {
        Complex64::new(((x * 7 + y * 3) % 11) as f64, ((x + y) % 5) as f64)
    })
    .unwrap()
}

fn bench_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("dft2d_forward");
    for &(w, h) in SIZES {
        let grid = test_grid(w, h);
        let id = format!("{}x{}", w, h);
        group.bench_with_input(BenchmarkId::new("direct", &id), &grid, |b, g| {
            let dft = SeparableDft2d::default();
            b.iter(|| dft.forward(black_box(g)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("planned", &id), &grid, |b, g| {
            let dft = SeparableDft2d::with_planner();
            b.iter(|| dft.forward(black_box(g)).unwrap())
        });
        #[cfg(feature = "parallel")]
        group.bench_with_input(BenchmarkId::new("parallel", &id), &grid, |b, g| {
            b.iter(|| sepdft::parallel::transform_parallel(black_box(g), false).unwrap())
        });
    }
    group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
    let grid = test_grid(64, 64);
    let dft = SeparableDft2d::with_planner();
    c.bench_function("dft2d_roundtrip_64x64", |b| {
        b.iter(|| {
            let spectrum = dft.forward(black_box(&grid)).unwrap();
            dft.inverse(&spectrum).unwrap()
        })
    });
}

criterion_group!(benches, bench_forward, bench_roundtrip);
criterion_main!(benches);
