use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{DVec2, IVec2};
use tilecast_dda::{GridRay, Strategy};

const SIZE: i32 = 24;

fn room(cell: IVec2) -> bool {
    cell.x <= 0 || cell.y <= 0 || cell.x >= SIZE - 1 || cell.y >= SIZE - 1
}

fn rays() -> Vec<GridRay> {
    (0..360)
        .map(|deg| {
            let angle = f64::from(deg).to_radians() + 0.01;
            GridRay::new(
                IVec2::new(12, 12),
                DVec2::splat(12.5),
                DVec2::new(angle.cos(), angle.sin()),
            )
        })
        .collect()
}

fn bench_strategies(c: &mut Criterion) {
    let rays = rays();
    let mut group = c.benchmark_group("traversal");

    for strategy in [Strategy::Delta, Strategy::Exact] {
        group.bench_function(strategy.name(), |b| {
            b.iter(|| {
                for ray in &rays {
                    let _ = black_box(strategy.cast(black_box(ray), room));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
