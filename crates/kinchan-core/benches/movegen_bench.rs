use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kinchan_core::{audit_stages, reachable_cells, Bounds, PieceKind, StageSet, CELLS};

fn movegen_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");
    group.sample_size(100);

    for kind in PieceKind::ALL {
        group.bench_function(kind.label(), |b| {
            b.iter(|| {
                CELLS
                    .into_iter()
                    .map(|from| reachable_cells(black_box(kind), from, &[], Bounds::BOARD).len())
                    .sum::<usize>()
            })
        });
    }

    let stages = StageSet::builtin();
    group.bench_function("audit_builtin_stages", |b| {
        b.iter(|| audit_stages(black_box(&stages)))
    });

    group.finish();
}

criterion_group!(benches, movegen_benchmarks);
criterion_main!(benches);
