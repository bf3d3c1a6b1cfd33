//! Benchmarks for random edge generation.
//!
//! The duplicate scan is a linear walk over accepted edges, so candidate
//! counts scale quadratically with cluster size. These benches track where
//! that starts to hurt.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use stackcloud::graph;
use stackcloud::CloudRng;

fn bench_intra_stack_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("intra_stack_edges");
    for n in [8usize, 32, 128, 512] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut rng = CloudRng::seeded(1);
            b.iter(|| graph::intra_stack_edges(&mut rng, black_box(n)));
        });
    }
    group.finish();
}

fn bench_intra_box_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("intra_box_edges");
    for n in [8usize, 32, 128, 512] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut rng = CloudRng::seeded(1);
            b.iter(|| graph::intra_box_edges(&mut rng, black_box(n)));
        });
    }
    group.finish();
}

fn bench_inter_cluster_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("inter_cluster_edges");
    for clusters in [4usize, 16, 64] {
        group.bench_with_input(
            BenchmarkId::from_parameter(clusters),
            &clusters,
            |b, &clusters| {
                let mut rng = CloudRng::seeded(1);
                let sizes = vec![9usize; clusters];
                let order: Vec<usize> = (0..clusters).collect();
                b.iter(|| {
                    graph::inter_cluster_edges(&mut rng, black_box(&sizes), black_box(&order))
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_intra_stack_edges,
    bench_intra_box_edges,
    bench_inter_cluster_edges
);
criterion_main!(benches);
