use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use flightpath::graph::generators::{generate_grid, generate_random};
use flightpath::{Dijkstra, ShortestPathAlgorithm};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_random_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_random");
    for &n in &[1_000usize, 10_000, 50_000] {
        let mut rng = StdRng::seed_from_u64(1);
        let graph = generate_random(n, 4, &mut rng);
        let origin = graph.find_node("n0").unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| Dijkstra::new().compute(g, origin).unwrap());
        });
    }
    group.finish();
}

fn bench_grid_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_grid");
    for &side in &[32usize, 100] {
        let graph = generate_grid(side, side);
        let origin = graph.find_node("0,0").unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(side), &graph, |b, g| {
            b.iter(|| Dijkstra::new().compute(g, origin).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_random_graphs, bench_grid_graphs);
criterion_main!(benches);
