use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use corgraph::graph::bellman_ford;
use corgraph::Graph;

fn circulant_graph(n: usize) -> Graph<usize> {
    let edges: Vec<(usize, usize, f64)> = (0..n)
        .flat_map(|v| [(v, (v + 1) % n, 1.0), (v, (v + 7) % n, 3.0)])
        .collect();
    Graph::directed((0..n).collect(), edges).unwrap()
}

fn bench_bellman_ford(c: &mut Criterion) {
    for n in [50, 200] {
        let graph = circulant_graph(n);
        c.bench_function(&format!("bellman_ford_{n}"), |b| {
            b.iter(|| bellman_ford::shortest_paths(black_box(&graph), 0).unwrap())
        });
    }
}

criterion_group!(benches, bench_bellman_ford);
criterion_main!(benches);
