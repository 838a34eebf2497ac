// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use grove_kdtree::{KdTree, Point};

use rstar::RTree;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_points(count: usize, extent: f64, seed: u64) -> Vec<Point<f64>> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(seed);
    for _ in 0..count {
        out.push(Point::new(
            rng.next_f64() * extent,
            rng.next_f64() * extent,
        ));
    }
    out
}

fn to_rstar_points(v: &[Point<f64>]) -> Vec<[f64; 2]> {
    v.iter().map(|p| [p.x, p.y]).collect()
}

fn bench_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_external_compare");
    for &n in &[8192usize, 65536] {
        let pts = gen_random_points(n, 2000.0, 0xCAFE_F00D_DEAD_BEEF);
        let queries = gen_random_points(256, 2000.0, 0xFACE_FEED_CAFE_BABE);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("grove_build_n{}", n), |b| {
            b.iter_batched(
                || pts.clone(),
                |pts| {
                    let tree = KdTree::from_points(&pts);
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_points(&pts),
                |pts| {
                    let tree = RTree::bulk_load(pts);
                    black_box(tree.size());
                },
                BatchSize::SmallInput,
            )
        });

        let grove = KdTree::from_points(&pts);
        let rstar = RTree::bulk_load(to_rstar_points(&pts));
        group.throughput(Throughput::Elements(queries.len() as u64));

        group.bench_function(format!("grove_nearest_n{}", n), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for q in &queries {
                    acc += grove.nearest(*q).unwrap().dist2;
                }
                black_box(acc);
            })
        });

        group.bench_function(format!("rstar_nearest_n{}", n), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for q in &queries {
                    let p = rstar.nearest_neighbor(&[q.x, q.y]).unwrap();
                    let dx = p[0] - q.x;
                    let dy = p[1] - q.y;
                    acc += dx * dx + dy * dy;
                }
                black_box(acc);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_external_compare);
criterion_main!(benches);
