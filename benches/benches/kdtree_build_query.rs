// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use grove_kdtree::{KdTree, Point};

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

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point<f64>> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() * 2000.0, rng.next_f64() * 2000.0));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new(cx + dx, cy + dy));
        }
    }
    out
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[1024usize, 8192, 65536] {
        let pts = gen_random_points(n, 2000.0, 0xCAFE_F00D_DEAD_BEEF);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("bulk_n{}", n), |b| {
            b.iter_batched(
                || pts.clone(),
                |pts| {
                    let tree = KdTree::from_points(&pts);
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("insert_loop_n{}", n), |b| {
            b.iter_batched(
                || pts.clone(),
                |pts| {
                    let mut tree = KdTree::new();
                    for p in pts {
                        let _ = tree.insert(p);
                    }
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest");
    for &n in &[1024usize, 8192, 65536] {
        let pts = gen_random_points(n, 2000.0, 0xBADC_F00D_1234_5678);
        let queries = gen_random_points(256, 2000.0, 0xFACE_FEED_CAFE_BABE);
        let tree = KdTree::from_points(&pts);
        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_function(format!("tree_n{}", n), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for q in &queries {
                    acc += tree.nearest(*q).unwrap().dist2;
                }
                black_box(acc);
            })
        });
        group.bench_function(format!("brute_force_n{}", n), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for q in &queries {
                    let best = pts
                        .iter()
                        .map(|p| p.dist2(q))
                        .fold(f64::INFINITY, f64::min);
                    acc += best;
                }
                black_box(acc);
            })
        });
    }
    group.finish();
}

fn bench_nearest_clustered(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_clustered");
    let pts = gen_clustered_points(16, 4096, 128.0);
    let queries = gen_random_points(256, 2000.0, 0x5EED_5EED_5EED_5EED);
    let tree = KdTree::from_points(&pts);
    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("tree", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for q in &queries {
                acc += tree.nearest(*q).unwrap().dist2;
            }
            black_box(acc);
        })
    });
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");
    let pts = gen_random_points(65536, 2000.0, 0xDEAD_BEEF_0BAD_CAFE);
    let tree = KdTree::from_points(&pts);
    group.throughput(Throughput::Elements(512));
    group.bench_function("hit_and_miss", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for p in pts.iter().take(256) {
                hits += usize::from(tree.contains(*p));
            }
            for p in gen_random_points(256, 2000.0, 1) {
                hits += usize::from(tree.contains(p));
            }
            black_box(hits);
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_nearest,
    bench_nearest_clustered,
    bench_contains,
);
criterion_main!(benches);
