// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index points sampled from kurbo shape outlines, then snap queries to them.
//!
//! This is the "collaborating producer" pattern: some geometry source
//! produces a point cloud, the k-d tree indexes it, and downstream logic
//! snaps arbitrary positions to the closest sample.
//!
//! Run:
//! - `cargo run -p grove_demos --example circle_sampling`

use grove_kdtree::{KdTree, Point};
use kurbo::{Circle, ParamCurve, RoundedRect, Shape};

/// Sample `per_segment` points from each flattened segment of a shape outline.
fn sample_outline(shape: &impl Shape, per_segment: usize, out: &mut Vec<Point<f64>>) {
    let path = shape.to_path(0.1);
    for seg in path.segments() {
        for i in 0..per_segment {
            let t = i as f64 / per_segment as f64;
            let p = seg.eval(t);
            out.push(Point::new(p.x, p.y));
        }
    }
}

fn main() {
    let mut samples = Vec::new();
    sample_outline(&Circle::new((0.0, 0.0), 50.0), 16, &mut samples);
    sample_outline(
        &RoundedRect::new(80.0, -30.0, 180.0, 30.0, 8.0),
        16,
        &mut samples,
    );

    // Coincident samples (segment endpoints) are rejected by `insert`.
    let mut tree = KdTree::new();
    let mut dropped = 0usize;
    for p in &samples {
        if !tree.insert(*p) {
            dropped += 1;
        }
    }
    println!(
        "indexed {} of {} samples ({} duplicates dropped)",
        tree.len(),
        samples.len(),
        dropped
    );

    for q in [
        Point::new(0.0, 0.0),
        Point::new(45.0, 5.0),
        Point::new(130.0, 100.0),
    ] {
        let hit = tree.nearest(q).expect("index is non-empty");
        println!(
            "snap {:?} -> ({:.2}, {:.2}), distance {:.2}",
            q, hit.point.x, hit.point.y, hit.distance()
        );
    }
}
