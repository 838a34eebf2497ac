// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of the k-d tree: bulk build, membership, nearest neighbor.
//!
//! A small street-grid of named stops plays the producer role; the index
//! answers "is there a stop here?" and "which stop is closest?".
//!
//! Run:
//! - `cargo run -p grove_demos --example nearest_stop`

use grove_kdtree::{KdTree, Point};

fn main() {
    let stops: Vec<(&str, Point<f64>)> = vec![
        ("Depot", Point::new(0.0, 0.0)),
        ("Market", Point::new(2.0, 0.0)),
        ("Library", Point::new(0.0, 2.0)),
        ("Station", Point::new(2.0, 2.0)),
        ("Square", Point::new(1.0, 1.0)),
    ];

    let tree = KdTree::from_points(&stops.iter().map(|&(_, p)| p).collect::<Vec<_>>());
    println!("indexed {} stops", tree.len());

    let here = Point::new(1.0, 1.0);
    println!("stop at {:?}: {}", here, tree.contains(here));

    let q = Point::new(1.1, 1.1);
    let hit = tree.nearest(q).expect("index is non-empty");
    let name = stops
        .iter()
        .find(|&&(_, p)| p == hit.point)
        .map(|&(name, _)| name)
        .expect("nearest result is a stored stop");
    println!(
        "closest stop to {:?}: {} at {:?}, distance {:.4}",
        q,
        name,
        hit.point,
        hit.distance()
    );

    // Every stop, in unspecified order.
    tree.visit(|p| println!("  stop {:?}", p));
}
