// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=grove_kdtree --heading-base-level=0

//! Grove k-d tree: a balanced 2D point index.
//!
//! [`KdTree`] stores points with exact coordinates and answers three kinds of
//! question about them:
//!
//! - Membership: [`KdTree::contains`] — is this exact point stored?
//! - Proximity: [`KdTree::nearest`] — which stored point is closest to a query?
//! - Enumeration: [`KdTree::iter`] / [`KdTree::visit`] — every stored point, once.
//!
//! Bulk construction with [`KdTree::from_points`] splits at the median on
//! alternating axes, producing an O(log N)-depth tree in O(N log N) time.
//! Points can also be added incrementally with [`KdTree::insert`], which
//! rejects duplicates and does not rebalance.
//!
//! The tree is generic over the coordinate scalar via [`Scalar`] (`f32`,
//! `f64`, `i64`), with squared distances computed in a widened accumulator
//! type (f32→f64, i64→i128) so comparisons are robust.
//!
//! # Example
//!
//! ```rust
//! use grove_kdtree::{KdTree, Point};
//!
//! let tree = KdTree::from_points(&[
//!     Point::new(0.0, 0.0),
//!     Point::new(2.0, 0.0),
//!     Point::new(0.0, 2.0),
//!     Point::new(2.0, 2.0),
//!     Point::new(1.0, 1.0),
//! ]);
//!
//! assert!(tree.contains(Point::new(1.0, 1.0)));
//!
//! let hit = tree.nearest(Point::new(1.1, 1.1)).unwrap();
//! assert_eq!(hit.point, Point::new(1.0, 1.0));
//! assert!((hit.distance() - 0.1414).abs() < 1e-4);
//! ```
//!
//! Incremental insertion reports whether the point was new:
//!
//! ```rust
//! use grove_kdtree::{KdTree, Point};
//!
//! let mut tree = KdTree::new();
//! assert!(tree.insert(Point::new(3_i64, 4)));
//! assert!(!tree.insert(Point::new(3_i64, 4)));
//! assert_eq!(tree.len(), 1);
//! ```
//!
//! ## Features
//!
//! - `std` *(default)*: use the standard library for `sqrt`.
//! - `libm`: use the `libm` crate for `sqrt` instead; enable this (and
//!   disable default features) for no_std targets.
//!
//! ### Float semantics
//!
//! This crate requires finite coordinates: no NaNs, no infinities. Debug
//! builds assert this at the API boundary; release builds do not check, and
//! queries over non-finite coordinates give unspecified (but memory-safe)
//! results. Point equality is exact — there is no epsilon tolerance.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("grove_kdtree requires either the `std` or `libm` feature");

mod tree;
mod types;
pub(crate) mod util;

pub use tree::{KdTree, Nearest};
pub use types::{Point, Scalar, ScalarAcc};
