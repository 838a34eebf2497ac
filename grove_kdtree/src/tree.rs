// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The k-d tree: balanced construction, insertion, lookup, nearest neighbor.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::types::{Axis, Point, Region, Scalar};
use crate::util::sqrt;

/// Arena handle for a tree node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct NodeIdx(u32);

impl NodeIdx {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Node indices are intentionally 32-bit; trees beyond 2^32 points are unsupported."
    )]
    const fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Node<T> {
    point: Point<T>,
    axis: Axis,
    left: Option<NodeIdx>,
    right: Option<NodeIdx>,
}

/// A 2D k-d tree over exact point coordinates.
///
/// Nodes live in a flat arena; children are referenced by index, so the
/// ownership graph is strictly tree-shaped and dropping the tree releases
/// every node exactly once.
///
/// Build in bulk with [`KdTree::from_points`] for a balanced tree, or start
/// empty and [`insert`][KdTree::insert] points one at a time (insertion does
/// not rebalance).
///
/// ## Example
///
/// ```rust
/// use grove_kdtree::{KdTree, Point};
///
/// let tree = KdTree::from_points(&[
///     Point::new(0.0, 0.0),
///     Point::new(2.0, 0.0),
///     Point::new(0.0, 2.0),
///     Point::new(2.0, 2.0),
///     Point::new(1.0, 1.0),
/// ]);
/// assert_eq!(tree.len(), 5);
/// assert!(tree.contains(Point::new(1.0, 1.0)));
///
/// let hit = tree.nearest(Point::new(1.1, 1.1)).unwrap();
/// assert_eq!(hit.point, Point::new(1.0, 1.0));
/// ```
#[derive(Clone)]
pub struct KdTree<T: Scalar> {
    nodes: Vec<Node<T>>,
    root: Option<NodeIdx>,
}

impl<T: Scalar> core::fmt::Debug for KdTree<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KdTree")
            .field("len", &self.nodes.len())
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl<T: Scalar> Default for KdTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The result of a nearest-neighbor query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Nearest<T: Scalar> {
    /// The closest stored point.
    pub point: Point<T>,
    /// Squared Euclidean distance to the query, in the widened accumulator type.
    pub dist2: T::Acc,
}

impl<T: Scalar> Nearest<T> {
    /// Euclidean distance to the query.
    ///
    /// Approximate for integer coordinates too large to represent exactly
    /// in `f64`; compare [`dist2`][Self::dist2] values when exactness matters.
    #[inline]
    pub fn distance(&self) -> f64 {
        sqrt(T::acc_to_f64(self.dist2))
    }
}

impl<T: Scalar> KdTree<T> {
    /// Create an empty tree.
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Build a balanced tree from a slice of pairwise distinct points.
    ///
    /// The tree splits at the median on alternating axes, so its depth is
    /// O(log N) regardless of input order. Total cost is O(N log N): the
    /// input is sorted once per axis up front and the two sorted sequences
    /// are threaded through the recursion, rather than re-sorting or
    /// re-selecting medians at every level.
    ///
    /// Coordinates must be finite and points must be pairwise distinct;
    /// debug builds assert finiteness.
    pub fn from_points(points: &[Point<T>]) -> Self {
        debug_assert!(
            points.iter().all(Point::is_finite),
            "point coordinates must be finite"
        );
        let mut by_x: Vec<Point<T>> = points.to_vec();
        by_x.sort_by(|a, b| Axis::X.cmp_points(a, b));
        let mut by_y: Vec<Point<T>> = points.to_vec();
        by_y.sort_by(|a, b| Axis::Y.cmp_points(a, b));

        let mut tree = Self {
            nodes: Vec::with_capacity(points.len()),
            root: None,
        };
        tree.root = tree.build(&by_x, &by_y, Axis::X);
        tree
    }

    /// Number of points in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove all points.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Add a point. Returns `false` (leaving the tree unchanged) if an equal
    /// point is already present.
    ///
    /// Insertion descends by the stored split axes and does not rebalance,
    /// so a tree built purely by insertion has no depth guarantee. Bulk
    /// construction via [`KdTree::from_points`] stays balanced.
    pub fn insert(&mut self, p: Point<T>) -> bool {
        debug_assert!(p.is_finite(), "point coordinates must be finite");
        let Some(mut cur) = self.root else {
            self.root = Some(self.push_node(p, Axis::X));
            return true;
        };
        loop {
            let node = &self.nodes[cur.idx()];
            if node.point == p {
                return false;
            }
            // Equal is impossible past the identity check above.
            let go_left = node.axis.cmp_points(&p, &node.point) == Ordering::Less;
            let child = if go_left { node.left } else { node.right };
            match child {
                Some(next) => cur = next,
                None => {
                    let axis = node.axis.flip();
                    let leaf = self.push_node(p, axis);
                    let node = &mut self.nodes[cur.idx()];
                    if go_left {
                        node.left = Some(leaf);
                    } else {
                        node.right = Some(leaf);
                    }
                    return true;
                }
            }
        }
    }

    /// Whether a point with exactly these coordinates is present.
    pub fn contains(&self, p: Point<T>) -> bool {
        debug_assert!(p.is_finite(), "point coordinates must be finite");
        let mut cur = self.root;
        while let Some(idx) = cur {
            let node = &self.nodes[idx.idx()];
            if node.point == p {
                return true;
            }
            cur = if node.axis.cmp_points(&p, &node.point) == Ordering::Less {
                node.left
            } else {
                node.right
            };
        }
        false
    }

    /// The stored point closest (in Euclidean distance) to `q`, or `None`
    /// if the tree is empty. Ties are broken arbitrarily.
    ///
    /// This is a branch-and-bound search: each subtree is skipped once the
    /// distance from `q` to the subtree's bounding region already meets the
    /// best distance found so far, and the subtree on the query's side of
    /// each splitting line is visited first so the bound tightens early.
    /// Expected O(log N) per query on well-distributed data; O(N) worst case.
    pub fn nearest(&self, q: Point<T>) -> Option<Nearest<T>> {
        debug_assert!(q.is_finite(), "point coordinates must be finite");
        let mut best = None;
        self.nearest_in(self.root, Region::unbounded(), &q, &mut best);
        best
    }

    /// Call `f` once per stored point, in unspecified order.
    pub fn visit<F: FnMut(Point<T>)>(&self, mut f: F) {
        for node in &self.nodes {
            f(node.point);
        }
    }

    /// Iterate over all stored points, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = Point<T>> + '_ {
        self.nodes.iter().map(|n| n.point)
    }

    /// Height of the tree: the number of nodes on the longest root-to-leaf
    /// path. Zero for an empty tree. A tree built with
    /// [`KdTree::from_points`] from N points has height ⌈log2(N + 1)⌉.
    pub fn height(&self) -> usize {
        self.height_of(self.root)
    }

    fn height_of(&self, node: Option<NodeIdx>) -> usize {
        let Some(idx) = node else {
            return 0;
        };
        let n = &self.nodes[idx.idx()];
        1 + self.height_of(n.left).max(self.height_of(n.right))
    }

    fn push_node(&mut self, point: Point<T>, axis: Axis) -> NodeIdx {
        let idx = NodeIdx::new(self.nodes.len());
        self.nodes.push(Node {
            point,
            axis,
            left: None,
            right: None,
        });
        idx
    }

    /// Co-recursive balanced build over two sorted views of one point set.
    ///
    /// `cut` is sorted along `axis` (ties broken on the other axis) and
    /// supplies the median; `other` holds the same points sorted along the
    /// other axis. Partitioning `other` around the median preserves its
    /// order, so the recursion never re-sorts.
    fn build(&mut self, cut: &[Point<T>], other: &[Point<T>], axis: Axis) -> Option<NodeIdx> {
        match cut {
            [] => None,
            [p] => Some(self.push_node(*p, axis)),
            _ => {
                let mid = cut.len() / 2;
                let pivot = cut[mid];
                let mut other_lo = Vec::with_capacity(mid);
                let mut other_hi = Vec::with_capacity(cut.len() - 1 - mid);
                for p in other {
                    if *p == pivot {
                        continue;
                    }
                    match axis.cmp_points(p, &pivot) {
                        Ordering::Less => other_lo.push(*p),
                        _ => other_hi.push(*p),
                    }
                }
                let idx = self.push_node(pivot, axis);
                // Roles swap: each partition of `other` is sorted along the
                // flipped axis and becomes the next level's cut sequence.
                let left = self.build(&other_lo, &cut[..mid], axis.flip());
                let right = self.build(&other_hi, &cut[mid + 1..], axis.flip());
                let node = &mut self.nodes[idx.idx()];
                node.left = left;
                node.right = right;
                Some(idx)
            }
        }
    }

    fn nearest_in(
        &self,
        node: Option<NodeIdx>,
        region: Region<T>,
        q: &Point<T>,
        best: &mut Option<Nearest<T>>,
    ) {
        let Some(idx) = node else {
            return;
        };
        // Nothing in this region can beat the best found so far.
        if let Some(b) = best.as_ref()
            && region.dist2_to(q) >= b.dist2
        {
            return;
        }
        let n = &self.nodes[idx.idx()];
        let d2 = q.dist2(&n.point);
        if best.as_ref().is_none_or(|b| d2 < b.dist2) {
            *best = Some(Nearest {
                point: n.point,
                dist2: d2,
            });
            if d2 == T::acc_zero() {
                // Exact match; nothing can be closer.
                return;
            }
        }
        let split = n.point.get(n.axis);
        let lo = region.below(n.axis, split);
        let hi = region.above(n.axis, split);
        if n.axis.cmp_points(q, &n.point) == Ordering::Less {
            self.nearest_in(n.left, lo, q, best);
            self.nearest_in(n.right, hi, q, best);
        } else {
            self.nearest_in(n.right, hi, q, best);
            self.nearest_in(n.left, lo, q, best);
        }
    }
}
