//! Ball tree spatial index.
//!
//! Points are stored once, permuted into depth-first node order, so every
//! node owns a contiguous run `[start, end)` of the point buffer. Each node
//! records the centroid of its points and the largest metric distance from
//! that centroid to any of them. Construction splits a node on the axis of
//! widest coordinate spread at the median until at most `leaf_size` points
//! remain.
//!
//! A radius query descends from the root and skips a node when
//! `d(q, center) - node_radius > r`: by the triangle inequality no point in
//! the node can then be within `r` of `q`. Leaves are scanned exactly.

use ndarray::{ArrayView2, Axis};
use smallvec::smallvec;
use std::cmp::Ordering;
use strata_core::{CoordScalar, Coords};

use crate::error::NeighborError;
use crate::metric::Metric;

/// Ball tree construction parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BallTreeConfig {
    /// Maximum number of points stored in a leaf. Must be at least 1.
    pub leaf_size: usize,
}

impl BallTreeConfig {
    /// Leaf size used by [`Default`].
    pub const DEFAULT_LEAF_SIZE: usize = 16;

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), NeighborError> {
        if self.leaf_size == 0 {
            return Err(NeighborError::InvalidConfig {
                reason: "leaf_size must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for BallTreeConfig {
    fn default() -> Self {
        Self {
            leaf_size: Self::DEFAULT_LEAF_SIZE,
        }
    }
}

#[derive(Clone, Debug)]
struct Node<T: CoordScalar> {
    center: Coords<T>,
    radius: T,
    start: usize,
    end: usize,
    children: Option<(usize, usize)>,
}

/// A static ball tree over a fixed set of points.
///
/// The tree is built for one metric; querying with a different metric than
/// the one used at construction gives wrong answers. [`BallNeighborhood`]
/// keeps the two together.
///
/// [`BallNeighborhood`]: crate::BallNeighborhood
#[derive(Clone, Debug)]
pub struct BallTree<T: CoordScalar> {
    ndims: usize,
    /// Point coordinates in node order, `ndims` values per point.
    points: Vec<T>,
    /// Column index (0-based) in the source matrix for each stored point.
    indices: Vec<usize>,
    nodes: Vec<Node<T>>,
    leaf_size: usize,
}

impl<T: CoordScalar> BallTree<T> {
    /// Build a tree over the columns of an `ndims × npoints` matrix.
    ///
    /// Query results refer to points by their 0-based column index.
    /// An empty matrix yields an empty tree that matches nothing.
    pub fn build<M: Metric<T> + ?Sized>(
        coords: ArrayView2<'_, T>,
        metric: &M,
        config: &BallTreeConfig,
    ) -> Result<Self, NeighborError> {
        config.validate()?;
        let ndims = coords.nrows();
        let npoints = coords.ncols();

        let mut data = Vec::with_capacity(ndims * npoints);
        for column in coords.axis_iter(Axis(1)) {
            data.extend(column.iter().copied());
        }

        let mut order: Vec<usize> = (0..npoints).collect();
        let mut nodes = Vec::new();
        if npoints > 0 {
            let mut builder = Builder {
                data: &data,
                ndims,
                metric,
                leaf_size: config.leaf_size,
                nodes: &mut nodes,
            };
            builder.build_node(&mut order, 0);
        }

        let mut points = Vec::with_capacity(data.len());
        for &i in &order {
            points.extend_from_slice(&data[i * ndims..(i + 1) * ndims]);
        }

        Ok(Self {
            ndims,
            points,
            indices: order,
            nodes,
            leaf_size: config.leaf_size,
        })
    }

    /// Number of indexed points.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// `true` if the tree indexes no points.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Dimensionality of the indexed points.
    pub fn ndims(&self) -> usize {
        self.ndims
    }

    /// Number of nodes (internal and leaf).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Leaf size the tree was built with.
    pub fn leaf_size(&self) -> usize {
        self.leaf_size
    }

    /// Append the column index of every point within `radius` of `query`
    /// (inclusive) to `out`.
    ///
    /// `metric` must be the metric the tree was built with and `query` must
    /// have [`ndims`](Self::ndims) components.
    pub fn within<M: Metric<T> + ?Sized>(
        &self,
        query: &[T],
        radius: T,
        metric: &M,
        out: &mut Vec<usize>,
    ) {
        debug_assert_eq!(query.len(), self.ndims);
        if self.nodes.is_empty() {
            return;
        }
        // Rounding in `d(q, c) - node_radius` can make a point lying exactly
        // on the query sphere look unreachable; widen the pruning bound
        // slightly. Leaves still apply the exact test.
        let slack = T::one() + T::epsilon() * T::from_usize(8);
        let mut stack: Vec<usize> = Vec::with_capacity(32);
        stack.push(0);
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            let d = metric.distance(query, &node.center);
            if d > (radius + node.radius) * slack {
                continue;
            }
            match node.children {
                Some((left, right)) => {
                    stack.push(right);
                    stack.push(left);
                }
                None => {
                    for k in node.start..node.end {
                        let p = &self.points[k * self.ndims..(k + 1) * self.ndims];
                        if metric.distance(query, p) <= radius {
                            out.push(self.indices[k]);
                        }
                    }
                }
            }
        }
    }
}

struct Builder<'a, T: CoordScalar, M: ?Sized> {
    data: &'a [T],
    ndims: usize,
    metric: &'a M,
    leaf_size: usize,
    nodes: &'a mut Vec<Node<T>>,
}

impl<T: CoordScalar, M: Metric<T> + ?Sized> Builder<'_, T, M> {
    fn point(&self, i: usize) -> &[T] {
        &self.data[i * self.ndims..(i + 1) * self.ndims]
    }

    /// Build the subtree over `order` (points `offset..offset + order.len()`
    /// in final node order) and return its node id.
    fn build_node(&mut self, order: &mut [usize], offset: usize) -> usize {
        let ndims = self.ndims;
        let mut center: Coords<T> = smallvec![T::zero(); ndims];
        for &i in order.iter() {
            for (c, &v) in center.iter_mut().zip(self.point(i)) {
                *c = *c + v;
            }
        }
        let count = T::from_usize(order.len());
        for c in center.iter_mut() {
            *c = *c / count;
        }
        let radius = order
            .iter()
            .map(|&i| self.metric.distance(&center, self.point(i)))
            .fold(T::zero(), T::max);

        let id = self.nodes.len();
        self.nodes.push(Node {
            center,
            radius,
            start: offset,
            end: offset + order.len(),
            children: None,
        });

        if order.len() <= self.leaf_size {
            return id;
        }

        let axis = self.widest_axis(order);
        let mid = order.len() / 2;
        let data = self.data;
        order.select_nth_unstable_by(mid, |&a, &b| {
            data[a * ndims + axis]
                .partial_cmp(&data[b * ndims + axis])
                .unwrap_or(Ordering::Equal)
        });
        let (left, right) = order.split_at_mut(mid);
        let l = self.build_node(left, offset);
        let r = self.build_node(right, offset + mid);
        self.nodes[id].children = Some((l, r));
        id
    }

    fn widest_axis(&self, order: &[usize]) -> usize {
        let mut best = 0;
        let mut best_spread = T::neg_infinity();
        for axis in 0..self.ndims {
            let (lo, hi) = order.iter().fold(
                (T::infinity(), T::neg_infinity()),
                |(lo, hi), &i| {
                    let v = self.data[i * self.ndims + axis];
                    (lo.min(v), hi.max(v))
                },
            );
            if hi - lo > best_spread {
                best_spread = hi - lo;
                best = axis;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::{Chebyshev, Cityblock, Euclidean};
    use ndarray::{array, Array2};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn cloud(n: usize, ndims: usize, seed: u64) -> Array2<f64> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Array2::from_shape_fn((ndims, n), |_| rng.random_range(-10.0..10.0))
    }

    fn brute<M: Metric<f64>>(coords: &Array2<f64>, q: &[f64], r: f64, m: &M) -> Vec<usize> {
        (0..coords.ncols())
            .filter(|&j| m.distance(q, &coords.column(j).to_vec()) <= r)
            .collect()
    }

    fn sorted(mut v: Vec<usize>) -> Vec<usize> {
        v.sort_unstable();
        v
    }

    // ── Construction tests ─────────────────────────────────────

    #[test]
    fn zero_leaf_size_rejected() {
        let cfg = BallTreeConfig { leaf_size: 0 };
        let m = array![[0.0, 1.0]];
        assert!(matches!(
            BallTree::build(m.view(), &Euclidean, &cfg),
            Err(NeighborError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn default_leaf_size() {
        assert_eq!(BallTreeConfig::default().leaf_size, 16);
    }

    #[test]
    fn empty_tree_matches_nothing() {
        let m = Array2::<f64>::zeros((3, 0));
        let tree = BallTree::build(m.view(), &Euclidean, &BallTreeConfig::default()).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.node_count(), 0);
        let mut out = Vec::new();
        tree.within(&[0.0, 0.0, 0.0], 1e9, &Euclidean, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn every_point_stored_once() {
        let coords = cloud(500, 3, 7);
        let cfg = BallTreeConfig { leaf_size: 4 };
        let tree = BallTree::build(coords.view(), &Euclidean, &cfg).unwrap();
        assert_eq!(tree.len(), 500);
        assert_eq!(sorted(tree.indices.clone()), (0..500).collect::<Vec<_>>());
        assert!(tree.node_count() > 500 / 4);
        for node in &tree.nodes {
            if node.children.is_none() {
                assert!(node.end - node.start <= 4);
            }
        }
    }

    #[test]
    fn node_balls_contain_their_points() {
        let coords = cloud(300, 2, 11);
        let tree = BallTree::build(coords.view(), &Cityblock, &BallTreeConfig { leaf_size: 3 })
            .unwrap();
        for node in &tree.nodes {
            for k in node.start..node.end {
                let p = &tree.points[k * 2..(k + 1) * 2];
                assert!(Cityblock.distance(&node.center, p) <= node.radius);
            }
        }
    }

    #[test]
    fn duplicate_points_split_cleanly() {
        let coords = Array2::from_elem((2, 100), 1.5);
        let tree =
            BallTree::build(coords.view(), &Euclidean, &BallTreeConfig { leaf_size: 1 }).unwrap();
        let mut out = Vec::new();
        tree.within(&[1.5, 1.5], 1e-9, &Euclidean, &mut out);
        assert_eq!(sorted(out), (0..100).collect::<Vec<_>>());
    }

    // ── Query tests ────────────────────────────────────────────

    #[test]
    fn matches_brute_force_under_several_metrics() {
        let coords = cloud(400, 3, 3);
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for leaf_size in [1, 5, 16, 1000] {
            let cfg = BallTreeConfig { leaf_size };
            let e = BallTree::build(coords.view(), &Euclidean, &cfg).unwrap();
            let c = BallTree::build(coords.view(), &Chebyshev, &cfg).unwrap();
            for _ in 0..20 {
                let q: Vec<f64> = (0..3).map(|_| rng.random_range(-12.0..12.0)).collect();
                let r = rng.random_range(0.1..8.0);
                let mut out = Vec::new();
                e.within(&q, r, &Euclidean, &mut out);
                assert_eq!(sorted(out), brute(&coords, &q, r, &Euclidean));
                let mut out = Vec::new();
                c.within(&q, r, &Chebyshev, &mut out);
                assert_eq!(sorted(out), brute(&coords, &q, r, &Chebyshev));
            }
        }
    }

    #[test]
    fn boundary_distance_is_inclusive() {
        // Integer lattice: many points lie exactly at distance 1 and 2.
        let mut pts = Vec::new();
        for y in 0..10 {
            for x in 0..10 {
                pts.push(x as f64);
                pts.push(y as f64);
            }
        }
        let coords = Array2::from_shape_vec((100, 2), pts).unwrap().reversed_axes();
        let tree =
            BallTree::build(coords.view(), &Euclidean, &BallTreeConfig { leaf_size: 2 }).unwrap();
        let mut out = Vec::new();
        tree.within(&[4.0, 4.0], 1.0, &Euclidean, &mut out);
        // centre + 4 axis neighbors
        assert_eq!(out.len(), 5);
        out.clear();
        tree.within(&[0.0, 0.0], 2.0, &Euclidean, &mut out);
        assert_eq!(sorted(out), brute(&coords, &[0.0, 0.0], 2.0, &Euclidean));
    }

    #[test]
    fn within_appends() {
        let coords = array![[0.0, 5.0]];
        let tree = BallTree::build(coords.view(), &Euclidean, &BallTreeConfig::default()).unwrap();
        let mut out = vec![42];
        tree.within(&[0.0], 1.0, &Euclidean, &mut out);
        assert_eq!(out, vec![42, 0]);
    }
}
