//! Pairwise grouping predicates.
//!
//! A [`Partitioner`] decides whether two coordinate vectors belong in the
//! same group. Partitioners hold no domain; the grouping algorithm that
//! consumes them lives elsewhere.

use strata_core::{CoordScalar, Coords};

use crate::error::NeighborError;
use crate::metric::{Euclidean, Metric};
use crate::neighborhood::check_radius;

/// A symmetric, reflexive pairwise predicate over coordinate vectors.
pub trait Partitioner<T: CoordScalar> {
    /// `true` if `x` and `y` belong together.
    fn predicate(&self, x: &[T], y: &[T]) -> bool;
}

/// Groups points strictly closer than `radius` under a metric.
///
/// `predicate(x, y) == metric(x, y) < radius`. The inequality is strict,
/// unlike [`BallNeighborhood`](crate::BallNeighborhood), which includes the
/// boundary.
///
/// # Examples
///
/// ```
/// use strata_neighbor::{BallPartitioner, Euclidean, Partitioner};
///
/// let p = BallPartitioner::new(5.0, Euclidean).unwrap();
/// assert!(p.predicate(&[0.0, 0.0], &[3.0, 3.9]));
/// assert!(!p.predicate(&[0.0, 0.0], &[3.0, 4.0]));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BallPartitioner<T, M = Euclidean> {
    radius: T,
    metric: M,
}

impl<T: CoordScalar, M: Metric<T>> BallPartitioner<T, M> {
    /// Create a partitioner. Returns `Err` unless `radius` is finite and
    /// positive.
    pub fn new(radius: T, metric: M) -> Result<Self, NeighborError> {
        check_radius(radius)?;
        Ok(Self { radius, metric })
    }

    /// The grouping radius.
    pub fn radius(&self) -> T {
        self.radius
    }

    /// The metric.
    pub fn metric(&self) -> &M {
        &self.metric
    }
}

impl<T: CoordScalar, M: Metric<T>> Partitioner<T> for BallPartitioner<T, M> {
    fn predicate(&self, x: &[T], y: &[T]) -> bool {
        self.metric.distance(x, y) < self.radius
    }
}

/// Groups points that lie along a common line of a given direction.
///
/// `predicate(x, y)` is true when the part of `y - x` perpendicular to
/// `direction` has Euclidean length strictly below `tolerance`, i.e. `y`
/// sits inside a cylinder of that radius around the line through `x`.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectionPartitioner<T: CoordScalar> {
    unit: Coords<T>,
    tolerance: T,
}

impl<T: CoordScalar> DirectionPartitioner<T> {
    /// Create a partitioner along `direction` (any non-zero length).
    ///
    /// Returns `Err` if `direction` is empty, zero or not finite, or if
    /// `tolerance` is not finite and positive.
    pub fn new(direction: &[T], tolerance: T) -> Result<Self, NeighborError> {
        if direction.is_empty() {
            return Err(NeighborError::InvalidDirection {
                reason: "direction has no components".to_string(),
            });
        }
        if direction.iter().any(|v| !v.is_finite()) {
            return Err(NeighborError::InvalidDirection {
                reason: "direction is not finite".to_string(),
            });
        }
        let norm = direction.iter().fold(T::zero(), |acc, &v| acc + v * v).sqrt();
        if norm <= T::zero() {
            return Err(NeighborError::InvalidDirection {
                reason: "direction has zero length".to_string(),
            });
        }
        check_radius(tolerance)?;
        let unit = direction.iter().map(|&v| v / norm).collect();
        Ok(Self { unit, tolerance })
    }

    /// The normalized direction.
    pub fn direction(&self) -> &[T] {
        &self.unit
    }

    /// The perpendicular tolerance.
    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    fn perpendicular_norm(&self, x: &[T], y: &[T]) -> T {
        debug_assert_eq!(x.len(), self.unit.len());
        debug_assert_eq!(y.len(), self.unit.len());
        let along = x
            .iter()
            .zip(y)
            .zip(&self.unit)
            .fold(T::zero(), |acc, ((&a, &b), &u)| acc + (b - a) * u);
        x.iter()
            .zip(y)
            .zip(&self.unit)
            .fold(T::zero(), |acc, ((&a, &b), &u)| {
                let d = (b - a) - along * u;
                acc + d * d
            })
            .sqrt()
    }
}

impl<T: CoordScalar> Partitioner<T> for DirectionPartitioner<T> {
    fn predicate(&self, x: &[T], y: &[T]) -> bool {
        self.perpendicular_norm(x, y) < self.tolerance
    }
}
