//! Distance metrics over coordinate vectors.
//!
//! A [`Metric`] must be non-negative, symmetric and satisfy the triangle
//! inequality. The ball tree prunes subtrees using nothing but the triangle
//! inequality, so any true metric works with it; a function that violates
//! it (e.g. squared Euclidean) silently loses neighbors.

use smallvec::SmallVec;
use std::fmt;
use strata_core::{CoordScalar, Coords};

use crate::error::NeighborError;

/// A distance function over two coordinate vectors of equal length.
pub trait Metric<T: CoordScalar> {
    /// Distance between `a` and `b`.
    ///
    /// Both slices have the domain's dimensionality; callers guarantee
    /// equal lengths.
    fn distance(&self, a: &[T], b: &[T]) -> T;

    /// Dimensionality the metric is bound to, if any.
    ///
    /// Parameterized metrics such as [`Ellipsoidal`] carry one value per
    /// axis and can only be used with domains of matching dimension.
    fn ndims(&self) -> Option<usize> {
        None
    }
}

impl<T: CoordScalar, M: Metric<T> + ?Sized> Metric<T> for &M {
    fn distance(&self, a: &[T], b: &[T]) -> T {
        (**self).distance(a, b)
    }

    fn ndims(&self) -> Option<usize> {
        (**self).ndims()
    }
}

impl<T: CoordScalar, M: Metric<T> + ?Sized> Metric<T> for Box<M> {
    fn distance(&self, a: &[T], b: &[T]) -> T {
        (**self).distance(a, b)
    }

    fn ndims(&self) -> Option<usize> {
        (**self).ndims()
    }
}

/// Straight-line (L2) distance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Euclidean;

impl<T: CoordScalar> Metric<T> for Euclidean {
    fn distance(&self, a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b)
            .fold(T::zero(), |acc, (&x, &y)| {
                let d = x - y;
                acc + d * d
            })
            .sqrt()
    }
}

/// Sum of absolute differences (L1, Manhattan).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cityblock;

impl<T: CoordScalar> Metric<T> for Cityblock {
    fn distance(&self, a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b)
            .fold(T::zero(), |acc, (&x, &y)| acc + (x - y).abs())
    }
}

/// Largest absolute difference along any axis (L∞).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Chebyshev;

impl<T: CoordScalar> Metric<T> for Chebyshev {
    fn distance(&self, a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b)
            .fold(T::zero(), |acc, (&x, &y)| acc.max((x - y).abs()))
    }
}

/// Minkowski (Lp) distance, `p >= 1`.
///
/// `p = 1` is [`Cityblock`] and `p = 2` is [`Euclidean`]; below 1 the
/// triangle inequality fails, so such exponents are rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Minkowski<T> {
    p: T,
}

impl<T: CoordScalar> Minkowski<T> {
    /// Create a Minkowski metric with exponent `p`.
    ///
    /// Returns `Err` unless `p` is finite and at least 1.
    pub fn new(p: T) -> Result<Self, NeighborError> {
        if !p.is_finite() || p < T::one() {
            return Err(NeighborError::InvalidMetric {
                reason: format!("Minkowski exponent must be finite and >= 1, got {p}"),
            });
        }
        Ok(Self { p })
    }

    /// The exponent.
    pub fn p(&self) -> T {
        self.p
    }
}

impl<T: CoordScalar> Metric<T> for Minkowski<T> {
    fn distance(&self, a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), b.len());
        let sum = a
            .iter()
            .zip(b)
            .fold(T::zero(), |acc, (&x, &y)| acc + (x - y).abs().powf(self.p));
        sum.powf(self.p.recip())
    }
}

/// Axis-aligned anisotropic distance.
///
/// Each axis difference is divided by that axis's semi-axis length before
/// taking the Euclidean norm, so the unit ball is an ellipsoid with the
/// given semi-axes. A neighborhood of radius 1 under this metric selects
/// exactly the points inside that ellipsoid.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoidal<T: CoordScalar> {
    semiaxes: Coords<T>,
}

impl<T: CoordScalar> Ellipsoidal<T> {
    /// Create an ellipsoidal metric from per-axis semi-axis lengths.
    ///
    /// Returns `Err` if `semiaxes` is empty or any length is not finite
    /// and positive.
    pub fn new(semiaxes: &[T]) -> Result<Self, NeighborError> {
        if semiaxes.is_empty() {
            return Err(NeighborError::InvalidMetric {
                reason: "ellipsoid needs at least one semi-axis".to_string(),
            });
        }
        if let Some((axis, a)) = semiaxes
            .iter()
            .enumerate()
            .find(|(_, a)| !a.is_finite() || **a <= T::zero())
        {
            return Err(NeighborError::InvalidMetric {
                reason: format!("semi-axis {axis} must be finite and > 0, got {a}"),
            });
        }
        Ok(Self {
            semiaxes: SmallVec::from_slice(semiaxes),
        })
    }

    /// Per-axis semi-axis lengths.
    pub fn semiaxes(&self) -> &[T] {
        &self.semiaxes
    }
}

impl<T: CoordScalar> Metric<T> for Ellipsoidal<T> {
    fn distance(&self, a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), self.semiaxes.len());
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b)
            .zip(&self.semiaxes)
            .fold(T::zero(), |acc, ((&x, &y), &s)| {
                let d = (x - y) / s;
                acc + d * d
            })
            .sqrt()
    }

    fn ndims(&self) -> Option<usize> {
        Some(self.semiaxes.len())
    }
}

/// A user-supplied distance function; see [`metric_fn`].
#[derive(Clone, Copy)]
pub struct MetricFn<F>(F);

impl<F> fmt::Debug for MetricFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MetricFn(..)")
    }
}

impl<T: CoordScalar, F: Fn(&[T], &[T]) -> T> Metric<T> for MetricFn<F> {
    fn distance(&self, a: &[T], b: &[T]) -> T {
        (self.0)(a, b)
    }
}

/// Adapt a closure into a [`Metric`].
///
/// The closure must itself be a metric (non-negative, symmetric, triangle
/// inequality); this is not checked.
///
/// # Examples
///
/// ```
/// use strata_neighbor::{metric_fn, Metric};
///
/// // Euclidean distance in the horizontal plane only.
/// let planar = metric_fn(|a: &[f64], b: &[f64]| {
///     ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt()
/// });
/// assert_eq!(planar.distance(&[0.0, 0.0, 5.0], &[3.0, 4.0, -5.0]), 5.0);
/// ```
pub fn metric_fn<T, F>(f: F) -> MetricFn<F>
where
    T: CoordScalar,
    F: Fn(&[T], &[T]) -> T,
{
    MetricFn(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    // ── Known values ───────────────────────────────────────────

    #[test]
    fn three_four_five() {
        let a = [0.0, 0.0];
        let b = [3.0, -4.0];
        assert_eq!(Euclidean.distance(&a, &b), 5.0);
        assert_eq!(Cityblock.distance(&a, &b), 7.0);
        assert_eq!(Chebyshev.distance(&a, &b), 4.0);
    }

    #[test]
    fn minkowski_interpolates_l1_and_l2() {
        let a: [f64; 3] = [1.0, 2.0, 3.0];
        let b = [-2.0, 6.0, 3.5];
        let l1 = Minkowski::new(1.0).unwrap().distance(&a, &b);
        let l2 = Minkowski::new(2.0).unwrap().distance(&a, &b);
        assert!((l1 - Cityblock.distance(&a, &b)).abs() < 1e-12);
        assert!((l2 - Euclidean.distance(&a, &b)).abs() < 1e-12);
        let l3 = Minkowski::new(3.0).unwrap().distance(&a, &b);
        assert!(l3 < l2 && l3 > Chebyshev.distance(&a, &b));
    }

    #[test]
    fn minkowski_rejects_sub_unit_exponent() {
        assert!(Minkowski::new(0.5f64).is_err());
        assert!(Minkowski::new(f64::NAN).is_err());
        assert!(Minkowski::new(f64::INFINITY).is_err());
        assert_eq!(Minkowski::new(1.0f32).unwrap().p(), 1.0);
    }

    #[test]
    fn ellipsoid_scales_axes() {
        let m = Ellipsoidal::<f64>::new(&[10.0, 2.0]).unwrap();
        assert_eq!(m.distance(&[0.0, 0.0], &[10.0, 0.0]), 1.0);
        assert_eq!(m.distance(&[0.0, 0.0], &[0.0, 2.0]), 1.0);
        assert!((m.distance(&[0.0, 0.0], &[6.0, 1.6]) - 1.0).abs() < 1e-12);
        assert!(m.distance(&[0.0, 0.0], &[6.0, 1.7]) > 1.0);
        assert_eq!(m.semiaxes(), &[10.0, 2.0]);
        assert_eq!(Metric::<f64>::ndims(&m), Some(2));
    }

    #[test]
    fn ellipsoid_validation() {
        assert!(Ellipsoidal::<f64>::new(&[]).is_err());
        assert!(Ellipsoidal::new(&[1.0, 0.0]).is_err());
        assert!(Ellipsoidal::new(&[1.0, -3.0]).is_err());
        assert!(Ellipsoidal::new(&[f64::NAN]).is_err());
    }

    #[test]
    fn references_and_boxes_forward() {
        let boxed: Box<dyn Metric<f64>> = Box::new(Ellipsoidal::new(&[2.0]).unwrap());
        assert_eq!(boxed.distance(&[0.0], &[4.0]), 2.0);
        assert_eq!(boxed.ndims(), Some(1));
        let by_ref = &Chebyshev;
        assert_eq!(Metric::<f64>::distance(&by_ref, &[1.0], &[-1.0]), 2.0);
    }

    #[test]
    fn closure_metric() {
        let m = metric_fn(|a: &[f32], b: &[f32]| (a[0] - b[0]).abs());
        assert_eq!(m.distance(&[1.0, 100.0], &[4.0, -100.0]), 3.0);
        assert_eq!(Metric::<f32>::ndims(&m), None);
        assert_eq!(format!("{m:?}"), "MetricFn(..)");
    }

    // ── Metric axioms ──────────────────────────────────────────

    fn triple() -> impl Strategy<Value = ([f64; 3], [f64; 3], [f64; 3])> {
        let p = || prop::array::uniform3(-100.0f64..100.0);
        (p(), p(), p())
    }

    proptest! {
        #[test]
        fn euclidean_axioms((x, y, z) in triple()) {
            compliance::assert_metric_axioms(&Euclidean, &x, &y, &z);
        }

        #[test]
        fn cityblock_axioms((x, y, z) in triple()) {
            compliance::assert_metric_axioms(&Cityblock, &x, &y, &z);
        }

        #[test]
        fn chebyshev_axioms((x, y, z) in triple()) {
            compliance::assert_metric_axioms(&Chebyshev, &x, &y, &z);
        }

        #[test]
        fn minkowski_axioms((x, y, z) in triple(), p in 1.0f64..6.0) {
            let m = Minkowski::new(p).unwrap();
            compliance::assert_metric_axioms(&m, &x, &y, &z);
        }

        #[test]
        fn ellipsoidal_axioms(
            (x, y, z) in triple(),
            axes in prop::array::uniform3(0.1f64..50.0),
        ) {
            let m = Ellipsoidal::new(&axes).unwrap();
            compliance::assert_metric_axioms(&m, &x, &y, &z);
        }
    }
}
