//! Coordinate element trait and the [`Coords`] vector alias.

use num_traits::Float;
use smallvec::SmallVec;
use std::fmt;

/// Coordinate vector of a single location.
///
/// Holds up to four components inline, which covers every 1D/2D/3D
/// domain plus space-time without touching the heap.
pub type Coords<T> = SmallVec<[T; 4]>;

/// Element type of domain coordinates.
///
/// Implemented for `f32` and `f64`. A domain, the radius of any
/// neighborhood over it and the metric used by that neighborhood all share
/// the same `CoordScalar`, so mixing element types is a compile error
/// rather than a runtime check.
pub trait CoordScalar:
    Float + Default + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Human-readable type name reported by `Domain::coordtype`.
    const NAME: &'static str;

    /// Convert a count or index to this element type.
    fn from_usize(n: usize) -> Self;

    /// Widen to `f64` (used in error reports).
    fn as_f64(self) -> f64;
}

impl CoordScalar for f32 {
    const NAME: &'static str = "f32";

    fn from_usize(n: usize) -> Self {
        n as f32
    }

    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl CoordScalar for f64 {
    const NAME: &'static str = "f64";

    fn from_usize(n: usize) -> Self {
        n as f64
    }

    fn as_f64(self) -> f64 {
        self
    }
}
