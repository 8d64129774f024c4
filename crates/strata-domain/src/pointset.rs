//! Unstructured point set.

use crate::data::DomainSource;
use crate::domain::{check_buffer, Domain};
use ndarray::{Array2, Axis};
use std::borrow::Cow;
use strata_core::{CoordScalar, DomainError};

/// A set of scattered locations with no axis structure.
///
/// Stores an `ndims × npoints` coordinate matrix; `size()` is `[npoints]`.
/// An empty point set (zero columns) is a valid domain.
///
/// # Examples
///
/// ```
/// use strata_domain::{Domain, PointSet};
///
/// let ps = PointSet::from_points(&[[0.0, 1.0], [2.0, 3.0], [4.0, 5.0]]).unwrap();
/// assert_eq!(ps.npoints(), 3);
/// assert_eq!(ps.size(), &[3]);
/// assert_eq!(ps.coordinates(2).unwrap().as_slice(), &[2.0, 3.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet<T: CoordScalar> {
    coords: Array2<T>,
    size: [usize; 1],
}

impl<T: CoordScalar> PointSet<T> {
    /// Create a point set from an `ndims × npoints` matrix.
    ///
    /// Returns `Err` if the matrix has no rows or holds a non-finite value.
    pub fn new(coords: Array2<T>) -> Result<Self, DomainError> {
        if coords.nrows() == 0 {
            return Err(DomainError::ZeroDimensional);
        }
        for (axis, row) in coords.axis_iter(Axis(0)).enumerate() {
            if row.iter().any(|v| !v.is_finite()) {
                return Err(DomainError::NonFiniteCoordinate {
                    what: "point coordinate",
                    axis,
                });
            }
        }
        let size = [coords.ncols()];
        Ok(Self { coords, size })
    }

    /// Create a point set from a list of coordinate tuples.
    ///
    /// Every tuple must have the same length, which becomes `ndims`. The
    /// dimension cannot be inferred from an empty list, so that case is
    /// rejected; build empty sets with [`PointSet::new`] instead.
    pub fn from_points<P: AsRef<[T]>>(points: &[P]) -> Result<Self, DomainError> {
        let Some(first) = points.first() else {
            return Err(DomainError::ZeroDimensional);
        };
        let ndims = first.as_ref().len();
        let mut coords = Array2::zeros((ndims, points.len()));
        for (mut column, point) in coords.axis_iter_mut(Axis(1)).zip(points) {
            let point = point.as_ref();
            if point.len() != ndims {
                return Err(DomainError::DimensionMismatch {
                    what: "point",
                    expected: ndims,
                    got: point.len(),
                });
            }
            for (dst, &src) in column.iter_mut().zip(point) {
                *dst = src;
            }
        }
        Self::new(coords)
    }
}

impl<T: CoordScalar> Domain for PointSet<T> {
    type Scalar = T;

    fn ndims(&self) -> usize {
        self.coords.nrows()
    }

    fn size(&self) -> &[usize] {
        &self.size
    }

    fn npoints(&self) -> usize {
        self.size[0]
    }

    fn coordinates_into(&self, location: usize, buf: &mut [T]) -> Result<(), DomainError> {
        self.check_location(location)?;
        check_buffer(self.ndims(), buf.len())?;
        for (dst, &src) in buf.iter_mut().zip(self.coords.column(location - 1)) {
            *dst = src;
        }
        Ok(())
    }

    fn coordinate_matrix(&self) -> Cow<'_, Array2<T>> {
        Cow::Borrowed(&self.coords)
    }
}

impl<T: CoordScalar> DomainSource for PointSet<T> {
    type Domain = Self;

    fn domain(&self) -> &Self {
        self
    }
}
