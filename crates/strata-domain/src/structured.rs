//! Structured grid with explicitly stored coordinates.

use crate::data::DomainSource;
use crate::domain::{check_buffer, Domain};
use crate::index;
use ndarray::{Array2, ArrayD, Axis};
use smallvec::SmallVec;
use std::borrow::Cow;
use strata_core::{CoordScalar, DomainError};

/// A grid whose nodes keep grid topology but may sit anywhere in space.
///
/// Built from one coordinate array per axis, all of the same shape; that
/// shape becomes the grid's `dims`. Supports curvilinear and otherwise
/// non-affine geometries. Lookup is a column read, construction is
/// O(npoints).
///
/// # Examples
///
/// ```
/// use ndarray::{array, ArrayD};
/// use strata_domain::{Domain, StructuredGrid};
///
/// // A 2×2 sheared grid.
/// let x: ArrayD<f64> = array![[0.0, 0.5], [1.0, 1.5]].into_dyn();
/// let y: ArrayD<f64> = array![[0.0, 1.0], [0.0, 1.0]].into_dyn();
/// let grid = StructuredGrid::new(vec![x, y]).unwrap();
/// assert_eq!(grid.size(), &[2, 2]);
/// // First axis varies fastest: location 2 is element [1, 0].
/// assert_eq!(grid.coordinates(2).unwrap().as_slice(), &[1.0, 0.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredGrid<T: CoordScalar> {
    dims: SmallVec<[usize; 4]>,
    coords: Array2<T>,
}

impl<T: CoordScalar> StructuredGrid<T> {
    /// Create a structured grid from per-axis coordinate arrays.
    ///
    /// Returns `Err` if no arrays are given, the arrays disagree in shape,
    /// the shape has a zero-length or no axis, or any coordinate is not
    /// finite.
    pub fn new(axes: Vec<ArrayD<T>>) -> Result<Self, DomainError> {
        let Some(first) = axes.first() else {
            return Err(DomainError::ZeroDimensional);
        };
        let shape = first.shape().to_vec();
        for axis in &axes[1..] {
            if axis.shape() != shape.as_slice() {
                return Err(DomainError::ShapeMismatch {
                    expected: shape,
                    got: axis.shape().to_vec(),
                });
            }
        }
        let npoints = index::validate_dims(&shape)?;

        let mut coords = Array2::zeros((axes.len(), npoints));
        for (d, (axis, mut row)) in axes.iter().zip(coords.axis_iter_mut(Axis(0))).enumerate() {
            // Reversing the axes makes row-major iteration first-axis-fastest.
            for (dst, &src) in row.iter_mut().zip(axis.t().iter()) {
                if !src.is_finite() {
                    return Err(DomainError::NonFiniteCoordinate {
                        what: "structured grid coordinate",
                        axis: d,
                    });
                }
                *dst = src;
            }
        }
        Ok(Self {
            dims: SmallVec::from_vec(shape),
            coords,
        })
    }

    /// Create a structured grid from grid dimensions and a ready-made
    /// `ndims × npoints` coordinate matrix (columns in first-axis-fastest
    /// order).
    ///
    /// `ndims` (the row count) need not equal `dims.len()`: a 2-D grid
    /// topology may carry 3-D coordinates, as for a surface in space.
    pub fn from_matrix(dims: &[usize], coords: Array2<T>) -> Result<Self, DomainError> {
        let npoints = index::validate_dims(dims)?;
        if coords.nrows() == 0 {
            return Err(DomainError::ZeroDimensional);
        }
        let expected = [coords.nrows(), npoints];
        if coords.shape() != &expected[..] {
            return Err(DomainError::ShapeMismatch {
                expected: expected.to_vec(),
                got: coords.shape().to_vec(),
            });
        }
        for (axis, row) in coords.axis_iter(Axis(0)).enumerate() {
            if row.iter().any(|v| !v.is_finite()) {
                return Err(DomainError::NonFiniteCoordinate {
                    what: "structured grid coordinate",
                    axis,
                });
            }
        }
        Ok(Self {
            dims: SmallVec::from_slice(dims),
            coords,
        })
    }

    /// Node counts per axis.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }
}

impl<T: CoordScalar> Domain for StructuredGrid<T> {
    type Scalar = T;

    fn ndims(&self) -> usize {
        self.coords.nrows()
    }

    fn size(&self) -> &[usize] {
        &self.dims
    }

    fn npoints(&self) -> usize {
        self.coords.ncols()
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

impl<T: CoordScalar> DomainSource for StructuredGrid<T> {
    type Domain = Self;

    fn domain(&self) -> &Self {
        self
    }
}
