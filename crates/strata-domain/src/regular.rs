//! Regular (affine) grid with coordinates computed on demand.

use crate::data::DomainSource;
use crate::domain::{check_buffer, Domain};
use crate::index;
use smallvec::SmallVec;
use strata_core::{CoordScalar, Coords, DomainError};

/// An N-dimensional regular grid.
///
/// Defined by per-axis node counts (`dims`), the coordinates of the first
/// node (`origin`) and the distance between consecutive nodes (`spacing`).
/// Coordinates are never stored: location `l` with 1-based multi-index `m`
/// sits at `origin[d] + (m[d] - 1) * spacing[d]`, so lookup is O(N)
/// regardless of grid size.
///
/// # Examples
///
/// ```
/// use strata_domain::{Domain, RegularGrid};
///
/// let grid = RegularGrid::new(&[200, 100], &[0.0, 0.0], &[1.0, 1.0]).unwrap();
/// assert_eq!(grid.npoints(), 20_000);
/// assert_eq!(grid.coordinates(1).unwrap().as_slice(), &[0.0, 0.0]);
/// // First axis varies fastest.
/// assert_eq!(grid.coordinates(2).unwrap().as_slice(), &[1.0, 0.0]);
/// assert_eq!(grid.coordinates(201).unwrap().as_slice(), &[0.0, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RegularGrid<T: CoordScalar> {
    dims: SmallVec<[usize; 4]>,
    origin: Coords<T>,
    spacing: Coords<T>,
    npoints: usize,
}

impl<T: CoordScalar> RegularGrid<T> {
    /// Create a grid from node counts, origin and spacing.
    ///
    /// Returns `Err` if the three slices disagree in length, any axis has
    /// zero nodes, any spacing is not finite and positive, or the origin is
    /// not finite.
    pub fn new(dims: &[usize], origin: &[T], spacing: &[T]) -> Result<Self, DomainError> {
        let npoints = index::validate_dims(dims)?;
        let ndims = dims.len();
        if origin.len() != ndims {
            return Err(DomainError::DimensionMismatch {
                what: "origin",
                expected: ndims,
                got: origin.len(),
            });
        }
        if spacing.len() != ndims {
            return Err(DomainError::DimensionMismatch {
                what: "spacing",
                expected: ndims,
                got: spacing.len(),
            });
        }
        for (axis, &o) in origin.iter().enumerate() {
            if !o.is_finite() {
                return Err(DomainError::NonFiniteCoordinate {
                    what: "origin",
                    axis,
                });
            }
        }
        for (axis, &s) in spacing.iter().enumerate() {
            if !s.is_finite() || s <= T::zero() {
                return Err(DomainError::InvalidSpacing {
                    axis,
                    spacing: s.as_f64(),
                });
            }
        }
        Ok(Self {
            dims: SmallVec::from_slice(dims),
            origin: SmallVec::from_slice(origin),
            spacing: SmallVec::from_slice(spacing),
            npoints,
        })
    }

    /// Create a grid with origin `0` and unit spacing on every axis.
    pub fn with_dims(dims: &[usize]) -> Result<Self, DomainError> {
        let origin = vec![T::zero(); dims.len()];
        let spacing = vec![T::one(); dims.len()];
        Self::new(dims, &origin, &spacing)
    }

    /// Create a grid whose first node is `start` and last node is `finish`.
    ///
    /// Spacing is `(finish[d] - start[d]) / (dims[d] - 1)`. A single-node
    /// axis (`dims[d] == 1`) must have `start[d] == finish[d]` and gets unit
    /// spacing; every other axis needs `finish[d] > start[d]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use strata_domain::{Domain, RegularGrid};
    ///
    /// let grid = RegularGrid::<f64>::from_extent(&[-1.0, -1.0], &[1.0, 1.0], &[200, 100]).unwrap();
    /// assert_eq!(grid.coordinates(1).unwrap().as_slice(), &[-1.0, -1.0]);
    /// let last = grid.coordinates(grid.npoints()).unwrap();
    /// assert!((last[0] - 1.0).abs() < 1e-12 && (last[1] - 1.0).abs() < 1e-12);
    /// ```
    pub fn from_extent(start: &[T], finish: &[T], dims: &[usize]) -> Result<Self, DomainError> {
        index::validate_dims(dims)?;
        let ndims = dims.len();
        if start.len() != ndims {
            return Err(DomainError::DimensionMismatch {
                what: "start",
                expected: ndims,
                got: start.len(),
            });
        }
        if finish.len() != ndims {
            return Err(DomainError::DimensionMismatch {
                what: "finish",
                expected: ndims,
                got: finish.len(),
            });
        }
        let mut spacing: Coords<T> = SmallVec::with_capacity(ndims);
        for axis in 0..ndims {
            let (lo, hi, n) = (start[axis], finish[axis], dims[axis]);
            let bad_extent = || DomainError::InvalidExtent {
                axis,
                start: lo.as_f64(),
                finish: hi.as_f64(),
            };
            if !lo.is_finite() || !hi.is_finite() {
                return Err(bad_extent());
            }
            if n == 1 {
                if lo != hi {
                    return Err(bad_extent());
                }
                spacing.push(T::one());
            } else {
                if hi <= lo {
                    return Err(bad_extent());
                }
                spacing.push((hi - lo) / T::from_usize(n - 1));
            }
        }
        Self::new(dims, start, &spacing)
    }

    /// Node counts per axis.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Coordinates of the first node.
    pub fn origin(&self) -> &[T] {
        &self.origin
    }

    /// Distance between consecutive nodes per axis.
    pub fn spacing(&self) -> &[T] {
        &self.spacing
    }

    /// Lower and upper corners of the grid (first and last node).
    pub fn extent(&self) -> (Coords<T>, Coords<T>) {
        let lower = self.origin.clone();
        let upper = self
            .origin
            .iter()
            .zip(&self.spacing)
            .zip(&self.dims)
            .map(|((&o, &s), &n)| o + T::from_usize(n - 1) * s)
            .collect();
        (lower, upper)
    }

    /// Location of the grid node nearest to `coords`.
    ///
    /// Each axis is rounded to the nearest node and then clamped to the
    /// grid, so a point outside the grid maps to the closest boundary node
    /// instead of failing. NaN components clamp to the first node on their
    /// axis. O(N), no search.
    ///
    /// A point exactly halfway between two nodes rounds away from the
    /// origin along that axis (`2.5` on a unit grid picks the node at `3`).
    ///
    /// Fails only if `coords.len() != ndims()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use strata_domain::RegularGrid;
    ///
    /// let grid = RegularGrid::<f64>::with_dims(&[10, 10]).unwrap();
    /// assert_eq!(grid.nearest_location(&[2.4, 0.0]).unwrap(), 3);
    /// // Far outside: clamped onto the corner node.
    /// assert_eq!(grid.nearest_location(&[1e9, 1e9]).unwrap(), 100);
    /// ```
    pub fn nearest_location(&self, coords: &[T]) -> Result<usize, DomainError> {
        let ndims = self.dims.len();
        if coords.len() != ndims {
            return Err(DomainError::DimensionMismatch {
                what: "query coordinates",
                expected: ndims,
                got: coords.len(),
            });
        }
        let mut multi: SmallVec<[usize; 4]> = SmallVec::with_capacity(ndims);
        for axis in 0..ndims {
            let steps = ((coords[axis] - self.origin[axis]) / self.spacing[axis]).round();
            let last = self.dims[axis] - 1;
            let offset = if steps.is_nan() || steps <= T::zero() {
                0
            } else {
                steps.to_usize().unwrap_or(usize::MAX).min(last)
            };
            multi.push(offset + 1);
        }
        Ok(index::linear_index(&self.dims, &multi))
    }
}

impl<T: CoordScalar> Domain for RegularGrid<T> {
    type Scalar = T;

    fn ndims(&self) -> usize {
        self.dims.len()
    }

    fn size(&self) -> &[usize] {
        &self.dims
    }

    fn npoints(&self) -> usize {
        self.npoints
    }

    fn coordinates_into(&self, location: usize, buf: &mut [T]) -> Result<(), DomainError> {
        self.check_location(location)?;
        check_buffer(self.dims.len(), buf.len())?;
        let mut rem = location - 1;
        for (axis, slot) in buf.iter_mut().enumerate() {
            let n = self.dims[axis];
            let i = rem % n;
            rem /= n;
            *slot = self.origin[axis] + T::from_usize(i) * self.spacing[axis];
        }
        Ok(())
    }
}

impl<T: CoordScalar> DomainSource for RegularGrid<T> {
    type Domain = Self;

    fn domain(&self) -> &Self {
        self
    }
}
