//! The core `Domain` trait.

use ndarray::{Array2, Axis};
use num_traits::Zero;
use smallvec::smallvec;
use std::borrow::Cow;
use strata_core::{CoordScalar, Coords, DomainError};

/// An addressable, finite set of spatial locations with a coordinate lookup.
///
/// Every algorithm above this layer addresses locations by a 1-based linear
/// index and asks the domain where that location is. Concrete backends
/// ([`RegularGrid`](crate::RegularGrid), [`StructuredGrid`](crate::StructuredGrid),
/// [`PointSet`](crate::PointSet)) differ only in how they store or derive
/// coordinates.
///
/// # Thread Safety
///
/// Domains are immutable after construction. `Sync` is required so that a
/// neighborhood (which borrows its domain) can be queried from many threads
/// at once.
pub trait Domain: Send + Sync {
    /// Coordinate element type.
    type Scalar: CoordScalar;

    /// Number of spatial dimensions `N`.
    fn ndims(&self) -> usize;

    /// Per-axis extent. For grids this is `dims`; for point sets it is
    /// `[npoints]`. `npoints() == size().iter().product()` always holds.
    fn size(&self) -> &[usize];

    /// Total number of addressable locations.
    fn npoints(&self) -> usize;

    /// Write the coordinates of `location` into `buf`.
    ///
    /// Fails with [`DomainError::LocationOutOfRange`] if `location` is not in
    /// `[1, npoints]`, or [`DomainError::DimensionMismatch`] if
    /// `buf.len() != ndims()`.
    fn coordinates_into(
        &self,
        location: usize,
        buf: &mut [Self::Scalar],
    ) -> Result<(), DomainError>;

    /// Coordinates of `location` as a freshly allocated vector.
    fn coordinates(&self, location: usize) -> Result<Coords<Self::Scalar>, DomainError> {
        let mut out: Coords<Self::Scalar> = smallvec![Self::Scalar::zero(); self.ndims()];
        self.coordinates_into(location, &mut out)?;
        Ok(out)
    }

    /// The full `ndims × npoints` coordinate matrix; column `j` holds
    /// location `j + 1`.
    ///
    /// Backends that store coordinates return them borrowed. The default
    /// implementation assembles the matrix column by column, which is what
    /// [`RegularGrid`](crate::RegularGrid) does on every call.
    fn coordinate_matrix(&self) -> Cow<'_, Array2<Self::Scalar>> {
        let ndims = self.ndims();
        let mut matrix = Array2::zeros((ndims, self.npoints()));
        let mut buf: Coords<Self::Scalar> = smallvec![Self::Scalar::zero(); ndims];
        for (j, mut column) in matrix.axis_iter_mut(Axis(1)).enumerate() {
            // j + 1 is in range for every column and buf has ndims entries,
            // so only a broken backend can fail here.
            let filled = self.coordinates_into(j + 1, &mut buf);
            debug_assert!(
                filled.is_ok(),
                "coordinate lookup failed for in-range location {}: {filled:?}",
                j + 1
            );
            for (dst, &src) in column.iter_mut().zip(buf.iter()) {
                *dst = src;
            }
        }
        Cow::Owned(matrix)
    }

    /// Name of the coordinate element type (`"f32"` or `"f64"`).
    fn coordtype(&self) -> &'static str {
        Self::Scalar::NAME
    }

    /// Check that `location` lies in `[1, npoints]`.
    fn check_location(&self, location: usize) -> Result<(), DomainError> {
        let npoints = self.npoints();
        if location == 0 || location > npoints {
            return Err(DomainError::LocationOutOfRange { location, npoints });
        }
        Ok(())
    }
}

/// Check a caller-supplied coordinate buffer against `ndims`.
pub(crate) fn check_buffer(ndims: usize, len: usize) -> Result<(), DomainError> {
    if len != ndims {
        return Err(DomainError::DimensionMismatch {
            what: "coordinate buffer",
            expected: ndims,
            got: len,
        });
    }
    Ok(())
}
