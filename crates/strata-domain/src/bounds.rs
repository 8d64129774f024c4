//! Bounding regular grid of an arbitrary domain.

use crate::data::DomainSource;
use crate::domain::Domain;
use crate::regular::RegularGrid;
use num_traits::Float;
use smallvec::smallvec;
use strata_core::{CoordScalar, Coords, DomainError};
use tracing::debug;

/// Build a [`RegularGrid`] with `dims` nodes per axis whose first and last
/// nodes sit on the componentwise minimum and maximum of `source`'s
/// coordinates.
///
/// Scans the coordinates once. An axis along which every location shares
/// the same coordinate has no extent to subdivide and collapses to a single
/// node, whatever resolution was requested for it.
///
/// Fails if the source has no locations, `dims.len()` differs from the
/// source's dimensionality, any requested resolution is zero, or a
/// coordinate is not finite. A resolution of 1 on an axis that does have
/// extent is rejected too, since a single node cannot span it.
///
/// # Examples
///
/// ```
/// use strata_domain::{bounding_grid, Domain, PointSet};
///
/// let ps = PointSet::from_points(&[[1.0, 5.0], [-2.0, 7.0], [3.0, 6.0]]).unwrap();
/// let grid = bounding_grid(&ps, &[6, 3]).unwrap();
/// let (lo, hi) = grid.extent();
/// assert_eq!(lo.as_slice(), &[-2.0, 5.0]);
/// assert_eq!(hi.as_slice(), &[3.0, 7.0]);
/// assert_eq!(grid.npoints(), 18);
/// ```
pub fn bounding_grid<S>(
    source: &S,
    dims: &[usize],
) -> Result<RegularGrid<<S::Domain as Domain>::Scalar>, DomainError>
where
    S: DomainSource + ?Sized,
{
    let domain = source.domain();
    let ndims = domain.ndims();
    if dims.len() != ndims {
        return Err(DomainError::DimensionMismatch {
            what: "grid resolution",
            expected: ndims,
            got: dims.len(),
        });
    }
    if let Some(axis) = dims.iter().position(|&n| n == 0) {
        return Err(DomainError::EmptyAxis { axis });
    }
    let npoints = domain.npoints();
    if npoints == 0 {
        return Err(DomainError::EmptySource);
    }

    let (lower, upper) = coordinate_bounds(domain)?;

    let mut resolution = dims.to_vec();
    let mut collapsed = 0usize;
    for (axis, n) in resolution.iter_mut().enumerate() {
        if lower[axis] == upper[axis] {
            *n = 1;
            collapsed += 1;
        }
    }
    debug!(
        npoints,
        ndims,
        ?lower,
        ?upper,
        collapsed,
        "built bounding grid"
    );
    RegularGrid::from_extent(&lower, &upper, &resolution)
}

/// Componentwise minimum and maximum over every location of `domain`.
fn coordinate_bounds<D>(domain: &D) -> Result<(Coords<D::Scalar>, Coords<D::Scalar>), DomainError>
where
    D: Domain + ?Sized,
{
    let ndims = domain.ndims();
    let mut lower: Coords<D::Scalar> = smallvec![<D::Scalar as Float>::infinity(); ndims];
    let mut upper: Coords<D::Scalar> = smallvec![<D::Scalar as Float>::neg_infinity(); ndims];
    let mut buf: Coords<D::Scalar> = smallvec![<D::Scalar as CoordScalar>::from_usize(0); ndims];
    for location in 1..=domain.npoints() {
        domain.coordinates_into(location, &mut buf)?;
        for (axis, &v) in buf.iter().enumerate() {
            if !v.is_finite() {
                return Err(DomainError::NonFiniteCoordinate {
                    what: "source coordinate",
                    axis,
                });
            }
            lower[axis] = lower[axis].min(v);
            upper[axis] = upper[axis].max(v);
        }
    }
    Ok((lower, upper))
}
