//! Domain trait compliance test helpers.
//!
//! These functions verify that a Domain implementation satisfies the
//! invariants required by the trait contract. Reused across all backend
//! test modules (RegularGrid, StructuredGrid, PointSet).

use crate::domain::Domain;
use num_traits::Zero;
use strata_core::DomainError;

/// Assert that `npoints == product(size)`.
pub fn assert_npoints_matches_size<D: Domain>(domain: &D) {
    let product: usize = domain.size().iter().product();
    assert_eq!(
        product,
        domain.npoints(),
        "product(size) = {product} != npoints = {}",
        domain.npoints()
    );
}

/// Assert that locations `0` and `npoints + 1` are rejected.
pub fn assert_out_of_range_rejected<D: Domain>(domain: &D) {
    let npoints = domain.npoints();
    for location in [0, npoints + 1] {
        assert_eq!(
            domain.coordinates(location),
            Err(DomainError::LocationOutOfRange { location, npoints }),
            "location {location} should be out of range"
        );
    }
}

/// Assert that every location yields an `ndims`-long coordinate vector.
pub fn assert_coordinates_have_ndims<D: Domain>(domain: &D) {
    for location in 1..=domain.npoints() {
        let c = domain
            .coordinates(location)
            .expect("in-range location should succeed");
        assert_eq!(c.len(), domain.ndims(), "location {location}");
    }
}

/// Assert that the buffer form and the allocating form agree.
pub fn assert_into_matches_allocating<D: Domain>(domain: &D) {
    let mut buf = vec![D::Scalar::zero(); domain.ndims()];
    for location in 1..=domain.npoints() {
        domain
            .coordinates_into(location, &mut buf)
            .expect("in-range location should succeed");
        let allocated = domain.coordinates(location).unwrap();
        assert_eq!(buf.as_slice(), allocated.as_slice(), "location {location}");
    }
}

/// Assert that a buffer of the wrong length is rejected.
pub fn assert_buffer_length_checked<D: Domain>(domain: &D) {
    if domain.npoints() == 0 {
        return;
    }
    let mut short = vec![D::Scalar::zero(); domain.ndims() + 1];
    assert!(matches!(
        domain.coordinates_into(1, &mut short),
        Err(DomainError::DimensionMismatch { .. })
    ));
}

/// Assert that column `j` of the coordinate matrix is location `j + 1`.
pub fn assert_matrix_matches_lookup<D: Domain>(domain: &D) {
    let matrix = domain.coordinate_matrix();
    assert_eq!(matrix.nrows(), domain.ndims());
    assert_eq!(matrix.ncols(), domain.npoints());
    for location in 1..=domain.npoints() {
        let c = domain.coordinates(location).unwrap();
        let column: Vec<D::Scalar> = matrix.column(location - 1).to_vec();
        assert_eq!(column.as_slice(), c.as_slice(), "location {location}");
    }
}

/// Run all compliance checks on a domain.
pub fn run_full_compliance<D: Domain>(domain: &D) {
    assert_npoints_matches_size(domain);
    assert_out_of_range_rejected(domain);
    assert_coordinates_have_ndims(domain);
    assert_into_matches_allocating(domain);
    assert_buffer_length_checked(domain);
    assert_matrix_matches_lookup(domain);
}
