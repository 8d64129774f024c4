//! Test fixtures and brute-force oracles for Strata development.
//!
//! The oracles here answer the same questions as the indexed structures in
//! `strata-neighbor` and `strata-path` by exhaustive scan, so tests can
//! compare the two on arbitrary inputs. Point-cloud fixtures live in
//! [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use indexmap::IndexSet;
use strata_core::CoordScalar;
use strata_domain::Domain;

/// Every location within `radius` of `query` under `dist`, ascending.
///
/// `dist` is called as `dist(query, point)`, the same argument order the
/// ball tree uses, so results agree exactly even for metrics whose
/// floating-point evaluation is not perfectly symmetric.
pub fn brute_force_near_point<D, F>(
    domain: &D,
    query: &[D::Scalar],
    radius: D::Scalar,
    dist: F,
) -> Vec<usize>
where
    D: Domain + ?Sized,
    F: Fn(&[D::Scalar], &[D::Scalar]) -> D::Scalar,
{
    let mut buf = vec![<D::Scalar as CoordScalar>::from_usize(0); domain.ndims()];
    let mut out = Vec::new();
    for location in 1..=domain.npoints() {
        if domain.coordinates_into(location, &mut buf).is_err() {
            continue;
        }
        if dist(query, buf.as_slice()) <= radius {
            out.push(location);
        }
    }
    out
}

/// Every location within `radius` of `location`, ascending.
///
/// Panics if `location` is out of range.
pub fn brute_force_neighbors<D, F>(
    domain: &D,
    location: usize,
    radius: D::Scalar,
    dist: F,
) -> Vec<usize>
where
    D: Domain + ?Sized,
    F: Fn(&[D::Scalar], &[D::Scalar]) -> D::Scalar,
{
    let query = domain
        .coordinates(location)
        .expect("oracle query location must be in range");
    brute_force_near_point(domain, &query, radius, dist)
}

/// Sort a location list ascending, for order-insensitive comparison.
pub fn sorted(mut locations: Vec<usize>) -> Vec<usize> {
    locations.sort_unstable();
    locations
}

/// `true` if `seq` contains every location in `[1, npoints]` exactly once.
pub fn is_permutation(seq: &[usize], npoints: usize) -> bool {
    if seq.len() != npoints {
        return false;
    }
    let seen: IndexSet<usize> = seq.iter().copied().collect();
    seen.len() == npoints && seen.iter().all(|&l| (1..=npoints).contains(&l))
}
