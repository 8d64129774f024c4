//! Metric and neighborhood contract test helpers.
//!
//! Reused by the metric tests and by every neighborhood test that builds
//! over a concrete domain.

use crate::metric::Metric;
use crate::neighborhood::Neighborhood;
use strata_core::CoordScalar;
use strata_domain::Domain;

fn tol<T: CoordScalar>(scale: T) -> T {
    T::from_usize(1_000) * T::epsilon() * (T::one() + scale.abs())
}

/// Assert reflexivity, non-negativity, symmetry and the triangle inequality
/// on one triple of points.
pub fn assert_metric_axioms<T: CoordScalar, M: Metric<T>>(m: &M, x: &[T], y: &[T], z: &[T]) {
    assert_eq!(m.distance(x, x), T::zero(), "d(x, x) must be 0");
    let dxy = m.distance(x, y);
    let dyx = m.distance(y, x);
    let dyz = m.distance(y, z);
    let dxz = m.distance(x, z);
    assert!(dxy >= T::zero(), "negative distance {dxy}");
    assert!((dxy - dyx).abs() <= tol(dxy), "asymmetric: {dxy} vs {dyx}");
    assert!(
        dxz <= dxy + dyz + tol(dxy + dyz),
        "triangle inequality: {dxz} > {dxy} + {dyz}"
    );
}

fn sorted(mut v: Vec<usize>) -> Vec<usize> {
    v.sort_unstable();
    v
}

/// Assert every query contains its own location.
pub fn assert_contains_self<N: Neighborhood>(hood: &N) {
    for location in 1..=hood.domain().npoints() {
        let got = hood.query(location).expect("in-range query should succeed");
        assert!(got.contains(&location), "location {location} missing from its own neighborhood");
    }
}

/// Assert no location is reported twice.
pub fn assert_no_duplicates<N: Neighborhood>(hood: &N) {
    for location in 1..=hood.domain().npoints() {
        let got = sorted(hood.query(location).unwrap());
        assert!(got.windows(2).all(|w| w[0] < w[1]), "location {location}: {got:?}");
    }
}

/// Assert query results equal an exhaustive scan under `dist`.
pub fn assert_matches_brute_force<N, T, F>(hood: &N, dist: F, radius: T)
where
    N: Neighborhood,
    N::Domain: Domain<Scalar = T>,
    T: CoordScalar,
    F: Fn(&[T], &[T]) -> T,
{
    let domain = hood.domain();
    let n = domain.npoints();
    let coords: Vec<_> = (1..=n).map(|l| domain.coordinates(l).unwrap()).collect();
    for location in 1..=n {
        let q = &coords[location - 1];
        let expected: Vec<usize> = (1..=n)
            .filter(|&j| dist(q.as_slice(), coords[j - 1].as_slice()) <= radius)
            .collect();
        assert_eq!(
            sorted(hood.query(location).unwrap()),
            expected,
            "location {location}"
        );
    }
}

/// Assert `j ∈ query(i)` exactly when `is_neighbor(c_i, c_j)`.
pub fn assert_is_neighbor_agrees<N: Neighborhood>(hood: &N) {
    let domain = hood.domain();
    let n = domain.npoints();
    for i in 1..=n {
        let ci = domain.coordinates(i).unwrap();
        let got = hood.query(i).unwrap();
        for j in 1..=n {
            let cj = domain.coordinates(j).unwrap();
            assert_eq!(
                got.contains(&j),
                hood.is_neighbor(&ci, &cj),
                "pair ({i}, {j})"
            );
        }
    }
}

/// Run all neighborhood compliance checks.
pub fn run_full_compliance<N, T, F>(hood: &N, dist: F, radius: T)
where
    N: Neighborhood,
    N::Domain: Domain<Scalar = T>,
    T: CoordScalar,
    F: Fn(&[T], &[T]) -> T,
{
    assert_contains_self(hood);
    assert_no_duplicates(hood);
    assert_matches_brute_force(hood, dist, radius);
    assert_is_neighbor_agrees(hood);
}
