//! Path contract test helpers.
//!
//! Reused by every path type's tests.

use crate::path::Path;
use indexmap::IndexSet;

/// Assert `len()` matches the domain and the number of yielded elements.
pub fn assert_len_matches<P: Path + ?Sized>(path: &P, npoints: usize) {
    assert_eq!(path.len(), npoints);
    assert_eq!(path.iter().count(), npoints);
    assert_eq!(path.is_empty(), npoints == 0);
}

/// Assert every location in `[1, npoints]` appears exactly once.
pub fn assert_is_permutation<P: Path + ?Sized>(path: &P, npoints: usize) {
    let mut seen = IndexSet::with_capacity(npoints);
    for location in path.iter() {
        assert!(
            (1..=npoints).contains(&location),
            "location {location} out of range [1, {npoints}]"
        );
        assert!(seen.insert(location), "location {location} visited twice");
    }
    assert_eq!(seen.len(), npoints);
}

/// Assert two passes yield the same sequence.
pub fn assert_restartable<P: Path + ?Sized>(path: &P) {
    let first: Vec<usize> = path.iter().collect();
    let second = path.to_vec();
    assert_eq!(first, second);
}

/// Run all path compliance checks.
pub fn run_full_compliance<P: Path + ?Sized>(path: &P, npoints: usize) {
    assert_len_matches(path, npoints);
    assert_is_permutation(path, npoints);
    assert_restartable(path);
}
