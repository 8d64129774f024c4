//! Rotated visiting order.

use crate::path::Path;

/// Another path rotated left by `offset`.
///
/// Element `k` is element `(k + offset) % len` of the underlying path.
/// Offsets of at least the path length wrap, so rotating by exactly the
/// length is the identity. The underlying path is borrowed.
///
/// # Examples
///
/// ```
/// use strata_domain::RegularGrid;
/// use strata_path::{Path, ShiftedPath, SimplePath};
///
/// let grid = RegularGrid::<f64>::with_dims(&[5]).unwrap();
/// let simple = SimplePath::new(&grid);
/// assert_eq!(ShiftedPath::new(&simple, 2).to_vec(), vec![3, 4, 5, 1, 2]);
/// assert_eq!(ShiftedPath::new(&simple, 7).to_vec(), vec![3, 4, 5, 1, 2]);
/// ```
#[derive(Debug)]
pub struct ShiftedPath<'p, P: Path + ?Sized> {
    path: &'p P,
    offset: usize,
}

impl<'p, P: Path + ?Sized> ShiftedPath<'p, P> {
    /// Rotate `path` left by `offset` positions.
    pub fn new(path: &'p P, offset: usize) -> Self {
        let len = path.len();
        let offset = if len == 0 { 0 } else { offset % len };
        Self { path, offset }
    }

    /// The effective offset, reduced modulo the path length.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The underlying path.
    pub fn inner(&self) -> &'p P {
        self.path
    }
}

impl<P: Path + ?Sized> Clone for ShiftedPath<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Path + ?Sized> Copy for ShiftedPath<'_, P> {}

impl<P: Path + ?Sized> Path for ShiftedPath<'_, P> {
    fn len(&self) -> usize {
        self.path.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        let k = self.offset;
        Box::new(self.path.iter().skip(k).chain(self.path.iter().take(k)))
    }
}

impl<'a, P: Path + ?Sized> IntoIterator for &'a ShiftedPath<'_, P> {
    type Item = usize;
    type IntoIter = Box<dyn Iterator<Item = usize> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use crate::random::RandomPath;
    use crate::simple::SimplePath;
    use crate::source::SourcePath;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use strata_domain::RegularGrid;

    fn grid(n: usize) -> RegularGrid<f64> {
        RegularGrid::with_dims(&[n]).unwrap()
    }

    #[test]
    fn zero_and_full_rotation_are_identity() {
        let g = grid(6);
        let simple = SimplePath::new(&g);
        assert_eq!(ShiftedPath::new(&simple, 0).to_vec(), simple.to_vec());
        assert_eq!(ShiftedPath::new(&simple, 6).to_vec(), simple.to_vec());
        assert_eq!(ShiftedPath::new(&simple, 6).offset(), 0);
    }

    #[test]
    fn shifts_source_path() {
        let g = grid(6);
        let source = SourcePath::new(&g, &[5, 2]).unwrap();
        let shifted = ShiftedPath::new(&source, 1);
        assert_eq!(shifted.to_vec(), vec![2, 1, 3, 4, 6, 5]);
    }

    #[test]
    fn nested_shifts_compose() {
        let g = grid(9);
        let simple = SimplePath::new(&g);
        let once = ShiftedPath::new(&simple, 4);
        let twice = ShiftedPath::new(&once, 3);
        assert_eq!(twice.to_vec(), ShiftedPath::new(&simple, 7).to_vec());
    }

    #[test]
    fn empty_path() {
        let simple = SimplePath::new(&strata_domain::PointSet::new(
            ndarray::Array2::<f64>::zeros((1, 0)),
        )
        .unwrap());
        let shifted = ShiftedPath::new(&simple, 3);
        assert!(shifted.is_empty());
        assert_eq!(shifted.iter().count(), 0);
    }

    #[test]
    fn over_trait_object() {
        let g = grid(4);
        let simple = SimplePath::new(&g);
        let dynamic: &dyn Path = &simple;
        let shifted = ShiftedPath::new(dynamic, 3);
        let collected: Vec<usize> = (&shifted).into_iter().collect();
        assert_eq!(collected, vec![4, 1, 2, 3]);
        assert!(std::ptr::addr_eq(shifted.inner(), dynamic));
    }

    proptest! {
        #[test]
        fn rotation_of_random_path(seed in any::<u64>(), n in 1usize..80, k in 0usize..200) {
            let g = grid(n);
            let random = RandomPath::new(&g, &mut ChaCha8Rng::seed_from_u64(seed));
            let shifted = ShiftedPath::new(&random, k);
            let mut expected = random.to_vec();
            expected.rotate_left(k % n);
            prop_assert_eq!(shifted.to_vec(), expected);
            compliance::run_full_compliance(&shifted, n);
        }
    }
}
