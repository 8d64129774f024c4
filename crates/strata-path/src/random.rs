//! Random visiting order.

use rand::seq::SliceRandom;
use rand::Rng;
use strata_domain::Domain;
use tracing::debug;

use crate::path::{impl_into_iter, Path};

/// Visits locations in a uniformly random order.
///
/// The permutation is drawn once, at construction, from the supplied
/// generator (Fisher–Yates). Every iteration replays it, so two passes over
/// the same `RandomPath` agree. Seed the generator for reproducible runs.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use strata_domain::RegularGrid;
/// use strata_path::{Path, RandomPath};
///
/// let grid = RegularGrid::<f64>::with_dims(&[10, 10]).unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let path = RandomPath::new(&grid, &mut rng);
/// assert_eq!(path.len(), 100);
/// assert_eq!(path.to_vec(), path.to_vec());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomPath {
    order: Vec<usize>,
}

impl RandomPath {
    /// Draw a random permutation of every location of `domain`.
    pub fn new<D, R>(domain: &D, rng: &mut R) -> Self
    where
        D: Domain + ?Sized,
        R: Rng + ?Sized,
    {
        let npoints = domain.npoints();
        let mut order: Vec<usize> = (1..=npoints).collect();
        order.shuffle(rng);
        debug!(npoints, "drew random path");
        Self { order }
    }

    /// The drawn permutation.
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }
}

impl Path for RandomPath {
    fn len(&self) -> usize {
        self.order.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.order.iter().copied())
    }
}

impl_into_iter!(RandomPath);
