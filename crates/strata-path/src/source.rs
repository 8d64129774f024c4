//! Seeds-first visiting order.

use indexmap::IndexSet;
use strata_domain::Domain;
use tracing::debug;

use crate::error::PathError;
use crate::path::{impl_into_iter, Path};

/// Visits a chosen list of seed locations first, then every other
/// location.
///
/// Seeds keep their given order; a seed listed twice is visited once, at
/// its first position. The remaining locations follow in ascending order,
/// or in the order of another path with
/// [`with_remainder`](Self::with_remainder).
///
/// # Examples
///
/// ```
/// use strata_domain::PointSet;
/// use strata_path::{Path, SourcePath};
///
/// let ps = PointSet::from_points(&[[0.0]; 6]).unwrap();
/// let path = SourcePath::new(&ps, &[5, 2]).unwrap();
/// assert_eq!(path.to_vec(), vec![5, 2, 1, 3, 4, 6]);
/// ```
#[derive(Clone, Debug)]
pub struct SourcePath {
    seeds: IndexSet<usize>,
    npoints: usize,
    /// Non-seed locations in visiting order; `None` means ascending.
    remainder: Option<Vec<usize>>,
}

impl SourcePath {
    /// Seeds first, then the rest in ascending order.
    ///
    /// Returns `Err` if any seed lies outside `[1, npoints]`.
    pub fn new<D: Domain + ?Sized>(domain: &D, seeds: &[usize]) -> Result<Self, PathError> {
        let npoints = domain.npoints();
        let seeds = collect_seeds(seeds, npoints)?;
        Ok(Self {
            seeds,
            npoints,
            remainder: None,
        })
    }

    /// Seeds first, then the rest in the order `remainder` visits them.
    ///
    /// Returns `Err` if any seed lies outside `[1, npoints]`, or if
    /// `remainder` does not cover exactly `npoints` locations.
    pub fn with_remainder<D, P>(
        domain: &D,
        seeds: &[usize],
        remainder: &P,
    ) -> Result<Self, PathError>
    where
        D: Domain + ?Sized,
        P: Path + ?Sized,
    {
        let npoints = domain.npoints();
        if remainder.len() != npoints {
            return Err(PathError::LengthMismatch {
                expected: npoints,
                got: remainder.len(),
            });
        }
        let seeds = collect_seeds(seeds, npoints)?;
        let rest = remainder.iter().filter(|l| !seeds.contains(l)).collect();
        Ok(Self {
            seeds,
            npoints,
            remainder: Some(rest),
        })
    }

    /// The deduplicated seeds, in visiting order.
    pub fn seeds(&self) -> impl Iterator<Item = usize> + '_ {
        self.seeds.iter().copied()
    }
}

// `IndexSet` equality ignores order; seed order matters here.
impl PartialEq for SourcePath {
    fn eq(&self, other: &Self) -> bool {
        self.npoints == other.npoints
            && self.seeds.iter().eq(other.seeds.iter())
            && self.remainder == other.remainder
    }
}

impl Eq for SourcePath {}

fn collect_seeds(seeds: &[usize], npoints: usize) -> Result<IndexSet<usize>, PathError> {
    if let Some(&seed) = seeds.iter().find(|&&s| s == 0 || s > npoints) {
        return Err(PathError::InvalidSeed { seed, npoints });
    }
    let set: IndexSet<usize> = seeds.iter().copied().collect();
    debug!(
        seeds = set.len(),
        duplicates = seeds.len() - set.len(),
        npoints,
        "built source path"
    );
    Ok(set)
}

impl Path for SourcePath {
    fn len(&self) -> usize {
        self.npoints
    }

    fn iter(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        let seeds = self.seeds.iter().copied();
        match &self.remainder {
            Some(rest) => Box::new(seeds.chain(rest.iter().copied())),
            None => Box::new(
                seeds.chain((1..=self.npoints).filter(move |l| !self.seeds.contains(l))),
            ),
        }
    }
}

impl_into_iter!(SourcePath);
