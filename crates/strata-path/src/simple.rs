//! Identity visiting order.

use strata_domain::Domain;

use crate::path::{impl_into_iter, Path};

/// Visits locations in index order: the k-th element is `k`.
///
/// # Examples
///
/// ```
/// use strata_domain::RegularGrid;
/// use strata_path::{Path, SimplePath};
///
/// let grid = RegularGrid::<f64>::with_dims(&[2, 2]).unwrap();
/// assert_eq!(SimplePath::new(&grid).to_vec(), vec![1, 2, 3, 4]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimplePath {
    npoints: usize,
}

impl SimplePath {
    /// Identity path over every location of `domain`.
    pub fn new<D: Domain + ?Sized>(domain: &D) -> Self {
        Self {
            npoints: domain.npoints(),
        }
    }
}

impl Path for SimplePath {
    fn len(&self) -> usize {
        self.npoints
    }

    fn iter(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(1..=self.npoints)
    }
}

impl_into_iter!(SimplePath);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use ndarray::Array2;
    use strata_domain::{PointSet, RegularGrid};

    #[test]
    fn kth_element_is_k() {
        let grid = RegularGrid::<f64>::with_dims(&[7, 3]).unwrap();
        let path = SimplePath::new(&grid);
        assert_eq!(path.len(), 21);
        for (k, location) in path.iter().enumerate() {
            assert_eq!(location, k + 1);
        }
    }

    #[test]
    fn empty_domain() {
        let ps = PointSet::new(Array2::<f64>::zeros((2, 0))).unwrap();
        let path = SimplePath::new(&ps);
        assert!(path.is_empty());
        assert_eq!(path.iter().count(), 0);
    }

    #[test]
    fn usable_in_for_loops() {
        let grid = RegularGrid::<f32>::with_dims(&[3]).unwrap();
        let path = SimplePath::new(&grid);
        let mut total = 0;
        for location in &path {
            total += location;
        }
        assert_eq!(total, 6);
        let dynamic: &dyn Path = &path;
        assert_eq!(dynamic.into_iter().last(), Some(3));
    }

    #[test]
    fn compliance_simple() {
        let grid = RegularGrid::<f64>::with_dims(&[5, 4, 2]).unwrap();
        compliance::run_full_compliance(&SimplePath::new(&grid), grid.npoints());
    }
}
