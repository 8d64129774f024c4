//! Named data arrays bound to a domain.

use crate::domain::Domain;
use crate::index;
use indexmap::IndexMap;
use ndarray::{ArrayD, IxDyn};
use smallvec::{smallvec, SmallVec};
use strata_core::DomainError;

/// Anything that carries a domain.
///
/// Implemented by every domain backend (a domain is its own source) and by
/// [`SpatialData`]. Utilities such as [`bounding_grid`](crate::bounding_grid)
/// accept any `DomainSource`.
pub trait DomainSource {
    /// The domain type carried.
    type Domain: Domain;

    /// The carried domain.
    fn domain(&self) -> &Self::Domain;
}

/// A domain paired with named data arrays.
///
/// Every array must have exactly the domain's shape (`Domain::size`); for a
/// point set that is `[npoints]`. Variables keep their insertion order.
///
/// # Examples
///
/// ```
/// use ndarray::ArrayD;
/// use strata_domain::{RegularGrid, SpatialData};
///
/// let grid = RegularGrid::<f64>::with_dims(&[3, 2]).unwrap();
/// let porosity = ArrayD::from_shape_fn(vec![3, 2], |ix| (ix[0] + 10 * ix[1]) as f64);
/// let data = SpatialData::new(grid).with_variable("porosity", porosity).unwrap();
/// // Location 4 is multi-index (1, 2), i.e. array element [0, 1].
/// assert_eq!(*data.value("porosity", 4).unwrap(), 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct SpatialData<D: Domain, V = f64> {
    domain: D,
    variables: IndexMap<String, ArrayD<V>>,
}

impl<D: Domain, V> SpatialData<D, V> {
    /// Wrap a domain with no variables.
    pub fn new(domain: D) -> Self {
        Self {
            domain,
            variables: IndexMap::new(),
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_variable(
        mut self,
        name: impl Into<String>,
        values: ArrayD<V>,
    ) -> Result<Self, DomainError> {
        self.insert(name, values)?;
        Ok(self)
    }

    /// Add or replace a variable.
    ///
    /// Returns the previous array stored under `name`, if any. Fails with
    /// [`DomainError::VariableShape`] if `values` does not have the domain's
    /// shape; the container is left unchanged in that case.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        values: ArrayD<V>,
    ) -> Result<Option<ArrayD<V>>, DomainError> {
        let name = name.into();
        let expected = self.domain.size();
        if values.shape() != expected {
            return Err(DomainError::VariableShape {
                name,
                expected: expected.to_vec(),
                got: values.shape().to_vec(),
            });
        }
        Ok(self.variables.insert(name, values))
    }

    /// The array stored under `name`.
    pub fn get(&self, name: &str) -> Option<&ArrayD<V>> {
        self.variables.get(name)
    }

    /// Value of variable `name` at a 1-based `location`.
    ///
    /// Array elements are matched to locations with the same
    /// first-axis-fastest convention the domain uses.
    pub fn value(&self, name: &str, location: usize) -> Result<&V, DomainError> {
        let values = self
            .variables
            .get(name)
            .ok_or_else(|| DomainError::UnknownVariable {
                name: name.to_string(),
            })?;
        self.domain.check_location(location)?;
        let dims = self.domain.size();
        let mut multi: SmallVec<[usize; 4]> = smallvec![0; dims.len()];
        index::multi_index(dims, location, &mut multi);
        for m in multi.iter_mut() {
            *m -= 1;
        }
        // Shape was validated on insert, so the index is always in bounds.
        values
            .get(IxDyn(&multi))
            .ok_or(DomainError::LocationOutOfRange {
                location,
                npoints: self.domain.npoints(),
            })
    }

    /// Variable names in insertion order.
    pub fn variables(&self) -> impl Iterator<Item = &str> + '_ {
        self.variables.keys().map(String::as_str)
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// `true` if no variables are stored.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Number of locations in the underlying domain.
    pub fn npoints(&self) -> usize {
        self.domain.npoints()
    }

    /// Split into the domain and the variable map.
    pub fn into_parts(self) -> (D, IndexMap<String, ArrayD<V>>) {
        (self.domain, self.variables)
    }
}

impl<D: Domain, V> DomainSource for SpatialData<D, V> {
    type Domain = D;

    fn domain(&self) -> &D {
        &self.domain
    }
}
