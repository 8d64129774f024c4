//! Radius neighborhoods over a domain.

use std::fmt;
use strata_core::{CoordScalar, DomainError};
use strata_domain::Domain;
use tracing::debug;

use crate::balltree::{BallTree, BallTreeConfig};
use crate::error::NeighborError;
use crate::metric::{Euclidean, Metric};

/// "Which locations are near this one?"
///
/// Implementations are bound to one domain and answer with 1-based
/// locations of that domain.
pub trait Neighborhood {
    /// The domain queried.
    type Domain: Domain + ?Sized;

    /// The domain this neighborhood was built over.
    fn domain(&self) -> &Self::Domain;

    /// Replace the contents of `out` with the neighbors of `location`.
    ///
    /// The result always contains `location` itself. Order is unspecified.
    fn query_into(&self, location: usize, out: &mut Vec<usize>) -> Result<(), NeighborError>;

    /// Allocating form of [`query_into`](Self::query_into).
    fn query(&self, location: usize) -> Result<Vec<usize>, NeighborError> {
        let mut out = Vec::new();
        self.query_into(location, &mut out)?;
        Ok(out)
    }

    /// Whether two coordinate vectors are neighbors under this
    /// neighborhood's rule. Independent of any index.
    fn is_neighbor(
        &self,
        x: &[<Self::Domain as Domain>::Scalar],
        y: &[<Self::Domain as Domain>::Scalar],
    ) -> bool;
}

/// Reject radii that are zero, negative, NaN or infinite.
pub(crate) fn check_radius<T: CoordScalar>(radius: T) -> Result<(), NeighborError> {
    if !radius.is_finite() || radius <= T::zero() {
        return Err(NeighborError::InvalidRadius {
            radius: radius.as_f64(),
        });
    }
    Ok(())
}

/// All locations within `radius` of the query under a metric.
///
/// Builds a [`BallTree`] over the domain's coordinates once at construction
/// and answers every query from it. The domain is borrowed, not owned, and
/// must outlive the neighborhood. The radius has the domain's coordinate
/// type.
///
/// # Examples
///
/// ```
/// use strata_domain::RegularGrid;
/// use strata_neighbor::{BallNeighborhood, Chebyshev, Neighborhood};
///
/// let grid = RegularGrid::<f64>::with_dims(&[5, 5]).unwrap();
/// let hood = BallNeighborhood::new(&grid, 1.0, Chebyshev).unwrap();
/// // Centre of the grid plus its 8 surrounding nodes.
/// assert_eq!(hood.query(13).unwrap().len(), 9);
/// // Corner.
/// assert_eq!(hood.query(1).unwrap().len(), 4);
/// ```
pub struct BallNeighborhood<'d, D: Domain + ?Sized, M = Euclidean> {
    domain: &'d D,
    radius: D::Scalar,
    metric: M,
    tree: BallTree<D::Scalar>,
}

impl<'d, D: Domain + ?Sized> BallNeighborhood<'d, D, Euclidean> {
    /// Start configuring a neighborhood over `domain`.
    ///
    /// The radius is required; the metric defaults to [`Euclidean`] and
    /// the index to [`BallTreeConfig::default`].
    pub fn builder(domain: &'d D) -> BallNeighborhoodBuilder<'d, D, Euclidean> {
        BallNeighborhoodBuilder {
            domain,
            radius: None,
            metric: Euclidean,
            config: BallTreeConfig::default(),
        }
    }
}

impl<'d, D, M> BallNeighborhood<'d, D, M>
where
    D: Domain + ?Sized,
    M: Metric<D::Scalar>,
{
    /// Build a neighborhood with the default index configuration.
    ///
    /// Returns `Err` if `radius` is not finite and positive, or if `metric`
    /// is bound to a different dimensionality than `domain`.
    pub fn new(domain: &'d D, radius: D::Scalar, metric: M) -> Result<Self, NeighborError> {
        Self::with_config(domain, radius, metric, &BallTreeConfig::default())
    }

    /// Build a neighborhood with an explicit index configuration.
    pub fn with_config(
        domain: &'d D,
        radius: D::Scalar,
        metric: M,
        config: &BallTreeConfig,
    ) -> Result<Self, NeighborError> {
        check_radius(radius)?;
        if let Some(n) = metric.ndims() {
            if n != domain.ndims() {
                return Err(NeighborError::InvalidMetric {
                    reason: format!(
                        "metric is {n}-dimensional, domain is {}-dimensional",
                        domain.ndims()
                    ),
                });
            }
        }
        let coords = domain.coordinate_matrix();
        let tree = BallTree::build(coords.view(), &metric, config)?;
        debug!(
            npoints = tree.len(),
            ndims = tree.ndims(),
            nodes = tree.node_count(),
            leaf_size = config.leaf_size,
            radius = radius.as_f64(),
            "built ball neighborhood"
        );
        Ok(Self {
            domain,
            radius,
            metric,
            tree,
        })
    }

    /// The query radius.
    pub fn radius(&self) -> D::Scalar {
        self.radius
    }

    /// The metric.
    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// The underlying index.
    pub fn tree(&self) -> &BallTree<D::Scalar> {
        &self.tree
    }

    /// Replace the contents of `out` with every location within the radius
    /// of an arbitrary point, which need not be a domain location.
    pub fn query_coords_into(
        &self,
        coords: &[D::Scalar],
        out: &mut Vec<usize>,
    ) -> Result<(), NeighborError> {
        let ndims = self.domain.ndims();
        if coords.len() != ndims {
            return Err(DomainError::DimensionMismatch {
                what: "query point",
                expected: ndims,
                got: coords.len(),
            }
            .into());
        }
        out.clear();
        self.tree.within(coords, self.radius, &self.metric, out);
        for location in out.iter_mut() {
            *location += 1;
        }
        Ok(())
    }

    /// Allocating form of [`query_coords_into`](Self::query_coords_into).
    pub fn query_coords(&self, coords: &[D::Scalar]) -> Result<Vec<usize>, NeighborError> {
        let mut out = Vec::new();
        self.query_coords_into(coords, &mut out)?;
        Ok(out)
    }
}

impl<D, M> Neighborhood for BallNeighborhood<'_, D, M>
where
    D: Domain + ?Sized,
    M: Metric<D::Scalar>,
{
    type Domain = D;

    fn domain(&self) -> &D {
        self.domain
    }

    fn query_into(&self, location: usize, out: &mut Vec<usize>) -> Result<(), NeighborError> {
        let coords = self.domain.coordinates(location)?;
        self.query_coords_into(&coords, out)
    }

    fn is_neighbor(&self, x: &[D::Scalar], y: &[D::Scalar]) -> bool {
        self.metric.distance(x, y) <= self.radius
    }
}

impl<D, M> fmt::Debug for BallNeighborhood<'_, D, M>
where
    D: Domain + ?Sized,
    M: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BallNeighborhood")
            .field("npoints", &self.domain.npoints())
            .field("radius", &self.radius)
            .field("metric", &self.metric)
            .field("nodes", &self.tree.node_count())
            .finish()
    }
}

/// Builder for [`BallNeighborhood`].
///
/// Required field: `radius`.
pub struct BallNeighborhoodBuilder<'d, D: Domain + ?Sized, M = Euclidean> {
    domain: &'d D,
    radius: Option<D::Scalar>,
    metric: M,
    config: BallTreeConfig,
}

impl<'d, D: Domain + ?Sized, M> BallNeighborhoodBuilder<'d, D, M> {
    /// Set the query radius. Must be finite and > 0.
    pub fn radius(mut self, radius: D::Scalar) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Set the metric (default: [`Euclidean`]).
    pub fn metric<M2>(self, metric: M2) -> BallNeighborhoodBuilder<'d, D, M2> {
        BallNeighborhoodBuilder {
            domain: self.domain,
            radius: self.radius,
            metric,
            config: self.config,
        }
    }

    /// Set the ball tree leaf size (default: 16). Must be >= 1.
    pub fn leaf_size(mut self, leaf_size: usize) -> Self {
        self.config.leaf_size = leaf_size;
        self
    }

    /// Replace the whole index configuration.
    pub fn config(mut self, config: BallTreeConfig) -> Self {
        self.config = config;
        self
    }
}

impl<'d, D, M> BallNeighborhoodBuilder<'d, D, M>
where
    D: Domain + ?Sized,
    M: Metric<D::Scalar>,
{
    /// Build the neighborhood, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `radius` is not set, or is not finite and positive
    /// - the metric's dimensionality differs from the domain's
    /// - `leaf_size` is zero
    pub fn build(self) -> Result<BallNeighborhood<'d, D, M>, NeighborError> {
        let radius = self.radius.ok_or_else(|| NeighborError::InvalidConfig {
            reason: "radius is required".to_string(),
        })?;
        BallNeighborhood::with_config(self.domain, radius, self.metric, &self.config)
    }
}
