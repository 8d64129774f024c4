//! Proximity queries for Strata domains.
//!
//! - [`Metric`] and its implementations ([`Euclidean`], [`Cityblock`],
//!   [`Chebyshev`], [`Minkowski`], [`Ellipsoidal`], [`metric_fn`])
//! - [`BallTree`]: the spatial index, built once per neighborhood
//! - [`Neighborhood`] / [`BallNeighborhood`]: "which locations lie within
//!   `radius` of this one"
//! - [`Partitioner`] / [`BallPartitioner`] / [`DirectionPartitioner`]:
//!   pairwise grouping predicates with no domain binding

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod balltree;
pub mod error;
pub mod metric;
pub mod neighborhood;
pub mod partition;

#[cfg(test)]
pub(crate) mod compliance;

pub use balltree::{BallTree, BallTreeConfig};
pub use error::NeighborError;
pub use metric::{
    metric_fn, Chebyshev, Cityblock, Ellipsoidal, Euclidean, Metric, MetricFn, Minkowski,
};
pub use neighborhood::{BallNeighborhood, BallNeighborhoodBuilder, Neighborhood};
pub use partition::{BallPartitioner, DirectionPartitioner, Partitioner};
