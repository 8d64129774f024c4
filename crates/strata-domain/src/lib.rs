//! Spatial domains for Strata.
//!
//! This crate defines the [`Domain`] trait, the addressable set of
//! locations every neighborhood, path and estimator above it works on,
//! along with the three concrete representations and the utilities that
//! sit directly on top of them.
//!
//! # Backends
//!
//! - [`RegularGrid`]: affine grid, coordinates computed on demand in O(1)
//! - [`StructuredGrid`]: grid topology with explicitly stored (possibly
//!   curvilinear) coordinates
//! - [`PointSet`]: unstructured scattered locations
//!
//! # Conventions
//!
//! Locations are 1-based linear indices in `[1, npoints]`. Grid-shaped
//! domains linearize multi-indices with the first axis varying fastest;
//! see [`index`].
//!
//! # Data
//!
//! [`SpatialData`] pairs a domain with named arrays validated against the
//! domain's shape, and [`bounding_grid`] builds a [`RegularGrid`] spanning
//! any [`DomainSource`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod data;
pub mod domain;
pub mod index;
pub mod pointset;
pub mod regular;
pub mod structured;

#[cfg(test)]
pub(crate) mod compliance;

pub use bounds::bounding_grid;
pub use data::{DomainSource, SpatialData};
pub use domain::Domain;
pub use pointset::PointSet;
pub use regular::RegularGrid;
pub use strata_core::{CoordScalar, Coords, DomainError};
pub use structured::StructuredGrid;
