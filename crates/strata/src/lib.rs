//! Strata: the spatial layer of a geostatistics toolkit.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Strata sub-crates. For most users, adding `strata` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! // A 50×40 grid of 10 m cells.
//! let grid = RegularGrid::new(&[50, 40], &[0.0, 0.0], &[10.0, 10.0]).unwrap();
//!
//! // Everything within 25 m, searched with a ball tree built once.
//! let hood = BallNeighborhood::new(&grid, 25.0, Euclidean).unwrap();
//!
//! // Visit every cell in a reproducible random order.
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let path = RandomPath::new(&grid, &mut rng);
//!
//! let mut neighbors = Vec::new();
//! let mut largest = 0;
//! for location in &path {
//!     hood.query_into(location, &mut neighbors).unwrap();
//!     largest = largest.max(neighbors.len());
//! }
//! // Interior cells see a 5×5 block minus its 4 corners.
//! assert_eq!(largest, 21);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strata-core` | Coordinate scalar trait, coordinate vectors, `DomainError` |
//! | [`domain`] | `strata-domain` | Domain trait, grids, point sets, data containers, bounding grids |
//! | [`neighbor`] | `strata-neighbor` | Metrics, ball tree, neighborhoods, partitioners |
//! | [`path`] | `strata-path` | Visiting orders |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core scalar types and errors (`strata-core`).
pub use strata_core as types;

/// Domains and named data (`strata-domain`).
///
/// Provides the [`domain::Domain`] trait and its backends:
/// [`domain::RegularGrid`], [`domain::StructuredGrid`] and
/// [`domain::PointSet`], plus [`domain::SpatialData`] and
/// [`domain::bounding_grid`].
pub use strata_domain as domain;

/// Proximity queries (`strata-neighbor`).
///
/// [`neighbor::BallNeighborhood`] answers radius queries over a domain;
/// [`neighbor::BallPartitioner`] and [`neighbor::DirectionPartitioner`] are
/// pairwise grouping predicates.
pub use strata_neighbor as neighbor;

/// Visiting orders (`strata-path`).
pub use strata_path as path;

/// Common imports for typical Strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use strata_core::{CoordScalar, Coords, DomainError};

    // Domains
    pub use strata_domain::{
        bounding_grid, Domain, DomainSource, PointSet, RegularGrid, SpatialData, StructuredGrid,
    };

    // Neighborhoods and partitioners
    pub use strata_neighbor::{
        metric_fn, BallNeighborhood, BallPartitioner, BallTreeConfig, Chebyshev, Cityblock,
        DirectionPartitioner, Ellipsoidal, Euclidean, Metric, Minkowski, NeighborError,
        Neighborhood, Partitioner,
    };

    // Paths
    pub use strata_path::{
        Path, PathError, RandomPath, ShiftedPath, SimplePath, SourcePath,
    };
}
