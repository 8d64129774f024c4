//! Benchmark profiles for the Strata spatial layer.
//!
//! Provides pre-built domains for benchmarking:
//!
//! - [`reference_grid`]: 100x100 unit grid (10K locations)
//! - [`reference_cloud`]: 10K scattered points in a 100x100 square
//! - [`stress_cloud`]: 100K scattered points in 3-D
//! - [`warped_grid`]: 100x100 curvilinear grid with stored coordinates

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ndarray::{Array2, ArrayD, IxDyn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strata_domain::{PointSet, RegularGrid, StructuredGrid};

/// 100x100 grid, unit spacing, origin at 0.
pub fn reference_grid() -> RegularGrid<f64> {
    RegularGrid::with_dims(&[100, 100]).unwrap()
}

/// 10K points uniform in `[0, 100)^2`.
///
/// Same density as [`reference_grid`], so equal radii give comparable
/// neighbor counts.
pub fn reference_cloud(seed: u64) -> PointSet<f64> {
    cloud(10_000, 2, 100.0, seed)
}

/// 100K points uniform in `[0, 100)^3`.
pub fn stress_cloud(seed: u64) -> PointSet<f64> {
    cloud(100_000, 3, 100.0, seed)
}

/// 100x100 grid whose rows are bent by a sine wave.
pub fn warped_grid() -> StructuredGrid<f64> {
    let shape = IxDyn(&[100, 100]);
    let x = ArrayD::from_shape_fn(shape.clone(), |ix| ix[0] as f64);
    let y = ArrayD::from_shape_fn(shape, |ix| {
        ix[1] as f64 + 3.0 * (ix[0] as f64 * 0.1).sin()
    });
    StructuredGrid::new(vec![x, y]).unwrap()
}

fn cloud(n: usize, ndims: usize, side: f64, seed: u64) -> PointSet<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let coords = Array2::from_shape_fn((ndims, n), |_| rng.random_range(0.0..side));
    PointSet::new(coords).unwrap()
}
