//! Deterministic point-cloud and grid fixtures.
//!
//! Every generator takes an explicit seed and draws from `ChaCha8Rng`, so
//! a failing property test can be replayed exactly.

use ndarray::{Array2, ArrayD, IxDyn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strata_domain::{PointSet, RegularGrid, StructuredGrid};

/// `n` points drawn uniformly from the cube `[lo, hi)^ndims`.
pub fn uniform_cloud(n: usize, ndims: usize, lo: f64, hi: f64, seed: u64) -> PointSet<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let coords = Array2::from_shape_fn((ndims, n), |_| rng.random_range(lo..hi));
    PointSet::new(coords).expect("uniform cloud is finite")
}

/// `nclusters` tight Gaussian-ish blobs of `per_cluster` points each.
///
/// Cluster centres are uniform in `[0, 100)^ndims`; members are offset by
/// the sum of three uniform draws in `[-spread, spread)` per axis, which is
/// close enough to normal for stressing an index with dense spots.
pub fn clustered_cloud(
    nclusters: usize,
    per_cluster: usize,
    ndims: usize,
    spread: f64,
    seed: u64,
) -> PointSet<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let n = nclusters * per_cluster;
    let mut coords = Array2::zeros((ndims, n));
    for c in 0..nclusters {
        let centre: Vec<f64> = (0..ndims).map(|_| rng.random_range(0.0..100.0)).collect();
        for k in 0..per_cluster {
            let j = c * per_cluster + k;
            for (d, &mu) in centre.iter().enumerate() {
                let jitter: f64 = (0..3).map(|_| rng.random_range(-spread..spread)).sum();
                coords[[d, j]] = mu + jitter;
            }
        }
    }
    PointSet::new(coords).expect("clustered cloud is finite")
}

/// Unit-spaced 2-D lattice with every node displaced by up to `jitter`.
pub fn jittered_lattice(nx: usize, ny: usize, jitter: f64, seed: u64) -> PointSet<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut coords = Array2::zeros((2, nx * ny));
    for y in 0..ny {
        for x in 0..nx {
            let j = x + nx * y;
            coords[[0, j]] = x as f64 + rng.random_range(-jitter..=jitter);
            coords[[1, j]] = y as f64 + rng.random_range(-jitter..=jitter);
        }
    }
    PointSet::new(coords).expect("lattice is finite")
}

/// A unit grid with integer node coordinates, `origin = 0`.
pub fn unit_grid(dims: &[usize]) -> RegularGrid<f64> {
    RegularGrid::with_dims(dims).expect("fixture dims are positive")
}

/// A 2-D curvilinear grid: a quarter annulus with `nr` radial and
/// `ntheta` angular nodes between radii 1 and 2.
pub fn annulus_grid(nr: usize, ntheta: usize) -> StructuredGrid<f64> {
    let dr = if nr > 1 { 1.0 / (nr - 1) as f64 } else { 0.0 };
    let dt = if ntheta > 1 {
        std::f64::consts::FRAC_PI_2 / (ntheta - 1) as f64
    } else {
        0.0
    };
    let x = ArrayD::from_shape_fn(IxDyn(&[nr, ntheta]), |ix| {
        (1.0 + ix[0] as f64 * dr) * (ix[1] as f64 * dt).cos()
    });
    let y = ArrayD::from_shape_fn(IxDyn(&[nr, ntheta]), |ix| {
        (1.0 + ix[0] as f64 * dr) * (ix[1] as f64 * dt).sin()
    });
    StructuredGrid::new(vec![x, y]).expect("annulus axes share a shape")
}
