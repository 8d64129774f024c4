//! Error types for path construction.

use std::error::Error;
use std::fmt;

/// Errors arising from path construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathError {
    /// A seed location is outside `[1, npoints]`.
    InvalidSeed {
        /// The rejected seed.
        seed: usize,
        /// Number of locations in the domain.
        npoints: usize,
    },
    /// A supplied path covers a different number of locations than the
    /// domain.
    LengthMismatch {
        /// The domain's location count.
        expected: usize,
        /// The supplied path's length.
        got: usize,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSeed { seed, npoints } => {
                write!(f, "seed {seed} out of range [1, {npoints}]")
            }
            Self::LengthMismatch { expected, got } => {
                write!(f, "path covers {got} locations, domain has {expected}")
            }
        }
    }
}

impl Error for PathError {}
