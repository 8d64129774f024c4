//! Error types for neighborhood and partitioner construction.

use std::error::Error;
use std::fmt;
use strata_core::DomainError;

/// Errors arising from building metrics, indices, neighborhoods or
/// partitioners, or from querying a neighborhood.
#[derive(Clone, Debug, PartialEq)]
pub enum NeighborError {
    /// A radius or tolerance is zero, negative, or not finite.
    InvalidRadius {
        /// The rejected value.
        radius: f64,
    },
    /// A metric's parameters are invalid.
    InvalidMetric {
        /// Description of the problem.
        reason: String,
    },
    /// Index or builder configuration is invalid.
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
    /// A partition direction is zero or not finite.
    InvalidDirection {
        /// Description of the problem.
        reason: String,
    },
    /// The underlying domain rejected a lookup.
    Domain(DomainError),
}

impl fmt::Display for NeighborError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRadius { radius } => {
                write!(f, "radius must be finite and > 0, got {radius}")
            }
            Self::InvalidMetric { reason } => write!(f, "invalid metric: {reason}"),
            Self::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
            Self::InvalidDirection { reason } => write!(f, "invalid direction: {reason}"),
            Self::Domain(e) => write!(f, "domain error: {e}"),
        }
    }
}

impl Error for NeighborError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DomainError> for NeighborError {
    fn from(e: DomainError) -> Self {
        Self::Domain(e)
    }
}
