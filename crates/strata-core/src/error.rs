//! Error types for domain construction and coordinate lookup.

use std::error::Error;
use std::fmt;

/// Errors arising from domain construction or coordinate queries.
///
/// Construction-time variants are returned eagerly by constructors; once a
/// domain exists it is internally consistent, and the only query-time
/// failures are [`LocationOutOfRange`](Self::LocationOutOfRange) and
/// [`DimensionMismatch`](Self::DimensionMismatch) for caller-supplied
/// buffers.
#[derive(Clone, Debug, PartialEq)]
pub enum DomainError {
    /// A domain was requested with zero spatial dimensions.
    ZeroDimensional,
    /// A grid axis has zero nodes.
    EmptyAxis {
        /// Offending axis (0-based).
        axis: usize,
    },
    /// A grid spacing is zero, negative, or not finite.
    InvalidSpacing {
        /// Offending axis (0-based).
        axis: usize,
        /// The rejected spacing.
        spacing: f64,
    },
    /// A coordinate value is NaN or infinite where a finite value is required.
    NonFiniteCoordinate {
        /// Which input carried the value (e.g. `"origin"`).
        what: &'static str,
        /// Offending axis (0-based).
        axis: usize,
    },
    /// Two per-axis inputs disagree on length.
    DimensionMismatch {
        /// Which input was checked.
        what: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },
    /// Per-axis coordinate arrays or a coordinate matrix have the wrong shape.
    ShapeMismatch {
        /// Expected shape.
        expected: Vec<usize>,
        /// Actual shape.
        got: Vec<usize>,
    },
    /// A 1-based location outside `[1, npoints]`.
    LocationOutOfRange {
        /// The requested location.
        location: usize,
        /// Number of addressable locations in the domain.
        npoints: usize,
    },
    /// A start/finish pair cannot produce a valid grid axis.
    InvalidExtent {
        /// Offending axis (0-based).
        axis: usize,
        /// Lower corner on that axis.
        start: f64,
        /// Upper corner on that axis.
        finish: f64,
    },
    /// The product of grid dimensions overflows `usize`.
    TooLarge {
        /// The requested grid dimensions.
        dims: Vec<usize>,
    },
    /// Bounds were requested for a source with no locations.
    EmptySource,
    /// A data variable name is not present in a container.
    UnknownVariable {
        /// The requested name.
        name: String,
    },
    /// A data variable does not match the shape of its domain.
    VariableShape {
        /// Variable name.
        name: String,
        /// Shape of the domain (`Domain::size`).
        expected: Vec<usize>,
        /// Shape of the rejected array.
        got: Vec<usize>,
    },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimensional => write!(f, "domain must have at least one dimension"),
            Self::EmptyAxis { axis } => write!(f, "axis {axis} has zero nodes"),
            Self::InvalidSpacing { axis, spacing } => {
                write!(f, "spacing on axis {axis} must be finite and > 0, got {spacing}")
            }
            Self::NonFiniteCoordinate { what, axis } => {
                write!(f, "{what} is not finite on axis {axis}")
            }
            Self::DimensionMismatch {
                what,
                expected,
                got,
            } => {
                write!(f, "{what}: expected {expected} components, got {got}")
            }
            Self::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {expected:?}, got {got:?}")
            }
            Self::LocationOutOfRange { location, npoints } => {
                write!(f, "location {location} out of range [1, {npoints}]")
            }
            Self::InvalidExtent {
                axis,
                start,
                finish,
            } => {
                write!(
                    f,
                    "invalid extent on axis {axis}: start {start}, finish {finish}"
                )
            }
            Self::TooLarge { dims } => {
                write!(f, "grid dimensions {dims:?} overflow the addressable range")
            }
            Self::EmptySource => write!(f, "cannot compute bounds of an empty source"),
            Self::UnknownVariable { name } => write!(f, "unknown variable '{name}'"),
            Self::VariableShape {
                name,
                expected,
                got,
            } => {
                write!(
                    f,
                    "variable '{name}' has shape {got:?}, domain has shape {expected:?}"
                )
            }
        }
    }
}

impl Error for DomainError {}
