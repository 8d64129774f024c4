//! Visiting orders over Strata domains.
//!
//! A [`Path`] is a restartable sequence of every 1-based location of a
//! domain, each exactly once. Iterative algorithms walk a path and do their
//! per-location work in that order.
//!
//! - [`SimplePath`]: `1, 2, ..., npoints`
//! - [`RandomPath`]: one random permutation, fixed at construction
//! - [`SourcePath`]: chosen seed locations first, then everything else
//! - [`ShiftedPath`]: another path rotated left by an offset

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod path;
pub mod random;
pub mod shifted;
pub mod simple;
pub mod source;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::PathError;
pub use path::Path;
pub use random::RandomPath;
pub use shifted::ShiftedPath;
pub use simple::SimplePath;
pub use source::SourcePath;
