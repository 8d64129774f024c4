//! Core coordinate types and errors for the Strata spatial layer.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! coordinate element abstraction ([`CoordScalar`]), the small-vector
//! coordinate type ([`Coords`]), and the [`DomainError`] taxonomy shared by
//! every domain backend.
//!
//! Locations are addressed by 1-based `usize` indices in `[1, npoints]`
//! throughout the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod scalar;

pub use error::DomainError;
pub use scalar::{CoordScalar, Coords};
