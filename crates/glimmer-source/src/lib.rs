//! Excitation sources for Glimmer simulations.
//!
//! A [`Source`] is composition, not a hierarchy: a spatial
//! [`SourceGeometry`] (point or rasterized line) paired with a
//! [`TemporalProfile`] (multi-tone continuous wave or Gaussian pulse).
//! Any geometry combines with any profile.
//!
//! # Injection policy
//!
//! `inject` ASSIGNS the profile value at every cell of the source's
//! index set — it does not accumulate onto the existing field. When
//! several sources share a cell, the last-registered source wins.
//! This keeps multi-source runs deterministic at the cost of
//! superposition at shared cells; sources that must interfere should
//! occupy distinct cells.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod geometry;
pub mod profile;
pub mod source;

pub use error::SourceError;
pub use geometry::SourceGeometry;
pub use profile::TemporalProfile;
pub use source::Source;
