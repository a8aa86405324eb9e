//! Core types for the Glimmer FDTD engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the dense 2D field storage used by every other crate and the
//! physical constants of the vacuum.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod field;
pub mod float;
pub mod physics;

pub use field::{BoolMask, ScalarField};

/// A pair of integer grid indices `(x_index, y_index)`.
pub type Cell = (usize, usize);

/// A set of grid cells addressed by a source or detector.
///
/// Point sources hold a single cell; line sources spill to the heap
/// transparently.
pub type CellSet = smallvec::SmallVec<[Cell; 4]>;
