//! Spatial and temporal discretization for Glimmer simulations.
//!
//! This crate defines the [`Grid`] — the immutable discretization every
//! other component is resolved against — along with axis-position
//! parsing (anchors and percentages), [`Coordinate`] resolution, and
//! integer line rasterization for line-shaped sources.
//!
//! The timestep is always derived from the cell size via the Courant
//! stability limit; there is no way to construct a `Grid` with an
//! unstable `dt`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod position;
pub mod raster;

pub use error::GridError;
pub use grid::{Grid, GridBuilder};
pub use position::{Axis, AxisSpec, Coordinate};
pub use raster::bresenham_line;
