//! Material composition and absorbing boundaries.
//!
//! Declared geometry enters the solver through exactly one contract:
//! the boolean occupancy mask produced by a [`Stencil`]. Components
//! pair a stencil with material properties; [`MaterialField`] composes
//! the per-cell permittivity and conductivity meshes from an ordered
//! component list; [`Pml`] grades conductivity toward the domain edges
//! to absorb outgoing waves.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod component;
pub mod error;
pub mod material;
pub mod pml;
pub mod stencil;

pub use component::{Component, ComponentBuilder};
pub use error::MaterialError;
pub use material::MaterialField;
pub use pml::{Pml, PmlBuilder, PmlWidth};
pub use stencil::{Circle, Ellipse, Rectangle, Ring, Stencil};
