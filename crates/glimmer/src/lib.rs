//! Glimmer: a 2D FDTD electromagnetic wave simulation engine.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Glimmer sub-crates. For most users, adding `glimmer` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use glimmer::prelude::*;
//!
//! // A 30 µm × 30 µm vacuum domain at 1 µm resolution.
//! let grid = Grid::builder()
//!     .resolution(1e-6)
//!     .size_x(30e-6)
//!     .size_y(30e-6)
//!     .n_steps(200)
//!     .build()
//!     .unwrap();
//!
//! let mut simulation = Simulation::new(grid);
//!
//! // A dielectric disk in the middle of the domain.
//! let lens = Component::builder(Circle {
//!     center: (15e-6, 15e-6),
//!     radius: 5e-6,
//! })
//! .epsilon_r(2.25)
//! .build()
//! .unwrap();
//! simulation.add_component("lens", lens).unwrap();
//!
//! // A continuous-wave point source left of the disk, and a probe
//! // on the far side.
//! let profile = TemporalProfile::from_wavelength(1550e-9, 1.0).unwrap();
//! let source = Source::point(simulation.grid(), 5e-6, "center", profile).unwrap();
//! simulation.add_source(source);
//!
//! let probe = Detector::new(simulation.grid(), 25e-6, "center", DetectorMode::Coherent)
//!     .unwrap();
//! simulation.add_detector("probe", probe).unwrap();
//!
//! // Absorb outgoing waves at the domain edge.
//! let pml = Pml::builder().width(5usize).build(simulation.grid()).unwrap();
//! simulation.set_pml(pml);
//!
//! let output = simulation.run();
//! assert_eq!(output.trace("probe").unwrap().len(), 200);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`fields`] | `glimmer-core` | Physical constants, field storage |
//! | [`grid`] | `glimmer-grid` | Grid, coordinate resolution, rasterization |
//! | [`materials`] | `glimmer-materials` | Stencils, components, PML |
//! | [`source`] | `glimmer-source` | Source geometry and temporal profiles |
//! | [`solver`] | `glimmer-solver` | The simulation object graph and FDTD loop |
//! | [`obs`] | `glimmer-obs` | Field history and detectors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Physical constants and dense field storage (`glimmer-core`).
///
/// [`fields::ScalarField`] and [`fields::BoolMask`] are the storage
/// types every other crate builds on; [`fields::physics`] holds `c`,
/// `ε₀`, and `μ₀`.
pub use glimmer_core as fields;

/// Spatial and temporal discretization (`glimmer-grid`).
///
/// [`grid::Grid`] derives the Courant-limited timestep from the cell
/// size and resolves axis positions (meters, anchors, percentages)
/// into [`grid::Coordinate`]s.
pub use glimmer_grid as grid;

/// Material composition and absorbing boundaries (`glimmer-materials`).
///
/// Shape stencils ([`materials::Circle`], [`materials::Rectangle`],
/// [`materials::Ellipse`], [`materials::Ring`]), material
/// [`materials::Component`]s, and the [`materials::Pml`] boundary.
pub use glimmer_materials as materials;

/// Excitation sources (`glimmer-source`).
///
/// Point and line [`source::Source`]s paired with continuous-wave or
/// pulsed [`source::TemporalProfile`]s.
pub use glimmer_source as source;

/// The FDTD solver (`glimmer-solver`).
///
/// [`solver::Simulation`] collects everything and
/// [`solver::Simulation::run`] executes the leapfrog time loop.
pub use glimmer_solver as solver;

/// Field recording and detectors (`glimmer-obs`).
///
/// [`obs::FieldHistory`] records every Ez frame;
/// [`obs::Detector`] reads a per-cell time series back out.
pub use glimmer_obs as obs;

/// Common imports for typical Glimmer usage.
///
/// ```rust
/// use glimmer::prelude::*;
/// ```
///
/// This imports the most frequently used types: the grid builder,
/// stencils and components, sources and profiles, the simulation, and
/// detectors.
pub mod prelude {
    pub use glimmer_core::{physics, BoolMask, ScalarField};
    pub use glimmer_grid::{Coordinate, Grid};
    pub use glimmer_materials::{
        Circle, Component, Ellipse, MaterialField, Pml, Rectangle, Ring, Stencil,
    };
    pub use glimmer_obs::{Detector, DetectorMode, FieldHistory};
    pub use glimmer_solver::{Simulation, SimulationOutput, SolverError};
    pub use glimmer_source::{Source, SourceGeometry, TemporalProfile};
}
