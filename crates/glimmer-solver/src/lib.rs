//! Time-marching FDTD solver for Glimmer simulations.
//!
//! The [`Simulation`] object graph collects a grid, an ordered
//! component registry, sources, detectors, and an optional absorbing
//! boundary, then [`Simulation::run`] executes the leapfrog update
//! loop and records every Ez frame.
//!
//! All validation happens at registration: once `run` starts, no code
//! path inside the time loop can fail. Runs are single-threaded and
//! deterministic; the same registrations always produce the same
//! history.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod simulation;
pub mod state;

pub use error::SolverError;
pub use simulation::{Simulation, SimulationOutput};
pub use state::FieldState;
