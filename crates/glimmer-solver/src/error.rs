//! Error types for simulation assembly.

use glimmer_grid::GridError;
use glimmer_materials::MaterialError;
use glimmer_source::SourceError;
use std::fmt;

/// Errors raised while assembling a simulation.
///
/// Every variant surfaces at registration time; the solver loop
/// itself cannot fail.
#[derive(Debug)]
pub enum SolverError {
    /// A registration name collides with an earlier one.
    DuplicateName {
        /// The registry involved (`"component"` or `"detector"`).
        kind: &'static str,
        /// The colliding name.
        name: String,
    },
    /// A grid-level failure (position resolution).
    Grid(GridError),
    /// A material or boundary configuration failure.
    Material(MaterialError),
    /// A source configuration failure.
    Source(SourceError),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName { kind, name } => {
                write!(f, "{kind} named {name:?} is already registered")
            }
            Self::Grid(err) => write!(f, "grid: {err}"),
            Self::Material(err) => write!(f, "material: {err}"),
            Self::Source(err) => write!(f, "source: {err}"),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DuplicateName { .. } => None,
            Self::Grid(err) => Some(err),
            Self::Material(err) => Some(err),
            Self::Source(err) => Some(err),
        }
    }
}

impl From<GridError> for SolverError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

impl From<MaterialError> for SolverError {
    fn from(err: MaterialError) -> Self {
        Self::Material(err)
    }
}

impl From<SourceError> for SolverError {
    fn from(err: SourceError) -> Self {
        Self::Source(err)
    }
}
