//! Error types for source construction.

use glimmer_grid::GridError;
use std::fmt;

/// Errors arising from source construction.
///
/// All of these surface before the solver loop starts.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceError {
    /// A source position failed to resolve against the grid.
    Position(GridError),
    /// The tone arrays of a continuous-wave profile differ in length.
    MismatchedTones {
        /// Number of angular frequencies.
        omega: usize,
        /// Number of amplitudes.
        amplitude: usize,
        /// Number of delays.
        delay: usize,
    },
    /// A continuous-wave profile was given no tones at all.
    EmptyTones,
    /// A profile parameter is out of its valid range.
    InvalidProfile {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(err) => write!(f, "source position: {err}"),
            Self::MismatchedTones {
                omega,
                amplitude,
                delay,
            } => write!(
                f,
                "tone arrays differ in length: {omega} omegas, {amplitude} amplitudes, {delay} delays"
            ),
            Self::EmptyTones => write!(f, "continuous-wave profile needs at least one tone"),
            Self::InvalidProfile { reason } => write!(f, "invalid profile: {reason}"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Position(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for SourceError {
    fn from(err: GridError) -> Self {
        Self::Position(err)
    }
}
