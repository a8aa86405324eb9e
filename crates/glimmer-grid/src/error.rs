//! Error types for grid construction and coordinate resolution.

use crate::position::Axis;
use std::fmt;

/// Errors arising from grid construction or position parsing.
///
/// All of these surface at setup time, before any simulation step
/// executes.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// A grid parameter is non-positive, non-finite, or yields an
    /// empty grid.
    InvalidParameter {
        /// What went wrong.
        reason: String,
    },
    /// A named position anchor is not in the recognized set for its axis.
    UnknownAnchor {
        /// The axis the anchor was applied to.
        axis: Axis,
        /// The offending anchor string.
        value: String,
    },
    /// A percentage position string did not parse as a number.
    MalformedPercentage {
        /// The offending string.
        value: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { reason } => {
                write!(f, "invalid grid parameter: {reason}")
            }
            Self::UnknownAnchor { axis, value } => {
                write!(
                    f,
                    "unknown {axis}-axis anchor '{value}': valid anchors are [{}]",
                    axis.anchor_names().join(", ")
                )
            }
            Self::MalformedPercentage { value } => {
                write!(f, "malformed percentage position '{value}'")
            }
        }
    }
}

impl std::error::Error for GridError {}
