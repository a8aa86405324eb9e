//! Error types for material and boundary configuration.

use std::fmt;

/// Errors arising from component or PML construction.
#[derive(Debug, Clone, PartialEq)]
pub enum MaterialError {
    /// A component property is out of its valid range.
    InvalidComponent {
        /// What went wrong.
        reason: String,
    },
    /// A PML parameter is out of its valid range.
    InvalidPml {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for MaterialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidComponent { reason } => write!(f, "invalid component: {reason}"),
            Self::InvalidPml { reason } => write!(f, "invalid PML: {reason}"),
        }
    }
}

impl std::error::Error for MaterialError {}
