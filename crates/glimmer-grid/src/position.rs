//! Axis-position specifications and resolved coordinates.
//!
//! Positions along an axis may be given as an absolute value in
//! meters, a named anchor (`left`/`center`/`right` for x,
//! `bottom`/`center`/`top` for y), or a percentage of the axis span
//! (`"25%"`). Labels are parsed at resolve time; an unknown anchor is
//! a [`GridError`](crate::GridError) raised before any simulation
//! step runs.

use std::fmt;

/// A grid axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl Axis {
    /// The named anchors recognized on this axis, ordered from the
    /// low end of the axis to the high end.
    pub fn anchor_names(&self) -> [&'static str; 3] {
        match self {
            Self::X => ["left", "center", "right"],
            Self::Y => ["bottom", "center", "top"],
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

/// A position along one axis, prior to resolution against a grid.
#[derive(Clone, Debug, PartialEq)]
pub enum AxisSpec {
    /// Absolute position in meters.
    Value(f64),
    /// A named anchor or percentage string, parsed per axis at
    /// resolve time.
    Label(String),
}

impl From<f64> for AxisSpec {
    fn from(v: f64) -> Self {
        Self::Value(v)
    }
}

impl From<&str> for AxisSpec {
    fn from(v: &str) -> Self {
        Self::Label(v.to_owned())
    }
}

impl From<String> for AxisSpec {
    fn from(v: String) -> Self {
        Self::Label(v)
    }
}

/// A position resolved against a grid: physical coordinates plus the
/// integer cell indices they fall in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    /// x position in meters, clipped to the grid span.
    pub x: f64,
    /// y position in meters, clipped to the grid span.
    pub y: f64,
    /// Cell index along x, in `[0, n_x)`.
    pub x_index: usize,
    /// Cell index along y, in `[0, n_y)`.
    pub y_index: usize,
}

impl Coordinate {
    /// The `(x_index, y_index)` cell this coordinate falls in.
    pub fn cell(&self) -> (usize, usize) {
        (self.x_index, self.y_index)
    }
}
