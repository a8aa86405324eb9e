//! Occupancy stencils: the narrow geometry capability.
//!
//! A [`Stencil`] turns a shape description into a boolean occupancy
//! mask over grid cell coordinates. This is the only contract the rest
//! of the engine depends on; arbitrary-polygon engines can sit behind
//! the same trait without the solver noticing.
//!
//! Centers and dimensions are absolute values in meters. Anchor and
//! percentage positions are resolved to coordinates with
//! [`Grid::resolve`] before a stencil is constructed.

use glimmer_core::{float, BoolMask};
use glimmer_grid::Grid;

/// Boundary tolerance in meters for a stencil on `grid`.
///
/// Stamp coordinates carry the rounding of the derived spacings, so
/// strict comparisons drop cells that sit exactly on a shape edge.
/// A nano-cell of slack admits those cells without ever reaching the
/// next one.
fn boundary_tolerance(grid: &Grid) -> f64 {
    float::CELL_JITTER * grid.dx().max(grid.dy())
}

/// Produces a boolean occupancy mask over grid cell coordinates.
///
/// Implementations must be deterministic: the same stencil on the same
/// grid always yields the same mask.
pub trait Stencil: Send + std::fmt::Debug + 'static {
    /// Cells whose coordinate lies inside the shape.
    fn occupancy(&self, grid: &Grid) -> BoolMask;
}

/// Disk of a given radius around a center point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    /// Center `(x, y)` in meters.
    pub center: (f64, f64),
    /// Radius in meters.
    pub radius: f64,
}

impl Stencil for Circle {
    fn occupancy(&self, grid: &Grid) -> BoolMask {
        let distance = grid.distance_field(self.center.0, self.center.1);
        let bound = self.radius + boundary_tolerance(grid);
        let (n_x, n_y) = grid.shape();
        BoolMask::from_fn(n_x, n_y, |i, j| distance.get(i, j) <= bound)
    }
}

/// Axis-aligned rectangle around a center point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    /// Center `(x, y)` in meters.
    pub center: (f64, f64),
    /// Full extent along x, in meters.
    pub width: f64,
    /// Full extent along y, in meters.
    pub height: f64,
}

impl Rectangle {
    /// Square of the given side length around a center point.
    pub fn square(center: (f64, f64), side_length: f64) -> Self {
        Self {
            center,
            width: side_length,
            height: side_length,
        }
    }
}

impl Stencil for Rectangle {
    fn occupancy(&self, grid: &Grid) -> BoolMask {
        let (cx, cy) = self.center;
        let tol = boundary_tolerance(grid);
        let (hx, hy) = (self.width / 2.0 + tol, self.height / 2.0 + tol);
        let (n_x, n_y) = grid.shape();
        BoolMask::from_fn(n_x, n_y, |i, j| {
            (grid.x_stamp()[i] - cx).abs() <= hx && (grid.y_stamp()[j] - cy).abs() <= hy
        })
    }
}

/// Axis-aligned ellipse around a center point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipse {
    /// Center `(x, y)` in meters.
    pub center: (f64, f64),
    /// Full extent along x, in meters.
    pub width: f64,
    /// Full extent along y, in meters.
    pub height: f64,
}

impl Stencil for Ellipse {
    fn occupancy(&self, grid: &Grid) -> BoolMask {
        let (cx, cy) = self.center;
        let (a, b) = (self.width / 2.0, self.height / 2.0);
        let inv_a2 = 1.0 / (a * a);
        let inv_b2 = 1.0 / (b * b);
        // Compared in normalized-radius form so that a round ellipse
        // admits exactly the cells a circle of the same radius does.
        let bound = 1.0 + boundary_tolerance(grid) / a.min(b);
        let (n_x, n_y) = grid.shape();
        BoolMask::from_fn(n_x, n_y, |i, j| {
            let dx = grid.x_stamp()[i] - cx;
            let dy = grid.y_stamp()[j] - cy;
            (dx * dx * inv_a2 + dy * dy * inv_b2).sqrt() <= bound
        })
    }
}

/// Annulus between two radii around a center point (the ring-resonator
/// shape).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    /// Center `(x, y)` in meters.
    pub center: (f64, f64),
    /// Inner radius in meters (exclusive side of the hole).
    pub inner_radius: f64,
    /// Outer radius in meters.
    pub outer_radius: f64,
}

impl Stencil for Ring {
    fn occupancy(&self, grid: &Grid) -> BoolMask {
        let distance = grid.distance_field(self.center.0, self.center.1);
        let tol = boundary_tolerance(grid);
        let (inner, outer) = (self.inner_radius - tol, self.outer_radius + tol);
        let (n_x, n_y) = grid.shape();
        BoolMask::from_fn(n_x, n_y, |i, j| {
            let r = distance.get(i, j);
            r >= inner && r <= outer
        })
    }
}
