//! The simulation [`Grid`] and its builder.

use crate::error::GridError;
use crate::position::{Axis, AxisSpec, Coordinate};
use glimmer_core::{float, physics};
use glimmer_core::ScalarField;

/// Immutable 2D discretization of the simulation domain.
///
/// Holds the cell counts and spacings, the Courant-derived timestep,
/// and precomputed coordinate arrays. Constructed via
/// [`Grid::builder`]; immutable afterwards.
///
/// # Stability
///
/// `dt` is always `1 / (c · sqrt(1/dx² + 1/dy²))` — the Courant limit
/// for the 2D leapfrog update. It is derived, never user-supplied, so
/// an unstable timestep cannot be configured.
#[derive(Clone, Debug)]
pub struct Grid {
    n_x: usize,
    n_y: usize,
    dx: f64,
    dy: f64,
    dt: f64,
    n_steps: usize,
    x_stamp: Vec<f64>,
    y_stamp: Vec<f64>,
    time_stamp: Vec<f64>,
}

impl Grid {
    /// Create a new builder for configuring a `Grid`.
    pub fn builder() -> GridBuilder {
        GridBuilder {
            resolution: None,
            size_x: None,
            size_y: None,
            n_steps: 200,
        }
    }

    /// Number of cells along x.
    pub fn n_x(&self) -> usize {
        self.n_x
    }

    /// Number of cells along y.
    pub fn n_y(&self) -> usize {
        self.n_y
    }

    /// `(n_x, n_y)` shape tuple.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_x, self.n_y)
    }

    /// Cell size along x in meters.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Cell size along y in meters.
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Timestep in seconds (Courant limit).
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of time steps in a run.
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Cell-center x coordinates, `x_stamp[i] = i · dx`.
    pub fn x_stamp(&self) -> &[f64] {
        &self.x_stamp
    }

    /// Cell-center y coordinates, `y_stamp[j] = j · dy`.
    pub fn y_stamp(&self) -> &[f64] {
        &self.y_stamp
    }

    /// Simulation times, `time_stamp[k] = k · dt`.
    pub fn time_stamp(&self) -> &[f64] {
        &self.time_stamp
    }

    /// Euclidean distance from `(x0, y0)` to every cell coordinate.
    ///
    /// Circular stencils are carved out of this field with a single
    /// radius comparison.
    pub fn distance_field(&self, x0: f64, y0: f64) -> ScalarField {
        ScalarField::from_fn(self.n_x, self.n_y, |i, j| {
            let dx = self.x_stamp[i] - x0;
            let dy = self.y_stamp[j] - y0;
            (dx * dx + dy * dy).sqrt()
        })
    }

    /// Resolve a pair of axis specs into a [`Coordinate`].
    ///
    /// Accepts absolute values, named anchors, or percentage strings
    /// per axis. Values are clipped to the domain span before
    /// indexing.
    ///
    /// # Errors
    ///
    /// [`GridError::UnknownAnchor`] for an anchor outside the
    /// recognized set, [`GridError::MalformedPercentage`] for a
    /// percentage that does not parse. Both surface here, at setup
    /// time, never during the solver loop.
    pub fn resolve(
        &self,
        x: impl Into<AxisSpec>,
        y: impl Into<AxisSpec>,
    ) -> Result<Coordinate, GridError> {
        let x = self.parse_axis(x.into(), Axis::X)?;
        let y = self.parse_axis(y.into(), Axis::Y)?;

        let (x, x_index) = Self::clip_and_index(x, self.dx, self.n_x);
        let (y, y_index) = Self::clip_and_index(y, self.dy, self.n_y);

        Ok(Coordinate {
            x,
            y,
            x_index,
            y_index,
        })
    }

    /// Clip `value` to `[0, (n-1)·d]` and compute its cell index.
    ///
    /// The cell-unit position snaps onto the nearest integer within
    /// [`float::CELL_JITTER`] before flooring, so a position sitting
    /// exactly on a cell coordinate lands in that cell even though
    /// `d` is a derived (rounded) spacing.
    fn clip_and_index(value: f64, d: f64, n: usize) -> (f64, usize) {
        let span = (n - 1) as f64 * d;
        let value = value.clamp(0.0, span);
        let index = (float::snap_cells(value / d) as usize).min(n - 1);
        (value, index)
    }

    /// Turn an axis spec into an absolute position in meters.
    fn parse_axis(&self, spec: AxisSpec, axis: Axis) -> Result<f64, GridError> {
        let label = match spec {
            AxisSpec::Value(v) => return Ok(v),
            AxisSpec::Label(label) => label.to_lowercase(),
        };

        let (stamp, span) = match axis {
            Axis::X => (&self.x_stamp, (self.n_x - 1) as f64 * self.dx),
            Axis::Y => (&self.y_stamp, (self.n_y - 1) as f64 * self.dy),
        };

        if let Some(percent) = label.strip_suffix('%') {
            let fraction = percent
                .trim()
                .parse::<f64>()
                .map_err(|_| GridError::MalformedPercentage {
                    value: label.clone(),
                })?
                / 100.0;
            return Ok(fraction * span);
        }

        let [low, center, high] = axis.anchor_names();
        if label == low {
            Ok(stamp[0])
        } else if label == center {
            Ok(span / 2.0)
        } else if label == high {
            Ok(*stamp.last().unwrap_or(&0.0))
        } else {
            Err(GridError::UnknownAnchor { axis, value: label })
        }
    }
}

/// Builder for [`Grid`].
///
/// Required fields: `resolution`, `size_x`, and `size_y`.
pub struct GridBuilder {
    resolution: Option<f64>,
    size_x: Option<f64>,
    size_y: Option<f64>,
    n_steps: usize,
}

impl GridBuilder {
    /// Set the spatial resolution in meters per cell.
    pub fn resolution(mut self, resolution: f64) -> Self {
        self.resolution = Some(resolution);
        self
    }

    /// Set the domain size along x, in meters.
    pub fn size_x(mut self, size_x: f64) -> Self {
        self.size_x = Some(size_x);
        self
    }

    /// Set the domain size along y, in meters.
    pub fn size_y(mut self, size_y: f64) -> Self {
        self.size_y = Some(size_y);
        self
    }

    /// Set the number of time steps (default: 200).
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = n_steps;
        self
    }

    /// Build the grid, validating all configuration.
    ///
    /// Cell counts are `size / resolution` truncated toward zero; the
    /// actual spacings `dx`, `dy` are recomputed from the counts so
    /// that the domain size is matched exactly.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidParameter`] if resolution or either
    /// size is missing, non-finite, or non-positive, if either axis
    /// resolves to zero cells, or if `n_steps` is zero.
    pub fn build(self) -> Result<Grid, GridError> {
        let resolution = self.require("resolution", self.resolution)?;
        let size_x = self.require("size_x", self.size_x)?;
        let size_y = self.require("size_y", self.size_y)?;

        if self.n_steps == 0 {
            return Err(GridError::InvalidParameter {
                reason: "n_steps must be at least 1".to_owned(),
            });
        }

        let n_x = (size_x / resolution) as usize;
        let n_y = (size_y / resolution) as usize;
        if n_x == 0 || n_y == 0 {
            return Err(GridError::InvalidParameter {
                reason: format!(
                    "domain {size_x}x{size_y} m is smaller than one cell at resolution {resolution} m"
                ),
            });
        }

        let dx = size_x / n_x as f64;
        let dy = size_y / n_y as f64;
        let dt = 1.0 / (physics::C * (1.0 / (dx * dx) + 1.0 / (dy * dy)).sqrt());

        let x_stamp = (0..n_x).map(|i| i as f64 * dx).collect();
        let y_stamp = (0..n_y).map(|j| j as f64 * dy).collect();
        let time_stamp = (0..self.n_steps).map(|k| k as f64 * dt).collect();

        Ok(Grid {
            n_x,
            n_y,
            dx,
            dy,
            dt,
            n_steps: self.n_steps,
            x_stamp,
            y_stamp,
            time_stamp,
        })
    }

    fn require(&self, name: &str, value: Option<f64>) -> Result<f64, GridError> {
        let value = value.ok_or_else(|| GridError::InvalidParameter {
            reason: format!("{name} is required"),
        })?;
        if !(value > 0.0) || !value.is_finite() {
            return Err(GridError::InvalidParameter {
                reason: format!("{name} must be finite and > 0, got {value}"),
            });
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn micro_grid() -> Grid {
        Grid::builder()
            .resolution(1e-6)
            .size_x(10e-6)
            .size_y(10e-6)
            .n_steps(50)
            .build()
            .unwrap()
    }

    // ---------------------------------------------------------------
    // Builder tests
    // ---------------------------------------------------------------

    #[test]
    fn reference_discretization() {
        let grid = micro_grid();
        assert_eq!(grid.shape(), (10, 10));
        assert!((grid.dx() - 1e-6).abs() < 1e-18);
        assert!((grid.dy() - 1e-6).abs() < 1e-18);
        assert!(
            (grid.dt() - 2.357e-15).abs() < 1e-17,
            "dt should be ~2.357 fs, got {}",
            grid.dt()
        );
    }

    #[test]
    fn builder_rejects_missing_resolution() {
        let result = Grid::builder().size_x(1e-6).size_y(1e-6).build();
        assert!(result.is_err());
    }

    #[test]
    fn builder_rejects_negative_size() {
        let result = Grid::builder()
            .resolution(1e-6)
            .size_x(-1e-6)
            .size_y(1e-6)
            .build();
        assert!(matches!(result, Err(GridError::InvalidParameter { .. })));
    }

    #[test]
    fn builder_rejects_subcell_domain() {
        let result = Grid::builder()
            .resolution(1e-6)
            .size_x(0.5e-6)
            .size_y(10e-6)
            .build();
        assert!(matches!(result, Err(GridError::InvalidParameter { .. })));
    }

    #[test]
    fn builder_rejects_zero_steps() {
        let result = Grid::builder()
            .resolution(1e-6)
            .size_x(10e-6)
            .size_y(10e-6)
            .n_steps(0)
            .build();
        assert!(matches!(result, Err(GridError::InvalidParameter { .. })));
    }

    #[test]
    fn stamps_have_expected_lengths() {
        let grid = micro_grid();
        assert_eq!(grid.x_stamp().len(), 10);
        assert_eq!(grid.y_stamp().len(), 10);
        assert_eq!(grid.time_stamp().len(), 50);
        assert_eq!(grid.time_stamp()[1], grid.dt());
    }

    // ---------------------------------------------------------------
    // Coordinate resolution
    // ---------------------------------------------------------------

    #[test]
    fn anchors_resolve_to_domain_extremes() {
        let grid = micro_grid();
        let lo = grid.resolve("left", "bottom").unwrap();
        assert_eq!(lo.cell(), (0, 0));
        assert_eq!(lo.x, 0.0);

        let hi = grid.resolve("right", "top").unwrap();
        assert_eq!(hi.cell(), (9, 9));
        assert!((hi.x - 9e-6).abs() < 1e-18);

        let mid = grid.resolve("center", "center").unwrap();
        assert_eq!(mid.cell(), (4, 4));
    }

    #[test]
    fn anchors_are_case_insensitive() {
        let grid = micro_grid();
        let c = grid.resolve("Center", "TOP").unwrap();
        assert_eq!(c.cell(), (4, 9));
    }

    #[test]
    fn percentage_positions_span_the_axis() {
        let grid = micro_grid();
        let p = grid.resolve("0%", "100%").unwrap();
        assert_eq!(p.cell(), (0, 9));
        let half = grid.resolve("50%", "50%").unwrap();
        assert_eq!(half.cell(), (4, 4));
    }

    #[test]
    fn unknown_anchor_is_rejected_per_axis() {
        let grid = micro_grid();
        // 'top' is a y anchor, not an x anchor.
        let err = grid.resolve("top", 0.0).unwrap_err();
        assert!(matches!(err, GridError::UnknownAnchor { axis: Axis::X, .. }));
        let err = grid.resolve(0.0, "left").unwrap_err();
        assert!(matches!(err, GridError::UnknownAnchor { axis: Axis::Y, .. }));
    }

    #[test]
    fn malformed_percentage_is_rejected() {
        let grid = micro_grid();
        let err = grid.resolve("abc%", 0.0).unwrap_err();
        assert!(matches!(err, GridError::MalformedPercentage { .. }));
    }

    #[test]
    fn out_of_domain_values_clip() {
        let grid = micro_grid();
        let c = grid.resolve(1.0, -1.0).unwrap();
        assert_eq!(c.cell(), (9, 0));
        assert!((c.x - 9e-6).abs() < 1e-18);
        assert_eq!(c.y, 0.0);
    }

    #[test]
    fn cell_coordinates_resolve_to_their_own_cell() {
        // dx is a derived spacing (10e-6 / 10 is not exactly 1e-6 in
        // binary); decimal-exact positions must still index their
        // nominal cell rather than truncate into the one below.
        let grid = micro_grid();
        for i in 0..10 {
            for j in 0..10 {
                let c = grid.resolve(i as f64 * 1e-6, j as f64 * 1e-6).unwrap();
                assert_eq!(c.cell(), (i, j), "position ({i} µm, {j} µm)");
            }
        }
    }

    // ---------------------------------------------------------------
    // Distance field
    // ---------------------------------------------------------------

    #[test]
    fn distance_field_is_zero_at_origin_cell() {
        let grid = micro_grid();
        let dist = grid.distance_field(3e-6, 4e-6);
        // Stamp coordinates carry derived-spacing rounding, so the
        // origin cell is zero only up to that jitter.
        assert!(dist.get(3, 4) < 1e-18, "got {}", dist.get(3, 4));
        assert!((dist.get(0, 0) - 5e-6).abs() < 1e-18);
    }

    // ---------------------------------------------------------------
    // Courant bound
    // ---------------------------------------------------------------

    proptest! {
        #[test]
        fn dt_always_sits_on_the_courant_limit(
            resolution in 1e-8f64..1e-5,
            cells_x in 2usize..64,
            cells_y in 2usize..64,
            n_steps in 1usize..32,
        ) {
            let grid = Grid::builder()
                .resolution(resolution)
                .size_x(resolution * cells_x as f64)
                .size_y(resolution * cells_y as f64)
                .n_steps(n_steps)
                .build()
                .unwrap();

            let bound = 1.0
                / (glimmer_core::physics::C
                    * (1.0 / (grid.dx() * grid.dx()) + 1.0 / (grid.dy() * grid.dy())).sqrt());
            prop_assert!((grid.dt() - bound).abs() <= f64::EPSILON * bound);
        }

        #[test]
        fn stamp_positions_resolve_to_their_own_cell(
            resolution in 1e-8f64..1e-5,
            cells_x in 2usize..48,
            cells_y in 2usize..48,
        ) {
            let grid = Grid::builder()
                .resolution(resolution)
                .size_x(resolution * cells_x as f64)
                .size_y(resolution * cells_y as f64)
                .build()
                .unwrap();

            for i in 0..grid.n_x() {
                let c = grid.resolve(grid.x_stamp()[i], 0.0).unwrap();
                prop_assert_eq!(c.x_index, i);
            }
            for j in 0..grid.n_y() {
                let c = grid.resolve(0.0, grid.y_stamp()[j]).unwrap();
                prop_assert_eq!(c.y_index, j);
            }
        }
    }
}
