//! Point detectors: read a time series out of a recorded run.

use crate::history::FieldHistory;
use glimmer_grid::{AxisSpec, Coordinate, Grid, GridError};

/// How a detector reports the field at its cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetectorMode {
    /// The raw signed field value per step.
    Coherent,
    /// The absolute value of the field per step.
    Magnitude,
}

/// A passive probe at a single grid cell.
///
/// Detectors are placed with the same axis-spec language as sources
/// (meters, anchors, percentages) and read from a [`FieldHistory`]
/// after the run; they never write to the fields.
#[derive(Clone, Debug)]
pub struct Detector {
    coordinate: Coordinate,
    mode: DetectorMode,
}

impl Detector {
    /// A detector at `(x, y)`, resolved against `grid`.
    ///
    /// # Errors
    ///
    /// Propagates the [`GridError`] if either axis fails to resolve.
    pub fn new(
        grid: &Grid,
        x: impl Into<AxisSpec>,
        y: impl Into<AxisSpec>,
        mode: DetectorMode,
    ) -> Result<Self, GridError> {
        let coordinate = grid.resolve(x, y)?;
        Ok(Self { coordinate, mode })
    }

    /// The resolved position of this detector.
    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    /// The reporting mode of this detector.
    pub fn mode(&self) -> DetectorMode {
        self.mode
    }

    /// Extract this detector's time series from a recorded run.
    ///
    /// One value per recorded frame, in step order. In
    /// [`DetectorMode::Magnitude`] each value is the absolute value of
    /// the field sample.
    pub fn sample(&self, history: &FieldHistory) -> Vec<f64> {
        let (i, j) = self.coordinate.cell();
        let series = history.series(i, j);
        match self.mode {
            DetectorMode::Coherent => series,
            DetectorMode::Magnitude => series.into_iter().map(f64::abs).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glimmer_core::ScalarField;
    use proptest::prelude::*;

    fn grid() -> Grid {
        Grid::builder()
            .resolution(1e-6)
            .size_x(10e-6)
            .size_y(10e-6)
            .n_steps(4)
            .build()
            .unwrap()
    }

    fn history_with_series(values: &[f64], cell: (usize, usize)) -> FieldHistory {
        let mut history = FieldHistory::zeros(values.len(), 10, 10);
        for (step, &v) in values.iter().enumerate() {
            let field =
                ScalarField::from_fn(10, 10, |i, j| if (i, j) == cell { v } else { 0.0 });
            history.record(step, &field);
        }
        history
    }

    #[test]
    fn coherent_mode_preserves_sign() {
        let grid = grid();
        let detector = Detector::new(&grid, 3e-6, 7e-6, DetectorMode::Coherent).unwrap();
        let history = history_with_series(&[1.0, -2.0, 0.5, -0.25], (3, 7));
        assert_eq!(detector.sample(&history), vec![1.0, -2.0, 0.5, -0.25]);
    }

    #[test]
    fn magnitude_mode_rectifies() {
        let grid = grid();
        let detector = Detector::new(&grid, 3e-6, 7e-6, DetectorMode::Magnitude).unwrap();
        let history = history_with_series(&[1.0, -2.0, 0.5, -0.25], (3, 7));
        assert_eq!(detector.sample(&history), vec![1.0, 2.0, 0.5, 0.25]);
    }

    #[test]
    fn anchor_placement_resolves_like_sources() {
        let grid = grid();
        let detector = Detector::new(&grid, "center", "top", DetectorMode::Coherent).unwrap();
        assert_eq!(detector.coordinate().cell(), (4, 9));
    }

    #[test]
    fn unknown_anchor_is_rejected() {
        let grid = grid();
        let result = Detector::new(&grid, "nowhere", 0.0, DetectorMode::Coherent);
        assert!(matches!(result, Err(GridError::UnknownAnchor { .. })));
    }

    #[test]
    fn series_length_matches_frame_count() {
        let grid = grid();
        let detector = Detector::new(&grid, 0.0, 0.0, DetectorMode::Coherent).unwrap();
        let history = FieldHistory::zeros(7, 10, 10);
        assert_eq!(detector.sample(&history).len(), 7);
    }

    proptest! {
        #[test]
        fn magnitude_is_elementwise_abs_of_coherent(
            values in prop::collection::vec(-10.0f64..10.0, 1..24),
        ) {
            let grid = grid();
            let history = history_with_series(&values, (3, 7));

            let coherent = Detector::new(&grid, 3e-6, 7e-6, DetectorMode::Coherent)
                .unwrap()
                .sample(&history);
            let magnitude = Detector::new(&grid, 3e-6, 7e-6, DetectorMode::Magnitude)
                .unwrap()
                .sample(&history);

            prop_assert_eq!(coherent.len(), values.len());
            prop_assert_eq!(magnitude.len(), values.len());
            for (c, m) in coherent.iter().zip(&magnitude) {
                prop_assert_eq!(*m, c.abs());
            }
        }
    }
}
