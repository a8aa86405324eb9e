//! A placed source: geometry plus temporal profile.

use crate::error::SourceError;
use crate::geometry::SourceGeometry;
use crate::profile::TemporalProfile;
use glimmer_core::{CellSet, ScalarField};
use glimmer_grid::{AxisSpec, Grid};

/// An excitation source resolved against a grid.
///
/// Construction resolves every position immediately, so a source that
/// exists is always inside the grid. The covered cell set is computed
/// once and cached; [`Source::inject`] is allocation-free.
#[derive(Clone, Debug)]
pub struct Source {
    geometry: SourceGeometry,
    profile: TemporalProfile,
    cells: CellSet,
}

impl Source {
    /// A source occupying the single cell at `(x, y)`.
    ///
    /// Positions accept meters, anchors, or percentages, like
    /// [`Grid::resolve`].
    ///
    /// # Errors
    ///
    /// [`SourceError::Position`] if either axis fails to resolve.
    pub fn point(
        grid: &Grid,
        x: impl Into<AxisSpec>,
        y: impl Into<AxisSpec>,
        profile: TemporalProfile,
    ) -> Result<Self, SourceError> {
        let coordinate = grid.resolve(x, y)?;
        let geometry = SourceGeometry::Point(coordinate);
        Ok(Self::from_parts(geometry, profile))
    }

    /// A source occupying the rasterized segment from `(x0, y0)` to
    /// `(x1, y1)`, endpoints included.
    ///
    /// # Errors
    ///
    /// [`SourceError::Position`] if any axis fails to resolve.
    pub fn line(
        grid: &Grid,
        x0: impl Into<AxisSpec>,
        y0: impl Into<AxisSpec>,
        x1: impl Into<AxisSpec>,
        y1: impl Into<AxisSpec>,
        profile: TemporalProfile,
    ) -> Result<Self, SourceError> {
        let start = grid.resolve(x0, y0)?;
        let end = grid.resolve(x1, y1)?;
        let geometry = SourceGeometry::Line { start, end };
        Ok(Self::from_parts(geometry, profile))
    }

    fn from_parts(geometry: SourceGeometry, profile: TemporalProfile) -> Self {
        let cells = geometry.cells();
        Self {
            geometry,
            profile,
            cells,
        }
    }

    /// The spatial footprint of this source.
    pub fn geometry(&self) -> &SourceGeometry {
        &self.geometry
    }

    /// The temporal profile of this source.
    pub fn profile(&self) -> &TemporalProfile {
        &self.profile
    }

    /// Cells this source writes to, in traversal order.
    pub fn cells(&self) -> &CellSet {
        &self.cells
    }

    /// Write the excitation value for time `t` into `field`.
    ///
    /// The value is assigned, not accumulated; see the crate docs for
    /// the overlap policy.
    pub fn inject(&self, field: &mut ScalarField, t: f64) {
        let value = self.profile.value_at(t);
        for &(i, j) in &self.cells {
            field.set(i, j, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glimmer_grid::GridError;

    fn grid() -> Grid {
        Grid::builder()
            .resolution(1e-6)
            .size_x(10e-6)
            .size_y(10e-6)
            .build()
            .unwrap()
    }

    #[test]
    fn point_source_assigns_its_profile_value() {
        let grid = grid();
        let profile = TemporalProfile::single_tone(1e15, 2.0);
        let source = Source::point(&grid, 4e-6, 6e-6, profile.clone()).unwrap();

        let mut field = ScalarField::filled(10, 10, 7.0);
        let t = 3e-16;
        source.inject(&mut field, t);

        assert_eq!(field.get(4, 6), profile.value_at(t));
        // Every other cell is untouched.
        assert_eq!(field.get(0, 0), 7.0);
        assert_eq!(field.get(4, 5), 7.0);
    }

    #[test]
    fn injection_overwrites_rather_than_accumulates() {
        let grid = grid();
        let source =
            Source::point(&grid, "center", "center", TemporalProfile::single_tone(1e15, 1.0))
                .unwrap();
        let (i, j) = source.cells()[0];

        let mut field = ScalarField::zeros(10, 10);
        let t = 5e-16;
        source.inject(&mut field, t);
        let first = field.get(i, j);
        assert_ne!(first, 0.0, "profile value at t is nonzero");
        source.inject(&mut field, t);
        assert_eq!(field.get(i, j), first, "second injection assigns, not adds");
    }

    #[test]
    fn line_source_writes_every_rasterized_cell() {
        let grid = grid();
        let profile = TemporalProfile::pulse(1.0, 1e-15, 0.0).unwrap();
        let source = Source::line(&grid, 0.0, 0.0, 3e-6, 4e-6, profile.clone()).unwrap();

        let mut field = ScalarField::zeros(10, 10);
        source.inject(&mut field, 0.0);

        for &(i, j) in source.cells() {
            assert_eq!(field.get(i, j), profile.value_at(0.0));
        }
        assert_eq!(source.cells().len(), 5);
    }

    #[test]
    fn anchor_positions_resolve_through_the_grid() {
        let grid = grid();
        let source = Source::point(
            &grid,
            "left",
            "top",
            TemporalProfile::single_tone(1e15, 1.0),
        )
        .unwrap();
        assert_eq!(source.cells().as_slice(), &[(0, 9)]);
    }

    #[test]
    fn unknown_anchor_is_a_position_error() {
        let grid = grid();
        let result = Source::point(
            &grid,
            "middle",
            "center",
            TemporalProfile::single_tone(1e15, 1.0),
        );
        assert!(matches!(result, Err(SourceError::Position(GridError::UnknownAnchor { .. }))));
    }
}
