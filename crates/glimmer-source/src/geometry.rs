//! Spatial footprints of excitation sources.

use glimmer_core::CellSet;
use glimmer_grid::{raster::bresenham_line, Coordinate};

/// Where a source deposits energy on the grid.
#[derive(Clone, Debug)]
pub enum SourceGeometry {
    /// A single cell.
    Point(Coordinate),
    /// Every cell on the Bresenham rasterization of a segment,
    /// endpoints included.
    Line {
        /// One endpoint.
        start: Coordinate,
        /// The other endpoint.
        end: Coordinate,
    },
}

impl SourceGeometry {
    /// Grid cells covered by this geometry.
    ///
    /// A point yields exactly its own cell. A line yields the
    /// rasterized segment in traversal order from `start` to `end`;
    /// a degenerate line (both endpoints in the same cell) yields
    /// that single cell once.
    pub fn cells(&self) -> CellSet {
        match self {
            Self::Point(coordinate) => {
                let mut cells = CellSet::new();
                cells.push(coordinate.cell());
                cells
            }
            Self::Line { start, end } => {
                bresenham_line(start.cell(), end.cell()).into_iter().collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glimmer_grid::Grid;

    fn grid() -> Grid {
        Grid::builder()
            .resolution(1e-6)
            .size_x(10e-6)
            .size_y(10e-6)
            .build()
            .unwrap()
    }

    #[test]
    fn point_covers_exactly_its_cell() {
        let grid = grid();
        let coordinate = grid.resolve(3e-6, 7e-6).unwrap();
        let geometry = SourceGeometry::Point(coordinate);
        assert_eq!(geometry.cells().as_slice(), &[(3, 7)]);
    }

    #[test]
    fn line_covers_the_rasterized_segment() {
        let grid = grid();
        let start = grid.resolve(0.0, 0.0).unwrap();
        let end = grid.resolve(3e-6, 4e-6).unwrap();
        let geometry = SourceGeometry::Line { start, end };
        assert_eq!(
            geometry.cells().as_slice(),
            &[(0, 0), (1, 1), (1, 2), (2, 3), (3, 4)]
        );
    }

    #[test]
    fn degenerate_line_is_a_single_cell() {
        let grid = grid();
        let p = grid.resolve(5e-6, 5e-6).unwrap();
        let geometry = SourceGeometry::Line { start: p, end: p };
        assert_eq!(geometry.cells().as_slice(), &[(5, 5)]);
    }
}
