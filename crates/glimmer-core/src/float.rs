//! Jitter-tolerant cell arithmetic.
//!
//! Grid spacings are derived by division (`dx = size_x / n_x`), so a
//! spacing that is exact in decimal usually sits an ulp away from its
//! ideal binary value, and every stamp coordinate inherits that
//! offset. Decisions made in cell units (indexing a position, testing
//! a shape boundary) must not flip on that rounding: a position
//! written as `3e-6` on a 1 µm grid has to land in cell 3 even when
//! `3e-6 / dx` computes to `2.9999999999999996`.

/// Tolerance for cell-unit decisions, in cells.
///
/// Accumulated stamp rounding stays orders of magnitude below this
/// even on very large grids, while genuine geometric distinctions are
/// at least half a cell.
pub const CELL_JITTER: f64 = 1e-9;

/// Snap a position in cell units to the nearest integer when it is
/// within [`CELL_JITTER`] of it; otherwise return it unchanged.
pub fn snap_cells(cells: f64) -> f64 {
    let nearest = cells.round();
    if (cells - nearest).abs() <= CELL_JITTER {
        nearest
    } else {
        cells
    }
}
