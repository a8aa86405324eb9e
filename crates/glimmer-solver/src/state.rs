//! Mutable field state for one run.

use glimmer_core::ScalarField;
use glimmer_grid::Grid;

/// The three mutable Yee-lattice fields of a TM-polarized run.
///
/// `Hx` and `Hy` live on staggered half-step positions relative to
/// `Ez`; the stagger is carried implicitly by which cells each update
/// touches, not by separate array shapes. All three fields share the
/// grid's `(n_x, n_y)` shape and start at zero.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldState {
    /// Magnetic field x-component.
    pub hx: ScalarField,
    /// Magnetic field y-component.
    pub hy: ScalarField,
    /// Electric field z-component.
    pub ez: ScalarField,
}

impl FieldState {
    /// Zero-initialized state for `grid`.
    pub fn zeros(grid: &Grid) -> Self {
        let (n_x, n_y) = grid.shape();
        Self {
            hx: ScalarField::zeros(n_x, n_y),
            hy: ScalarField::zeros(n_x, n_y),
            ez: ScalarField::zeros(n_x, n_y),
        }
    }
}
