//! Composition of per-cell material meshes from declared components.

use crate::component::Component;
use glimmer_core::{physics, ScalarField};
use glimmer_grid::Grid;

/// Per-cell permittivity and conductivity meshes composed from an
/// ordered component list.
///
/// Both meshes start from vacuum (`epsilon_r = 1`, `sigma = 0`) and
/// each component ASSIGNS its properties at its occupied cells, in
/// insertion order. Where components overlap, the last writer wins —
/// composition is deterministic and order-sensitive by contract.
///
/// Built once before the time loop; read-only during it.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialField {
    epsilon_r_mesh: ScalarField,
    sigma_mesh: ScalarField,
}

impl MaterialField {
    /// Compose the meshes for `grid` from components in insertion order.
    pub fn compose<'a>(
        grid: &Grid,
        components: impl IntoIterator<Item = &'a Component>,
    ) -> Self {
        let (n_x, n_y) = grid.shape();
        let mut epsilon_r_mesh = ScalarField::filled(n_x, n_y, 1.0);
        let mut sigma_mesh = ScalarField::zeros(n_x, n_y);

        for component in components {
            let mask = component.occupancy(grid);
            for (i, j) in mask.iter_set() {
                epsilon_r_mesh.set(i, j, component.epsilon_r());
                sigma_mesh.set(i, j, component.sigma());
            }
        }

        Self {
            epsilon_r_mesh,
            sigma_mesh,
        }
    }

    /// Relative permittivity mesh (1.0 in vacuum).
    pub fn epsilon_r_mesh(&self) -> &ScalarField {
        &self.epsilon_r_mesh
    }

    /// Conductivity mesh in S/m (0 in vacuum).
    pub fn sigma_mesh(&self) -> &ScalarField {
        &self.sigma_mesh
    }

    /// Absolute permittivity mesh: `epsilon_r_mesh · ε₀`.
    ///
    /// This is the mesh the solver divides `dt` by.
    pub fn epsilon(&self) -> ScalarField {
        let mut epsilon = self.epsilon_r_mesh.clone();
        epsilon.map_inplace(|v| v * physics::EPSILON_0);
        epsilon
    }
}
