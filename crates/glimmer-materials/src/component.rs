//! Material components: a stencil plus electromagnetic properties.

use crate::error::MaterialError;
use crate::stencil::Stencil;
use glimmer_core::{physics, BoolMask, ScalarField};
use glimmer_grid::Grid;

/// A declared material region: occupancy stencil, relative
/// permittivity, conductivity, and an optional quadratic nonlinear
/// susceptibility.
///
/// Components are registered in order; where two overlap, the
/// later-registered component's properties win (last-writer-wins,
/// see [`MaterialField`](crate::MaterialField)).
#[derive(Debug)]
pub struct Component {
    stencil: Box<dyn Stencil>,
    epsilon_r: f64,
    sigma: f64,
    chi2: Option<f64>,
}

impl Component {
    /// Create a new builder around a stencil.
    pub fn builder(stencil: impl Stencil) -> ComponentBuilder {
        ComponentBuilder {
            stencil: Box::new(stencil),
            epsilon_r: None,
            sigma: 0.0,
            chi2: None,
        }
    }

    /// Relative permittivity inside the stencil.
    pub fn epsilon_r(&self) -> f64 {
        self.epsilon_r
    }

    /// Conductivity inside the stencil \[S/m\].
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Quadratic susceptibility, if this component is nonlinear.
    pub fn chi2(&self) -> Option<f64> {
        self.chi2
    }

    /// Cells occupied by this component on the given grid.
    pub fn occupancy(&self, grid: &Grid) -> BoolMask {
        self.stencil.occupancy(grid)
    }

    /// Apply this component's quadratic polarization term to a field.
    ///
    /// Pure: the input is not mutated; the corrected field is
    /// returned and must be reassigned by the caller. For a linear
    /// component (`chi2` unset) the input is returned unchanged.
    ///
    /// The correction adds `dt²/(ε_r·ε₀·μ₀) · χ₂ · Ez²` at occupied
    /// cells.
    pub fn nonlinear_correction(
        &self,
        field: &ScalarField,
        mask: &BoolMask,
        dt: f64,
    ) -> ScalarField {
        let Some(chi2) = self.chi2 else {
            return field.clone();
        };

        let scale = dt * dt / (self.epsilon_r * physics::EPSILON_0 * physics::MU_0) * chi2;
        let (n_x, n_y) = field.shape();
        ScalarField::from_fn(n_x, n_y, |i, j| {
            let e = field.get(i, j);
            if mask.get(i, j) {
                e + scale * e * e
            } else {
                e
            }
        })
    }
}

/// Builder for [`Component`].
///
/// Required field: `epsilon_r`.
pub struct ComponentBuilder {
    stencil: Box<dyn Stencil>,
    epsilon_r: Option<f64>,
    sigma: f64,
    chi2: Option<f64>,
}

impl ComponentBuilder {
    /// Set the relative permittivity (must be >= 1).
    pub fn epsilon_r(mut self, epsilon_r: f64) -> Self {
        self.epsilon_r = Some(epsilon_r);
        self
    }

    /// Set the conductivity in S/m (default: 0, lossless).
    pub fn sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    /// Set the quadratic nonlinear susceptibility.
    pub fn chi2(mut self, chi2: f64) -> Self {
        self.chi2 = Some(chi2);
        self
    }

    /// Build the component, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::InvalidComponent`] if `epsilon_r` is
    /// missing, below 1, or non-finite, if `sigma` is negative or
    /// non-finite, or if `chi2` is non-finite.
    pub fn build(self) -> Result<Component, MaterialError> {
        let epsilon_r = self
            .epsilon_r
            .ok_or_else(|| MaterialError::InvalidComponent {
                reason: "epsilon_r is required".to_owned(),
            })?;

        if !(epsilon_r >= 1.0) || !epsilon_r.is_finite() {
            return Err(MaterialError::InvalidComponent {
                reason: format!("epsilon_r must be finite and >= 1, got {epsilon_r}"),
            });
        }
        if !(self.sigma >= 0.0) || !self.sigma.is_finite() {
            return Err(MaterialError::InvalidComponent {
                reason: format!("sigma must be finite and >= 0, got {}", self.sigma),
            });
        }
        if let Some(chi2) = self.chi2 {
            if !chi2.is_finite() {
                return Err(MaterialError::InvalidComponent {
                    reason: format!("chi2 must be finite, got {chi2}"),
                });
            }
        }

        Ok(Component {
            stencil: self.stencil,
            epsilon_r,
            sigma: self.sigma,
            chi2: self.chi2,
        })
    }
}
