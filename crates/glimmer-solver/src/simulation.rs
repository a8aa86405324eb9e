//! The simulation object graph and the leapfrog update loop.

use indexmap::IndexMap;

use glimmer_core::{physics, BoolMask, ScalarField};
use glimmer_grid::Grid;
use glimmer_materials::{Component, MaterialField, Pml};
use glimmer_obs::{Detector, FieldHistory};
use glimmer_source::Source;

use crate::error::SolverError;
use crate::state::FieldState;

/// A configured simulation, ready to run.
///
/// Components and detectors are registered under unique names in an
/// insertion-ordered registry; material composition and source
/// injection both depend on that order (last writer wins at overlaps).
/// Sources are an ordered list. The PML is optional; without one the
/// domain boundary reflects.
///
/// Registration validates everything up front. [`Simulation::run`]
/// itself cannot fail.
#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    components: IndexMap<String, Component>,
    sources: Vec<Source>,
    detectors: IndexMap<String, Detector>,
    pml: Option<Pml>,
}

impl Simulation {
    /// An empty simulation over `grid`: vacuum everywhere, no
    /// sources, no detectors, reflecting boundary.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            components: IndexMap::new(),
            sources: Vec::new(),
            detectors: IndexMap::new(),
            pml: None,
        }
    }

    /// The grid this simulation runs on.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Register a material component under `name`.
    ///
    /// Registration order is the composition order: where components
    /// overlap, the last-registered one's properties win.
    ///
    /// # Errors
    ///
    /// [`SolverError::DuplicateName`] if `name` is already taken.
    pub fn add_component(
        &mut self,
        name: impl Into<String>,
        component: Component,
    ) -> Result<&mut Self, SolverError> {
        let name = name.into();
        if self.components.contains_key(&name) {
            return Err(SolverError::DuplicateName {
                kind: "component",
                name,
            });
        }
        self.components.insert(name, component);
        Ok(self)
    }

    /// Register an excitation source.
    ///
    /// Sources inject in registration order each step; at shared
    /// cells the last-registered source's value stands.
    pub fn add_source(&mut self, source: Source) -> &mut Self {
        self.sources.push(source);
        self
    }

    /// Register a detector under `name`.
    ///
    /// # Errors
    ///
    /// [`SolverError::DuplicateName`] if `name` is already taken.
    pub fn add_detector(
        &mut self,
        name: impl Into<String>,
        detector: Detector,
    ) -> Result<&mut Self, SolverError> {
        let name = name.into();
        if self.detectors.contains_key(&name) {
            return Err(SolverError::DuplicateName {
                kind: "detector",
                name,
            });
        }
        self.detectors.insert(name, detector);
        Ok(self)
    }

    /// Attach an absorbing boundary.
    pub fn set_pml(&mut self, pml: Pml) -> &mut Self {
        self.pml = Some(pml);
        self
    }

    /// Execute the time loop and record every Ez frame.
    ///
    /// Per step `k` at `t = k·dt`, in this order: update `Hx`/`Hy`
    /// from the staggered Ez differences, update Ez on the
    /// one-cell-inset interior from the H curl, damp Ez by the
    /// absorption factor, apply each nonlinear component's
    /// correction, inject every source, and record the frame.
    pub fn run(&self) -> SimulationOutput {
        let (n_x, n_y) = self.grid.shape();
        let dx = self.grid.dx();
        let dy = self.grid.dy();
        let dt = self.grid.dt();

        let material = MaterialField::compose(&self.grid, self.components.values());
        let epsilon = material.epsilon();
        let (sigma_x, sigma_y) = self.conductivity_meshes(&material);

        // Absorption factor is time-invariant; fold it once.
        let damping = ScalarField::from_fn(n_x, n_y, |i, j| {
            let total = sigma_x.get(i, j) + sigma_y.get(i, j);
            (1.0 - total * dt / epsilon.get(i, j) / 2.0).clamp(0.0, 1.0)
        });

        // Occupancy masks for nonlinear components, in registration
        // order.
        let nonlinear: Vec<(&Component, BoolMask)> = self
            .components
            .values()
            .filter(|c| c.chi2().is_some())
            .map(|c| (c, c.occupancy(&self.grid)))
            .collect();

        let mu_factor = dt / physics::MU_0;
        let mut state = FieldState::zeros(&self.grid);
        let mut history = FieldHistory::zeros(self.grid.n_steps(), n_x, n_y);

        for (k, &t) in self.grid.time_stamp().iter().enumerate() {
            // Hx from the forward y-difference of Ez.
            for i in 0..n_x {
                for j in 0..n_y - 1 {
                    let d_ez_dy = (state.ez.get(i, j + 1) - state.ez.get(i, j)) / dy;
                    let loss = 1.0 - sigma_y.get(i, j) * mu_factor / 2.0;
                    let hx = state.hx.get(i, j) - mu_factor * d_ez_dy * loss;
                    state.hx.set(i, j, hx);
                }
            }

            // Hy from the forward x-difference of Ez.
            for i in 0..n_x - 1 {
                for j in 0..n_y {
                    let d_ez_dx = (state.ez.get(i + 1, j) - state.ez.get(i, j)) / dx;
                    let loss = 1.0 - sigma_x.get(i, j) * mu_factor / 2.0;
                    let hy = state.hy.get(i, j) + mu_factor * d_ez_dx * loss;
                    state.hy.set(i, j, hy);
                }
            }

            // Ez from the H curl, interior only; the boundary ring
            // stays fixed and the PML bands absorb what reaches them.
            for i in 1..n_x - 1 {
                for j in 1..n_y - 1 {
                    let d_hy_dx = (state.hy.get(i, j) - state.hy.get(i - 1, j)) / dx;
                    let d_hx_dy = (state.hx.get(i, j) - state.hx.get(i, j - 1)) / dy;
                    let ez = state.ez.get(i, j)
                        + dt / epsilon.get(i, j) * (d_hy_dx - d_hx_dy);
                    state.ez.set(i, j, ez);
                }
            }

            // Conductive and boundary damping, everywhere.
            for i in 0..n_x {
                for j in 0..n_y {
                    let ez = state.ez.get(i, j) * damping.get(i, j);
                    state.ez.set(i, j, ez);
                }
            }

            for (component, mask) in &nonlinear {
                state.ez = component.nonlinear_correction(&state.ez, mask, dt);
            }

            for source in &self.sources {
                source.inject(&mut state.ez, t);
            }

            history.record(k, &state.ez);
        }

        let traces = self
            .detectors
            .iter()
            .map(|(name, detector)| (name.clone(), detector.sample(&history)))
            .collect();

        SimulationOutput { history, traces }
    }

    /// Total conductivity meshes: the PML grading (zero without one)
    /// plus the material conductivity, merged into both axes.
    fn conductivity_meshes(&self, material: &MaterialField) -> (ScalarField, ScalarField) {
        let (n_x, n_y) = self.grid.shape();
        let (mut sigma_x, mut sigma_y) = match &self.pml {
            Some(pml) => (pml.sigma_x().clone(), pml.sigma_y().clone()),
            None => (ScalarField::zeros(n_x, n_y), ScalarField::zeros(n_x, n_y)),
        };

        for i in 0..n_x {
            for j in 0..n_y {
                let sigma = material.sigma_mesh().get(i, j);
                if sigma != 0.0 {
                    sigma_x.set(i, j, sigma_x.get(i, j) + sigma);
                    sigma_y.set(i, j, sigma_y.get(i, j) + sigma);
                }
            }
        }
        (sigma_x, sigma_y)
    }
}

/// Everything a run produces: the full Ez record and the per-detector
/// time series.
#[derive(Clone, Debug)]
pub struct SimulationOutput {
    history: FieldHistory,
    traces: IndexMap<String, Vec<f64>>,
}

impl SimulationOutput {
    /// The recorded Ez field, one frame per step.
    pub fn history(&self) -> &FieldHistory {
        &self.history
    }

    /// All detector traces, in registration order.
    pub fn traces(&self) -> &IndexMap<String, Vec<f64>> {
        &self.traces
    }

    /// The trace of the detector registered under `name`, if any.
    pub fn trace(&self, name: &str) -> Option<&[f64]> {
        self.traces.get(name).map(Vec::as_slice)
    }
}
