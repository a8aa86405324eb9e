//! Benchmark profiles for the Glimmer FDTD engine.
//!
//! Provides pre-built simulation profiles shared by the criterion
//! benches:
//!
//! - [`reference_profile`]: 100x100 cells, dielectric disk, CW source,
//!   PML boundary
//! - [`stress_profile`]: 316x316 cells (~100K), same scene scaled up

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use glimmer_grid::Grid;
use glimmer_materials::{Circle, Component, Pml};
use glimmer_solver::Simulation;
use glimmer_source::{Source, TemporalProfile};

/// Build a reference benchmark profile: 100x100 cells, `n_steps`
/// iterations.
///
/// Scene: a dielectric disk (`epsilon_r = 2.25`) in the middle of a
/// 100 µm vacuum domain, a 1550 nm CW point source on the left, a
/// 10-cell PML band.
pub fn reference_profile(n_steps: usize) -> Simulation {
    scene(100e-6, n_steps)
}

/// Build a stress benchmark profile: 316x316 cells (~100K),
/// `n_steps` iterations.
pub fn stress_profile(n_steps: usize) -> Simulation {
    scene(316e-6, n_steps)
}

fn scene(size: f64, n_steps: usize) -> Simulation {
    let grid = Grid::builder()
        .resolution(1e-6)
        .size_x(size)
        .size_y(size)
        .n_steps(n_steps)
        .build()
        .expect("profile grid is valid");

    let mut simulation = Simulation::new(grid);

    let disk = Component::builder(Circle {
        center: (size / 2.0, size / 2.0),
        radius: size / 8.0,
    })
    .epsilon_r(2.25)
    .build()
    .expect("profile component is valid");
    simulation
        .add_component("disk", disk)
        .expect("first registration of the name");

    let profile = TemporalProfile::from_wavelength(1550e-9, 1.0).expect("valid wavelength");
    let source = Source::point(simulation.grid(), size / 10.0, "center", profile)
        .expect("source inside the domain");
    simulation.add_source(source);

    let pml = Pml::builder()
        .width(10usize)
        .build(simulation.grid())
        .expect("band fits the domain");
    simulation.set_pml(pml);

    simulation
}
