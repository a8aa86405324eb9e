//! Physical constants of the vacuum, in SI base units.
//!
//! All quantities crossing the engine boundary are plain `f64` values
//! in SI units; any unit parsing or conversion happens in adapter
//! layers outside this workspace.

/// Speed of light in vacuum \[m/s\].
pub const C: f64 = 3e8;

/// Permittivity of free space \[F/m\].
pub const EPSILON_0: f64 = 8.854e-12;

/// Permeability of free space \[H/m\].
pub const MU_0: f64 = 4.0 * std::f64::consts::PI * 1e-7;
