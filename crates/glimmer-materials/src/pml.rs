//! Perfectly matched layer: graded conductivity toward domain edges.

use crate::error::MaterialError;
use glimmer_core::ScalarField;
use glimmer_grid::Grid;

/// Width of the PML band along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PmlWidth {
    /// Absolute width in cells.
    Cells(usize),
    /// Fraction of each axis span (`0.1` = 10% of the cell count).
    Fraction(f64),
}

impl From<usize> for PmlWidth {
    fn from(cells: usize) -> Self {
        Self::Cells(cells)
    }
}

impl From<f64> for PmlWidth {
    fn from(fraction: f64) -> Self {
        Self::Fraction(fraction)
    }
}

/// Absorbing boundary with a polynomially graded conductivity profile.
///
/// For a band of width `w` cells, the left-edge profile is
/// `σ_max · ((w − i)/w)^p` for `i < w`, and symmetrically
/// `σ_max · ((i − (n − w − 1))/w)^p` for `i ≥ n − w`; the same grading
/// along y feeds `sigma_y`. Cells strictly inside the interior carry
/// exactly zero, and within a band the profile strictly increases as
/// the edge gets closer.
///
/// Built once per grid; read-only during the time loop.
#[derive(Clone, Debug)]
pub struct Pml {
    sigma_x: ScalarField,
    sigma_y: ScalarField,
    width_x: usize,
    width_y: usize,
}

impl Pml {
    /// Create a new builder with the default profile
    /// (width 10 cells, `sigma_max` 0.045, order 3).
    pub fn builder() -> PmlBuilder {
        PmlBuilder {
            width: PmlWidth::Cells(10),
            sigma_max: 0.045,
            order: 3,
        }
    }

    /// Conductivity profile along x.
    pub fn sigma_x(&self) -> &ScalarField {
        &self.sigma_x
    }

    /// Conductivity profile along y.
    pub fn sigma_y(&self) -> &ScalarField {
        &self.sigma_y
    }

    /// Band width in cells along x.
    pub fn width_x(&self) -> usize {
        self.width_x
    }

    /// Band width in cells along y.
    pub fn width_y(&self) -> usize {
        self.width_y
    }
}

/// Builder for [`Pml`].
pub struct PmlBuilder {
    width: PmlWidth,
    sigma_max: f64,
    order: u32,
}

impl PmlBuilder {
    /// Set the band width (cells or fraction of each axis).
    pub fn width(mut self, width: impl Into<PmlWidth>) -> Self {
        self.width = width.into();
        self
    }

    /// Set the peak conductivity at the domain edge \[S/m\].
    pub fn sigma_max(mut self, sigma_max: f64) -> Self {
        self.sigma_max = sigma_max;
        self
    }

    /// Set the polynomial grading order (default: 3). Must be >= 1.
    pub fn order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    /// Build the conductivity profiles for `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::InvalidPml`] if `sigma_max` is
    /// negative or non-finite, if `order` is zero, if a fractional
    /// width is outside `(0, 0.5)`, or if the band would cover half
    /// an axis or more (no interior would remain).
    pub fn build(self, grid: &Grid) -> Result<Pml, MaterialError> {
        if !(self.sigma_max >= 0.0) || !self.sigma_max.is_finite() {
            return Err(MaterialError::InvalidPml {
                reason: format!("sigma_max must be finite and >= 0, got {}", self.sigma_max),
            });
        }
        if self.order == 0 {
            return Err(MaterialError::InvalidPml {
                reason: "order must be at least 1".to_owned(),
            });
        }

        let width_x = self.axis_width(grid.n_x())?;
        let width_y = self.axis_width(grid.n_y())?;

        let (n_x, n_y) = grid.shape();
        let order = self.order as i32;
        let sigma_max = self.sigma_max;

        let sigma_x = ScalarField::from_fn(n_x, n_y, |i, _| {
            band_profile(i, n_x, width_x, sigma_max, order)
        });
        let sigma_y = ScalarField::from_fn(n_x, n_y, |_, j| {
            band_profile(j, n_y, width_y, sigma_max, order)
        });

        Ok(Pml {
            sigma_x,
            sigma_y,
            width_x,
            width_y,
        })
    }

    /// Resolve the configured width to cells for an axis of `n` cells.
    fn axis_width(&self, n: usize) -> Result<usize, MaterialError> {
        let cells = match self.width {
            PmlWidth::Cells(cells) => cells,
            PmlWidth::Fraction(fraction) => {
                if !(fraction > 0.0 && fraction < 0.5) {
                    return Err(MaterialError::InvalidPml {
                        reason: format!(
                            "fractional width must be in (0, 0.5), got {fraction}"
                        ),
                    });
                }
                (fraction * n as f64) as usize
            }
        };

        if cells == 0 {
            return Err(MaterialError::InvalidPml {
                reason: "band width resolves to zero cells".to_owned(),
            });
        }
        if 2 * cells >= n {
            return Err(MaterialError::InvalidPml {
                reason: format!(
                    "band width {cells} leaves no interior on an axis of {n} cells"
                ),
            });
        }
        Ok(cells)
    }
}

/// Graded conductivity at index `k` on an axis of `n` cells with a
/// band of `width` cells on each side.
fn band_profile(k: usize, n: usize, width: usize, sigma_max: f64, order: i32) -> f64 {
    let w = width as f64;
    if k < width {
        sigma_max * ((w - k as f64) / w).powi(order)
    } else if k >= n - width {
        sigma_max * ((k as f64 - (n - width - 1) as f64) / w).powi(order)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid(n: usize) -> Grid {
        Grid::builder()
            .resolution(1e-6)
            .size_x(n as f64 * 1e-6)
            .size_y(n as f64 * 1e-6)
            .build()
            .unwrap()
    }

    #[test]
    fn interior_is_exactly_zero() {
        let grid = grid(20);
        let pml = Pml::builder().width(4usize).build(&grid).unwrap();
        for i in 4..16 {
            for j in 0..20 {
                assert_eq!(pml.sigma_x().get(i, j), 0.0, "sigma_x interior at {i},{j}");
                assert_eq!(pml.sigma_y().get(j, i), 0.0, "sigma_y interior at {j},{i}");
            }
        }
    }

    #[test]
    fn edges_reach_sigma_max() {
        let grid = grid(20);
        let pml = Pml::builder()
            .width(4usize)
            .sigma_max(0.045)
            .order(3)
            .build(&grid)
            .unwrap();
        assert_eq!(pml.sigma_x().get(0, 10), 0.045);
        assert_eq!(pml.sigma_x().get(19, 10), 0.045);
        assert_eq!(pml.sigma_y().get(10, 0), 0.045);
        assert_eq!(pml.sigma_y().get(10, 19), 0.045);
    }

    #[test]
    fn fractional_width_scales_with_the_axis() {
        let grid = grid(20);
        let pml = Pml::builder().width(0.2).build(&grid).unwrap();
        assert_eq!(pml.width_x(), 4);
        assert_eq!(pml.width_y(), 4);
    }

    #[test]
    fn builder_rejects_band_without_interior() {
        let grid = grid(10);
        let result = Pml::builder().width(5usize).build(&grid);
        assert!(matches!(result, Err(MaterialError::InvalidPml { .. })));
    }

    #[test]
    fn builder_rejects_out_of_range_fraction() {
        let grid = grid(10);
        assert!(Pml::builder().width(0.5).build(&grid).is_err());
        assert!(Pml::builder().width(0.0).build(&grid).is_err());
    }

    #[test]
    fn builder_rejects_zero_order() {
        let grid = grid(10);
        assert!(Pml::builder().width(2usize).order(0).build(&grid).is_err());
    }

    proptest! {
        #[test]
        fn profile_strictly_increases_toward_each_edge(
            n in 8usize..48,
            width_fraction in 1usize..4,
            order in 1u32..5,
        ) {
            let width = (n / (2 * width_fraction + 2)).max(1);
            prop_assume!(2 * width < n);

            let grid = grid(n);
            let pml = Pml::builder()
                .width(width)
                .sigma_max(1.0)
                .order(order)
                .build(&grid)
                .unwrap();

            // Left band: decreasing in i; right band: increasing in i.
            for i in 1..width {
                prop_assert!(pml.sigma_x().get(i, 0) < pml.sigma_x().get(i - 1, 0));
            }
            for i in (n - width + 1)..n {
                prop_assert!(pml.sigma_x().get(i, 0) > pml.sigma_x().get(i - 1, 0));
            }
            // Everything farther than `width` from both edges is zero.
            for i in width..(n - width) {
                prop_assert_eq!(pml.sigma_x().get(i, 0), 0.0);
            }
        }
    }
}
