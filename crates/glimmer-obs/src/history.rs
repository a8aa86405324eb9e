//! Write-once record of a field over a whole run.

use glimmer_core::ScalarField;

/// The Ez field at every time step of a run.
///
/// Storage is a single flat buffer of `n_steps · n_x · n_y` values,
/// frame-major: frame `k` occupies `[k · n_x · n_y, (k + 1) · n_x · n_y)`,
/// each frame in the same x-major layout as [`ScalarField`]. Frames
/// are written once by the solver, in step order, and read out by
/// detectors afterwards.
#[derive(Clone, Debug)]
pub struct FieldHistory {
    n_steps: usize,
    n_x: usize,
    n_y: usize,
    data: Vec<f64>,
}

impl FieldHistory {
    /// A zero-initialized history for `n_steps` frames of shape
    /// `(n_x, n_y)`.
    pub fn zeros(n_steps: usize, n_x: usize, n_y: usize) -> Self {
        Self {
            n_steps,
            n_x,
            n_y,
            data: vec![0.0; n_steps * n_x * n_y],
        }
    }

    /// Number of recorded frames.
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// `(n_x, n_y)` shape of each frame.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_x, self.n_y)
    }

    /// Copy `field` into frame `step`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is out of range or `field` has the wrong
    /// shape. Both indicate a solver bug, not a user error.
    pub fn record(&mut self, step: usize, field: &ScalarField) {
        assert!(step < self.n_steps, "frame {step} out of {}", self.n_steps);
        assert_eq!(
            field.shape(),
            (self.n_x, self.n_y),
            "frame shape mismatch"
        );
        let len = self.n_x * self.n_y;
        let start = step * len;
        self.data[start..start + len].copy_from_slice(field.as_slice());
    }

    /// Frame `step` as a flat x-major slice.
    ///
    /// # Panics
    ///
    /// Panics if `step` is out of range.
    pub fn frame(&self, step: usize) -> &[f64] {
        assert!(step < self.n_steps, "frame {step} out of {}", self.n_steps);
        let len = self.n_x * self.n_y;
        &self.data[step * len..(step + 1) * len]
    }

    /// Value at cell `(i, j)` in frame `step`.
    pub fn get(&self, step: usize, i: usize, j: usize) -> f64 {
        self.frame(step)[i * self.n_y + j]
    }

    /// The time series at cell `(i, j)` across all frames.
    pub fn series(&self, i: usize, j: usize) -> Vec<f64> {
        (0..self.n_steps).map(|k| self.get(k, i, j)).collect()
    }

    /// Largest absolute value across all frames.
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0f64, |acc, v| acc.max(v.abs()))
    }
}
