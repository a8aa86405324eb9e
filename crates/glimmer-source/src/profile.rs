//! Temporal excitation profiles.

use crate::error::SourceError;
use glimmer_core::physics;

/// Time dependence of an excitation source.
#[derive(Clone, Debug, PartialEq)]
pub enum TemporalProfile {
    /// Average of sinusoidal tones:
    /// `(1/N) · Σ A_i · sin(ω_i · (t − δ_i))`.
    ContinuousWave {
        /// Angular frequencies ω_i \[rad/s\].
        omega: Vec<f64>,
        /// Amplitudes A_i.
        amplitude: Vec<f64>,
        /// Per-tone delays δ_i \[s\].
        delay: Vec<f64>,
    },
    /// Gaussian envelope: `A · exp(−((t − δ)/τ)²)`.
    Pulse {
        /// Peak amplitude A.
        amplitude: f64,
        /// Envelope duration τ \[s\].
        duration: f64,
        /// Peak time δ \[s\].
        delay: f64,
    },
}

impl TemporalProfile {
    /// Multi-tone continuous wave from parallel tone arrays.
    ///
    /// # Errors
    ///
    /// [`SourceError::MismatchedTones`] if the arrays differ in
    /// length, [`SourceError::EmptyTones`] if they are empty.
    pub fn continuous_wave(
        omega: Vec<f64>,
        amplitude: Vec<f64>,
        delay: Vec<f64>,
    ) -> Result<Self, SourceError> {
        if omega.len() != amplitude.len() || omega.len() != delay.len() {
            return Err(SourceError::MismatchedTones {
                omega: omega.len(),
                amplitude: amplitude.len(),
                delay: delay.len(),
            });
        }
        if omega.is_empty() {
            return Err(SourceError::EmptyTones);
        }
        Ok(Self::ContinuousWave {
            omega,
            amplitude,
            delay,
        })
    }

    /// Single undelayed tone of angular frequency `omega`.
    pub fn single_tone(omega: f64, amplitude: f64) -> Self {
        Self::ContinuousWave {
            omega: vec![omega],
            amplitude: vec![amplitude],
            delay: vec![0.0],
        }
    }

    /// Single undelayed tone from a vacuum wavelength (`ω = 2πc/λ`).
    ///
    /// # Errors
    ///
    /// [`SourceError::InvalidProfile`] for a non-positive wavelength.
    pub fn from_wavelength(wavelength: f64, amplitude: f64) -> Result<Self, SourceError> {
        if !(wavelength > 0.0) || !wavelength.is_finite() {
            return Err(SourceError::InvalidProfile {
                reason: format!("wavelength must be finite and > 0, got {wavelength}"),
            });
        }
        let omega = 2.0 * std::f64::consts::PI * physics::C / wavelength;
        Ok(Self::single_tone(omega, amplitude))
    }

    /// Gaussian pulse of the given duration, peaking at `delay`.
    ///
    /// # Errors
    ///
    /// [`SourceError::InvalidProfile`] for a non-positive duration.
    pub fn pulse(amplitude: f64, duration: f64, delay: f64) -> Result<Self, SourceError> {
        if !(duration > 0.0) || !duration.is_finite() {
            return Err(SourceError::InvalidProfile {
                reason: format!("duration must be finite and > 0, got {duration}"),
            });
        }
        Ok(Self::Pulse {
            amplitude,
            duration,
            delay,
        })
    }

    /// Excitation value at time `t` \[s\].
    pub fn value_at(&self, t: f64) -> f64 {
        match self {
            Self::ContinuousWave {
                omega,
                amplitude,
                delay,
            } => {
                let sum: f64 = omega
                    .iter()
                    .zip(amplitude)
                    .zip(delay)
                    .map(|((&w, &a), &d)| a * (w * (t - d)).sin())
                    .sum();
                sum / omega.len() as f64
            }
            Self::Pulse {
                amplitude,
                duration,
                delay,
            } => {
                let u = (t - delay) / duration;
                amplitude * (-u * u).exp()
            }
        }
    }
}
