//! Frequency (Bode) response
//!
//! Evaluates the transfer function `H = gain · Π(x − zᵢ) / Π(x − pᵢ)` on
//! the domain's stability boundary: `x = e^{jω}` for digital specs,
//! `x = jω` for analog ones.

use num_complex::Complex64;

use crate::axis::FrequencyAxis;
use crate::error::Result;
use crate::spec::{Domain, FilterSpec};

/// Floor added to the magnitude before taking log10, so an exact null
/// reads as a deep notch instead of −∞ dB.
const MAG_FLOOR: f64 = 1e-15;

/// One point of a frequency sweep.
///
/// Magnitude and phase are always derived from `value`, never stored, so
/// the two views can never disagree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencySample {
    /// Frequency in rad/s (analog) or rad/sample (digital)
    pub frequency: f64,
    /// Complex transfer-function value; infinite when `singular`
    pub value: Complex64,
    /// The sample landed exactly on a pole
    pub singular: bool,
}

impl FrequencySample {
    /// Linear magnitude `|H|`; infinite for singular samples
    pub fn magnitude(&self) -> f64 {
        self.value.norm()
    }

    /// Magnitude in dB: `20·log10(|H| + floor)`
    pub fn magnitude_db(&self) -> f64 {
        20.0 * (self.value.norm() + MAG_FLOOR).log10()
    }

    /// Phase in radians (−π, π]; meaningless for singular samples
    pub fn phase(&self) -> f64 {
        self.value.arg()
    }

    /// Phase in degrees
    pub fn phase_deg(&self) -> f64 {
        self.phase().to_degrees()
    }
}

/// Sweep the transfer function over a frequency axis.
///
/// Produces exactly one sample per axis point, in axis order. A point that
/// coincides with a pole is flagged `singular` (infinite magnitude) and
/// the sweep continues; it is never an error and never a silent NaN.
pub fn frequency_response(spec: &FilterSpec, axis: &FrequencyAxis) -> Result<Vec<FrequencySample>> {
    spec.validate()?;
    let points = axis.sample_points()?;

    let samples = points
        .iter()
        .map(|&w| {
            let x = match spec.domain {
                Domain::Digital => Complex64::from_polar(1.0, w),
                Domain::Analog => Complex64::new(0.0, w),
            };
            evaluate_at(spec, w, x)
        })
        .collect();

    Ok(samples)
}

fn evaluate_at(spec: &FilterSpec, frequency: f64, x: Complex64) -> FrequencySample {
    let num: Complex64 = spec.zeros.iter().map(|&z| x - z).product();
    let den: Complex64 = spec.poles.iter().map(|&p| x - p).product();

    if den.norm() == 0.0 {
        return FrequencySample {
            frequency,
            value: Complex64::new(f64::INFINITY, 0.0),
            singular: true,
        };
    }

    FrequencySample {
        frequency,
        value: spec.gain * num / den,
        singular: false,
    }
}

/// Unwrap the phase of a sweep into a continuous curve (radians).
///
/// Jumps larger than π between neighbouring samples are folded by 2π, the
/// way a Bode plot expects. Singular samples contribute their raw `arg`.
pub fn unwrap_phase(samples: &[FrequencySample]) -> Vec<f64> {
    let mut unwrapped = Vec::with_capacity(samples.len());
    let mut offset = 0.0_f64;
    let mut prev = 0.0_f64;

    for (i, s) in samples.iter().enumerate() {
        let raw = s.phase();
        if i > 0 {
            let delta = raw - prev;
            if delta > std::f64::consts::PI {
                offset -= 2.0 * std::f64::consts::PI;
            } else if delta < -std::f64::consts::PI {
                offset += 2.0 * std::f64::consts::PI;
            }
        }
        prev = raw;
        unwrapped.push(raw + offset);
    }

    unwrapped
}
