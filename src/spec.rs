//! Filter specification
//!
//! A [`FilterSpec`] is the complete description of a pole-zero filter: root
//! locations in the complex plane, an overall gain, the domain the roots
//! live in, and how unstable poles should be interpreted when inverting to
//! the time domain. Specs are transient values: the UI layer rebuilds one
//! on every interaction and hands it to the engine, which holds no state
//! between calls.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{FilterError, Result};

/// Tolerance band around the stability boundary. Poles within this band of
/// the unit circle (digital) or the imaginary axis (analog) are treated as
/// marginally stable and always expand right-sided.
pub const BOUNDARY_TOL: f64 = 1e-7;

/// Complex plane the filter roots live in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// Laplace (s) plane; stability boundary is the imaginary axis
    #[default]
    Analog,
    /// Z plane; stability boundary is the unit circle
    Digital,
}

impl Domain {
    /// Whether a pole at `p` is on the stable side of the boundary.
    ///
    /// Poles within [`BOUNDARY_TOL`] of the boundary count as stable here;
    /// they decay too slowly to ever be reconstructed left-sided.
    pub fn is_stable_pole(&self, p: Complex64) -> bool {
        match self {
            Domain::Analog => p.re <= BOUNDARY_TOL,
            Domain::Digital => p.norm() <= 1.0 + BOUNDARY_TOL,
        }
    }
}

/// Time-domain interpretation of the pole set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Causality {
    /// Every partial-fraction term expands right-sided. Poles outside the
    /// stable region produce the divergent causal sequence.
    #[default]
    Causal,
    /// Stable reconstruction: poles outside the stable region expand
    /// left-sided (bounded), stable poles stay right-sided. The summed
    /// two-sided response is bounded whenever no pole sits on the boundary.
    AntiCausal,
}

/// Complete pole-zero filter description
///
/// Repeated roots are meaningful (multiplicity) and are preserved as
/// repeated entries; the engine never deduplicates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Roots of the numerator polynomial, as `[re, im]` pairs in JSON
    #[serde(with = "complex_pairs")]
    pub zeros: Vec<Complex64>,
    /// Roots of the denominator polynomial, as `[re, im]` pairs in JSON
    #[serde(with = "complex_pairs")]
    pub poles: Vec<Complex64>,
    /// Overall real gain applied to the root product
    pub gain: f64,
    pub domain: Domain,
    #[serde(default)]
    pub causality: Causality,
}

impl FilterSpec {
    /// Create an analog (s-plane) spec with causal interpretation
    pub fn analog(zeros: Vec<Complex64>, poles: Vec<Complex64>, gain: f64) -> Self {
        Self {
            zeros,
            poles,
            gain,
            domain: Domain::Analog,
            causality: Causality::Causal,
        }
    }

    /// Create a digital (z-plane) spec with causal interpretation
    pub fn digital(zeros: Vec<Complex64>, poles: Vec<Complex64>, gain: f64) -> Self {
        Self {
            zeros,
            poles,
            gain,
            domain: Domain::Digital,
            causality: Causality::Causal,
        }
    }

    /// Switch the causality mode, consuming self
    pub fn with_causality(mut self, causality: Causality) -> Self {
        self.causality = causality;
        self
    }

    /// Validate gain and root coordinates
    pub fn validate(&self) -> Result<()> {
        if !self.gain.is_finite() {
            return Err(FilterError::invalid_spec(format!(
                "gain must be finite, got {}",
                self.gain
            )));
        }
        for (label, roots) in [("zero", &self.zeros), ("pole", &self.poles)] {
            if let Some(r) = roots.iter().find(|r| !r.re.is_finite() || !r.im.is_finite()) {
                return Err(FilterError::invalid_spec(format!(
                    "{} at ({}, {}) has a non-finite coordinate",
                    label, r.re, r.im
                )));
            }
        }
        Ok(())
    }

    /// Whether every pole lies strictly inside the stable region
    pub fn is_stable(&self) -> bool {
        self.poles.iter().all(|&p| self.domain.is_stable_pole(p))
    }

    /// Numerator degree minus denominator degree
    pub fn relative_degree(&self) -> isize {
        self.zeros.len() as isize - self.poles.len() as isize
    }

    /// Transfer function value at zero frequency.
    ///
    /// Analog: `H(0) = gain · Π(−zᵢ) / Π(−pᵢ)`. Digital: `H(1)` (DC is
    /// `z = e^{j·0} = 1`). A pole at the evaluation point makes this
    /// infinite.
    pub fn dc_gain(&self) -> Complex64 {
        let at = match self.domain {
            Domain::Analog => Complex64::new(0.0, 0.0),
            Domain::Digital => Complex64::new(1.0, 0.0),
        };
        let num: Complex64 = self.zeros.iter().map(|&z| at - z).product();
        let den: Complex64 = self.poles.iter().map(|&p| at - p).product();
        self.gain * num / den
    }

    /// First pair of (approximately) coincident poles, if any.
    ///
    /// Partial-fraction expansion over simple poles cannot handle these;
    /// callers surface them as [`FilterError::UnsupportedConfiguration`].
    pub fn repeated_pole(&self) -> Option<Complex64> {
        for (i, &a) in self.poles.iter().enumerate() {
            for &b in &self.poles[i + 1..] {
                let scale = a.norm().max(1.0);
                if (a - b).norm() < 1e-8 * scale {
                    return Some(a);
                }
            }
        }
        None
    }
}

/// Serde representation of complex vectors as `[[re, im], ...]`, the shape
/// the dashboard keeps in its client-side store.
mod complex_pairs {
    use num_complex::Complex64;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(v: &[Complex64], ser: S) -> Result<S::Ok, S::Error> {
        let pairs: Vec<[f64; 2]> = v.iter().map(|c| [c.re, c.im]).collect();
        pairs.serialize(ser)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<Complex64>, D::Error> {
        let pairs = Vec::<[f64; 2]>::deserialize(de)?;
        Ok(pairs
            .into_iter()
            .map(|[re, im]| Complex64::new(re, im))
            .collect())
    }
}
