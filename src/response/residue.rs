//! Partial-fraction expansion over simple poles
//!
//! Digital expansion follows the z⁻¹ convention: with `b`/`a` the
//! transfer-function coefficient arrays read as polynomials in w = z⁻¹,
//!
//! ```text
//! H = Σᵢ rᵢ / (1 − pᵢ·w)  +  Σₘ kₘ·wᵐ
//! ```
//!
//! so each residue term inverts to `rᵢ·pᵢⁿ` and each direct term to a
//! delta at n = m. Poles at the z-plane origin vanish from `a(w)` (they
//! are pure delays absorbed by the convention) and never need a residue.
//!
//! Analog expansion is the plain `H(s) = Σᵢ rᵢ/(s − pᵢ) + k` form; an
//! equal root count leaves a Dirac impulse of weight `gain` that has no
//! grid representation and is reported separately.

use num_complex::Complex64;
use num_traits::{One, Zero};

use crate::error::{FilterError, Result};
use crate::math::{poly_div, poly_from_roots};
use crate::spec::FilterSpec;

/// A pole treated as sitting at the z-plane origin (pure delay)
const ORIGIN_TOL: f64 = 1e-12;

/// Expansion of a spec into elementary terms
#[derive(Debug, Clone)]
pub(crate) struct PartialFractions {
    /// `(pole, residue)` per simple pole (z-plane origin poles excluded)
    pub terms: Vec<(Complex64, Complex64)>,
    /// Digital direct terms: `direct[m]` is the weight of δ[n − m]
    pub direct: Vec<Complex64>,
    /// Analog Dirac weight at t = 0, present when zero count == pole count
    pub dirac: Option<f64>,
}

/// Decompose a digital spec in the z⁻¹ convention.
pub(crate) fn digital_partial_fractions(spec: &FilterSpec) -> Result<PartialFractions> {
    if let Some(p) = spec.repeated_pole() {
        return Err(FilterError::unsupported(format!(
            "repeated pole at ({}, {}): higher-order partial fractions are not computed",
            p.re, p.im
        )));
    }

    // Descending-z coefficient arrays are exactly the ascending-w ones.
    let b_w: Vec<Complex64> = poly_from_roots(&spec.zeros)
        .into_iter()
        .map(|c| c * spec.gain)
        .collect();

    let plain_poles: Vec<Complex64> = spec
        .poles
        .iter()
        .copied()
        .filter(|p| p.norm() > ORIGIN_TOL)
        .collect();
    let a_w = poly_from_roots(&plain_poles);

    // Residue of each pole: r = b(1/p) / Π_{k≠i} (1 − pₖ/p)
    let mut terms = Vec::with_capacity(plain_poles.len());
    for (i, &p) in plain_poles.iter().enumerate() {
        let w = p.inv();
        let bval = polyval_ascending(&b_w, w);
        let mut denom = Complex64::one();
        for (k, &q) in plain_poles.iter().enumerate() {
            if k != i {
                denom *= Complex64::one() - q * w;
            }
        }
        terms.push((p, bval / denom));
    }

    // Direct (delta) terms once the numerator degree in w reaches the
    // denominator's: quotient of the long division, ascending in w.
    let deg_b = b_w.len() - 1;
    let deg_a = a_w.len() - 1;
    let direct = if deg_b >= deg_a {
        let b_desc: Vec<Complex64> = b_w.iter().rev().copied().collect();
        let a_desc: Vec<Complex64> = a_w.iter().rev().copied().collect();
        let (quot, _) = poly_div(&b_desc, &a_desc);
        quot.into_iter().rev().collect()
    } else {
        Vec::new()
    };

    Ok(PartialFractions {
        terms,
        direct,
        dirac: None,
    })
}

/// Decompose an analog spec into `Σ rᵢ/(s − pᵢ)` plus an optional Dirac.
pub(crate) fn analog_partial_fractions(spec: &FilterSpec) -> Result<PartialFractions> {
    if let Some(p) = spec.repeated_pole() {
        return Err(FilterError::unsupported(format!(
            "repeated pole at ({}, {}): higher-order partial fractions are not computed",
            p.re, p.im
        )));
    }
    if spec.zeros.len() > spec.poles.len() {
        return Err(FilterError::unsupported(format!(
            "improper transfer function ({} zeros > {} poles): the impulse \
             response contains derivatives of the Dirac impulse",
            spec.zeros.len(),
            spec.poles.len()
        )));
    }

    let mut terms = Vec::with_capacity(spec.poles.len());
    for (i, &p) in spec.poles.iter().enumerate() {
        let num: Complex64 = spec.zeros.iter().map(|&z| p - z).product();
        let mut den = Complex64::one();
        for (k, &q) in spec.poles.iter().enumerate() {
            if k != i {
                den *= p - q;
            }
        }
        terms.push((p, spec.gain * num / den));
    }

    let dirac = if spec.zeros.len() == spec.poles.len() {
        Some(spec.gain)
    } else {
        None
    };

    Ok(PartialFractions {
        terms,
        direct: Vec::new(),
        dirac,
    })
}

/// Horner evaluation of ascending coefficients at `x`
fn polyval_ascending(coeffs: &[Complex64], x: Complex64) -> Complex64 {
    coeffs
        .iter()
        .rev()
        .fold(Complex64::zero(), |acc, &c| acc * x + c)
}
