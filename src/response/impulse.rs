//! Impulse response via partial-fraction expansion
//!
//! Each elementary term maps to a known sequence / time function:
//!
//! - digital `r/(1 − p·z⁻¹)` → `r·pⁿ` for n ≥ 0 (right-sided) or
//!   `−r·pⁿ` for n < 0 (left-sided);
//! - analog `r/(s − p)` → `r·e^{pt}` for t ≥ 0 or `−r·e^{pt}` for t < 0.
//!
//! Which side a pole expands on is the causality policy: `Causal` expands
//! every pole right-sided, even when that diverges. `AntiCausal` is the
//! stable-reconstruction mode: poles outside the stable region switch to
//! the bounded left-sided sequence while stable poles stay right-sided,
//! giving the bounded two-sided response. Poles on the boundary (within
//! tolerance) expand right-sided in both modes.
//!
//! Digital sequences are time-aligned to the z⁻¹ convention: when the
//! zero and pole counts differ, the sequence is the strict zpk inverse
//! advanced by `poles − zeros` samples (matched counts coincide exactly).

use num_complex::Complex64;
use num_traits::Zero;
use serde::Serialize;

use crate::axis::{IndexGrid, SampleGrid, TimeGrid};
use crate::error::{FilterError, Result};
use crate::response::residue::{
    analog_partial_fractions, digital_partial_fractions, PartialFractions,
};
use crate::spec::{Causality, Domain, FilterSpec};

/// One point of an impulse response.
///
/// `time` is a real instant in seconds for analog specs and an
/// integer-valued sample index for digital ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpulseSample {
    pub time: f64,
    pub amplitude: f64,
}

/// Impulse response over a sample grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpulseResponse {
    /// One amplitude per grid point, grid order
    pub samples: Vec<ImpulseSample>,
    /// Weight of the analog Dirac impulse at t = 0, when the zero count
    /// equals the pole count. It has no finite sample representation, so
    /// it is reported instead of silently dropped.
    pub dirac: Option<f64>,
}

/// Compute the impulse response of a spec over a grid.
///
/// The grid kind must match the spec's domain: an [`IndexGrid`] for
/// digital specs, a [`TimeGrid`] for analog ones. Recomputing with the
/// same inputs yields identical output; the engine holds no state.
pub fn impulse_response(spec: &FilterSpec, grid: &SampleGrid) -> Result<ImpulseResponse> {
    spec.validate()?;
    match (spec.domain, grid) {
        (Domain::Digital, SampleGrid::Index(g)) => digital_impulse(spec, g),
        (Domain::Analog, SampleGrid::Time(g)) => analog_impulse(spec, g),
        (Domain::Digital, SampleGrid::Time(_)) => Err(FilterError::InvalidParameter {
            param: "grid".to_string(),
            value: "time grid".to_string(),
            expected: "index grid for a digital spec".to_string(),
        }),
        (Domain::Analog, SampleGrid::Index(_)) => Err(FilterError::InvalidParameter {
            param: "grid".to_string(),
            value: "index grid".to_string(),
            expected: "time grid for an analog spec".to_string(),
        }),
    }
}

/// Which side of the time origin a pole's term occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Right,
    Left,
}

fn term_side(spec: &FilterSpec, pole: Complex64) -> Side {
    match spec.causality {
        Causality::Causal => Side::Right,
        Causality::AntiCausal => {
            if spec.domain.is_stable_pole(pole) {
                Side::Right
            } else {
                Side::Left
            }
        }
    }
}

fn digital_impulse(spec: &FilterSpec, grid: &IndexGrid) -> Result<ImpulseResponse> {
    let pf: PartialFractions = digital_partial_fractions(spec)?;
    let indices = grid.indices()?;

    let sides: Vec<Side> = pf.terms.iter().map(|&(p, _)| term_side(spec, p)).collect();

    let samples = indices
        .iter()
        .map(|&n| {
            let mut acc = Complex64::zero();

            if n >= 0 && (n as usize) < pf.direct.len() {
                acc += pf.direct[n as usize];
            }

            for (&(p, r), &side) in pf.terms.iter().zip(&sides) {
                match side {
                    Side::Right if n >= 0 => acc += r * p.powi(n as i32),
                    Side::Left if n < 0 => acc -= r * p.powi(n as i32),
                    _ => {}
                }
            }

            ImpulseSample {
                time: n as f64,
                amplitude: acc.re,
            }
        })
        .collect();

    Ok(ImpulseResponse {
        samples,
        dirac: None,
    })
}

fn analog_impulse(spec: &FilterSpec, grid: &TimeGrid) -> Result<ImpulseResponse> {
    let pf = analog_partial_fractions(spec)?;
    let times = grid.sample_points()?;

    let sides: Vec<Side> = pf.terms.iter().map(|&(p, _)| term_side(spec, p)).collect();

    let samples = times
        .iter()
        .map(|&t| {
            let mut acc = Complex64::zero();

            for (&(p, r), &side) in pf.terms.iter().zip(&sides) {
                match side {
                    Side::Right if t >= 0.0 => acc += r * (p * t).exp(),
                    Side::Left if t < 0.0 => acc -= r * (p * t).exp(),
                    _ => {}
                }
            }

            ImpulseSample {
                time: t,
                amplitude: acc.re,
            }
        })
        .collect();

    Ok(ImpulseResponse {
        samples,
        dirac: pf.dirac,
    })
}
