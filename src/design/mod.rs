//! Classical IIR filter design
//!
//! Produces a [`FilterSpec`] from a family/band/order description the way
//! the interactive designer drives it: a normalized analog lowpass
//! prototype, a spectral transform to the requested band edges, and (for
//! digital filters) a prewarped bilinear transform onto the z plane.

mod prototype;
mod transform;

use serde::{Deserialize, Serialize};

use crate::error::{FilterError, Result};
use crate::spec::{Causality, Domain, FilterSpec};

use num_complex::Complex64;

/// Highest supported design order
pub const MAX_DESIGN_ORDER: usize = 20;

/// Default Chebyshev I passband ripple (dB)
pub const DEFAULT_PASSBAND_RIPPLE_DB: f64 = 1.0;

/// Default Chebyshev II stopband attenuation (dB)
pub const DEFAULT_STOPBAND_ATTEN_DB: f64 = 40.0;

/// Intermediate zero-pole-gain triple used by the design pipeline
#[derive(Debug, Clone)]
pub(crate) struct Zpk {
    pub zeros: Vec<Complex64>,
    pub poles: Vec<Complex64>,
    pub gain: f64,
}

/// Filter approximation family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterFamily {
    /// Maximally flat passband
    #[default]
    Butterworth,
    /// Equiripple passband, monotone stopband
    ChebyshevI,
    /// Monotone passband, equiripple stopband
    ChebyshevII,
    /// Maximally flat group delay
    Bessel,
}

/// Frequency band shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandType {
    #[default]
    Lowpass,
    Highpass,
    Bandpass,
    Bandstop,
}

impl BandType {
    fn needs_two_cutoffs(&self) -> bool {
        matches!(self, BandType::Bandpass | BandType::Bandstop)
    }
}

/// Everything needed to design one filter
///
/// Cutoffs are rad/s for analog designs and fractions of Nyquist (0..1)
/// for digital ones; out-of-range digital cutoffs are clamped to
/// `[1e-6, 0.999]` rather than rejected, matching the interactive
/// designer. `cutoff2` is only read for bandpass/bandstop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignParams {
    pub family: FilterFamily,
    pub band: BandType,
    pub order: usize,
    pub domain: Domain,
    pub cutoff1: f64,
    #[serde(default)]
    pub cutoff2: Option<f64>,
    /// Chebyshev I passband ripple in dB
    #[serde(default = "default_ripple")]
    pub passband_ripple_db: f64,
    /// Chebyshev II stopband attenuation in dB
    #[serde(default = "default_atten")]
    pub stopband_atten_db: f64,
}

fn default_ripple() -> f64 {
    DEFAULT_PASSBAND_RIPPLE_DB
}

fn default_atten() -> f64 {
    DEFAULT_STOPBAND_ATTEN_DB
}

impl DesignParams {
    /// Lowpass constructor with the ripple defaults
    pub fn lowpass(family: FilterFamily, order: usize, domain: Domain, cutoff: f64) -> Self {
        Self {
            family,
            band: BandType::Lowpass,
            order,
            domain,
            cutoff1: cutoff,
            cutoff2: None,
            passband_ripple_db: DEFAULT_PASSBAND_RIPPLE_DB,
            stopband_atten_db: DEFAULT_STOPBAND_ATTEN_DB,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.order == 0 || self.order > MAX_DESIGN_ORDER {
            return Err(FilterError::InvalidParameter {
                param: "order".to_string(),
                value: self.order.to_string(),
                expected: format!("1 to {MAX_DESIGN_ORDER}"),
            });
        }
        for (name, c) in [("cutoff1", Some(self.cutoff1)), ("cutoff2", self.cutoff2)] {
            if let Some(c) = c {
                if !c.is_finite() || c <= 0.0 {
                    return Err(FilterError::InvalidParameter {
                        param: name.to_string(),
                        value: c.to_string(),
                        expected: "a finite positive frequency".to_string(),
                    });
                }
            }
        }
        if self.family == FilterFamily::ChebyshevI && self.passband_ripple_db <= 0.0 {
            return Err(FilterError::InvalidParameter {
                param: "passband_ripple_db".to_string(),
                value: self.passband_ripple_db.to_string(),
                expected: "a positive ripple".to_string(),
            });
        }
        if self.family == FilterFamily::ChebyshevII && self.stopband_atten_db <= 0.0 {
            return Err(FilterError::InvalidParameter {
                param: "stopband_atten_db".to_string(),
                value: self.stopband_atten_db.to_string(),
                expected: "a positive attenuation".to_string(),
            });
        }
        Ok(())
    }
}

/// Design a filter and return its pole-zero-gain spec.
pub fn design(params: &DesignParams) -> Result<FilterSpec> {
    params.validate()?;

    let proto = match params.family {
        FilterFamily::Butterworth => prototype::butterworth(params.order),
        FilterFamily::ChebyshevI => {
            prototype::chebyshev1(params.order, params.passband_ripple_db)
        }
        FilterFamily::ChebyshevII => {
            prototype::chebyshev2(params.order, params.stopband_atten_db)
        }
        FilterFamily::Bessel => prototype::bessel(params.order),
    };

    // Band edges in analog rad/s; digital cutoffs are clamped the way the
    // interactive designer does, then prewarped for the bilinear step.
    const DIGITAL_FS: f64 = 2.0;
    let warp = |c: f64| -> f64 {
        match params.domain {
            Domain::Analog => c.max(1e-6),
            Domain::Digital => {
                let c = c.clamp(1e-6, 0.999);
                2.0 * DIGITAL_FS * (std::f64::consts::PI * c / DIGITAL_FS).tan()
            }
        }
    };

    let w1 = warp(params.cutoff1);
    let banded = if params.band.needs_two_cutoffs() {
        let c2 = params.cutoff2.ok_or_else(|| FilterError::InvalidParameter {
            param: "cutoff2".to_string(),
            value: "none".to_string(),
            expected: "a second band edge for bandpass/bandstop".to_string(),
        })?;
        let w2 = warp(c2);
        let (lo, hi) = if w1 <= w2 { (w1, w2) } else { (w2, w1) };
        if hi - lo <= 0.0 {
            return Err(FilterError::InvalidParameter {
                param: "cutoff2".to_string(),
                value: c2.to_string(),
                expected: "band edges that remain distinct after clamping".to_string(),
            });
        }
        let wo = (lo * hi).sqrt();
        let bw = hi - lo;
        match params.band {
            BandType::Bandpass => transform::lp2bp(&proto, wo, bw),
            BandType::Bandstop => transform::lp2bs(&proto, wo, bw),
            _ => unreachable!(),
        }
    } else {
        match params.band {
            BandType::Lowpass => transform::lp2lp(&proto, w1),
            BandType::Highpass => transform::lp2hp(&proto, w1),
            _ => unreachable!(),
        }
    };

    let zpk = match params.domain {
        Domain::Analog => banded,
        Domain::Digital => transform::bilinear(&banded, DIGITAL_FS),
    };

    Ok(FilterSpec {
        zeros: zpk.zeros,
        poles: zpk.poles,
        gain: zpk.gain,
        domain: params.domain,
        causality: Causality::Causal,
    })
}
