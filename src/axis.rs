//! Sweep axes and sample grids
//!
//! Descriptors for where the engine evaluates a response: a frequency axis
//! for Bode sweeps, a real time grid for analog impulse responses, and an
//! integer index grid for digital ones. Each descriptor validates itself
//! and expands into concrete sample points.
//!
//! The `auto_*` constructors reproduce the dashboard's ranging heuristics
//! (decade window around the root magnitudes, decay-scaled time window);
//! the defaults are ordinary parameters, not baked-in constants.

use serde::{Deserialize, Serialize};

use crate::error::{FilterError, Result};
use crate::spec::FilterSpec;

/// Default number of frequency samples per sweep
pub const DEFAULT_FREQ_POINTS: usize = 500;

/// Default number of time samples for an analog impulse grid
pub const DEFAULT_TIME_POINTS: usize = 1000;

/// Default half-width of the digital impulse index window
pub const DEFAULT_INDEX_SPAN: i64 = 50;

/// Hard cap on the number of indices an [`IndexGrid`] may expand to
pub const MAX_INDEX_SPAN: i64 = 1_000_000;

/// Spacing rule for a frequency sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spacing {
    Linear,
    Log,
}

/// Swept frequency axis descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyAxis {
    /// First frequency (rad/s analog, rad/sample digital)
    pub start: f64,
    /// Last frequency, inclusive
    pub stop: f64,
    /// Number of samples
    pub points: usize,
    pub spacing: Spacing,
}

impl FrequencyAxis {
    pub fn linear(start: f64, stop: f64, points: usize) -> Self {
        Self {
            start,
            stop,
            points,
            spacing: Spacing::Linear,
        }
    }

    pub fn log(start: f64, stop: f64, points: usize) -> Self {
        Self {
            start,
            stop,
            points,
            spacing: Spacing::Log,
        }
    }

    /// Default digital sweep: linear from DC to Nyquist (0..π rad/sample)
    pub fn default_digital() -> Self {
        Self::linear(0.0, std::f64::consts::PI, DEFAULT_FREQ_POINTS)
    }

    /// Log sweep sized to an analog spec: one decade below the smallest
    /// nonzero root magnitude up to two decades above the largest, falling
    /// back to 0.1..100 rad/s when the spec gives no usable scale.
    pub fn auto_analog(spec: &FilterSpec) -> Self {
        let mags: Vec<f64> = spec
            .zeros
            .iter()
            .chain(spec.poles.iter())
            .map(|r| r.norm())
            .collect();

        let max_mag = mags.iter().cloned().fold(0.0_f64, f64::max);
        let min_pos = mags
            .iter()
            .cloned()
            .filter(|&m| m > 0.0)
            .fold(f64::INFINITY, f64::min);

        let fmax = if max_mag > 0.0 { max_mag * 100.0 } else { 100.0 };
        let fmin = if min_pos.is_finite() { min_pos / 10.0 } else { 0.1 };

        Self::log(fmin, fmax, DEFAULT_FREQ_POINTS)
    }

    /// Validate and expand into concrete sample points
    pub fn sample_points(&self) -> Result<Vec<f64>> {
        self.validate()?;
        if self.points == 1 {
            return Ok(vec![self.start]);
        }
        let n = self.points;
        let points = match self.spacing {
            Spacing::Linear => {
                let step = (self.stop - self.start) / (n - 1) as f64;
                (0..n).map(|i| self.start + step * i as f64).collect()
            }
            Spacing::Log => {
                let (lo, hi) = (self.start.log10(), self.stop.log10());
                let step = (hi - lo) / (n - 1) as f64;
                (0..n).map(|i| 10f64.powf(lo + step * i as f64)).collect()
            }
        };
        Ok(points)
    }

    fn validate(&self) -> Result<()> {
        if self.points == 0 {
            return Err(FilterError::InvalidParameter {
                param: "points".to_string(),
                value: "0".to_string(),
                expected: "at least 1".to_string(),
            });
        }
        if !self.start.is_finite() || !self.stop.is_finite() {
            return Err(FilterError::InvalidParameter {
                param: "start/stop".to_string(),
                value: format!("{}..{}", self.start, self.stop),
                expected: "finite frequencies".to_string(),
            });
        }
        if self.spacing == Spacing::Log && (self.start <= 0.0 || self.stop <= 0.0) {
            return Err(FilterError::InvalidParameter {
                param: "start/stop".to_string(),
                value: format!("{}..{}", self.start, self.stop),
                expected: "positive frequencies for log spacing".to_string(),
            });
        }
        Ok(())
    }
}

/// Real time grid for analog impulse responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeGrid {
    pub start: f64,
    /// Last instant, inclusive
    pub stop: f64,
    pub points: usize,
}

impl TimeGrid {
    pub fn new(start: f64, stop: f64, points: usize) -> Self {
        Self {
            start,
            stop,
            points,
        }
    }

    /// Symmetric window scaled to the slowest pole decay: ±5 time
    /// constants of the pole nearest the imaginary axis (decay rate
    /// clamped to ≥ 0.1), ±10 s when there are no poles. Symmetric so
    /// left-sided (anti-causal) content is visible.
    pub fn auto_analog(spec: &FilterSpec) -> Self {
        let min_decay = spec
            .poles
            .iter()
            .map(|p| p.re.abs())
            .fold(f64::INFINITY, f64::min);

        let t_max = if min_decay.is_finite() {
            5.0 / min_decay.max(0.1)
        } else {
            10.0
        };
        Self::new(-t_max, t_max, DEFAULT_TIME_POINTS)
    }

    /// Validate and expand into concrete instants
    pub fn sample_points(&self) -> Result<Vec<f64>> {
        if self.points == 0 {
            return Err(FilterError::InvalidParameter {
                param: "points".to_string(),
                value: "0".to_string(),
                expected: "at least 1".to_string(),
            });
        }
        if !self.start.is_finite() || !self.stop.is_finite() {
            return Err(FilterError::InvalidParameter {
                param: "start/stop".to_string(),
                value: format!("{}..{}", self.start, self.stop),
                expected: "finite instants".to_string(),
            });
        }
        if self.points == 1 {
            return Ok(vec![self.start]);
        }
        let step = (self.stop - self.start) / (self.points - 1) as f64;
        Ok((0..self.points)
            .map(|i| self.start + step * i as f64)
            .collect())
    }
}

/// Integer index grid for digital impulse responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexGrid {
    pub start: i64,
    /// Last index, inclusive
    pub stop: i64,
}

impl IndexGrid {
    pub fn new(start: i64, stop: i64) -> Self {
        Self { start, stop }
    }

    /// Default window: indices −50..=50, wide enough to show both sides
    /// of a two-sided sequence.
    pub fn default_digital() -> Self {
        Self::new(-DEFAULT_INDEX_SPAN, DEFAULT_INDEX_SPAN)
    }

    pub fn indices(&self) -> Result<Vec<i64>> {
        if self.start > self.stop {
            return Err(FilterError::InvalidParameter {
                param: "start/stop".to_string(),
                value: format!("{}..{}", self.start, self.stop),
                expected: "start <= stop".to_string(),
            });
        }
        if self.stop - self.start >= MAX_INDEX_SPAN
            || self.start.abs() > MAX_INDEX_SPAN
            || self.stop.abs() > MAX_INDEX_SPAN
        {
            return Err(FilterError::InvalidParameter {
                param: "start/stop".to_string(),
                value: format!("{}..{}", self.start, self.stop),
                expected: format!("indices within ±{MAX_INDEX_SPAN}"),
            });
        }
        Ok((self.start..=self.stop).collect())
    }
}

/// Either kind of impulse-response grid; pairs with the spec's domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleGrid {
    Time(TimeGrid),
    Index(IndexGrid),
}

impl SampleGrid {
    /// Grid matched to the spec's domain with the default ranging
    pub fn auto(spec: &FilterSpec) -> Self {
        match spec.domain {
            crate::spec::Domain::Analog => SampleGrid::Time(TimeGrid::auto_analog(spec)),
            crate::spec::Domain::Digital => SampleGrid::Index(IndexGrid::default_digital()),
        }
    }
}
