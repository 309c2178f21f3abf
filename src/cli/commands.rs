//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command. Output is JSON: a
//! spec for `design`, sample rows for `response` and `impulse`. Infinite
//! magnitudes (singular sweep points) serialize as `null`, which plotting
//! layers already treat as a gap.

use std::fs;
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::axis::{FrequencyAxis, IndexGrid, SampleGrid, TimeGrid};
use crate::cli::{DesignArgs, ImpulseArgs, ResponseArgs};
use crate::design::{design, BandType, DesignParams, FilterFamily};
use crate::error::{FilterError, Result};
use crate::response::{frequency_response, impulse_response, unwrap_phase};
use crate::spec::{Causality, Domain, FilterSpec};

/// One Bode-plot row
#[derive(Debug, Serialize)]
struct BodePoint {
    frequency: f64,
    magnitude_db: f64,
    /// Unwrapped phase in degrees
    phase_deg: f64,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    singular: bool,
}

/// Design a filter and emit its spec.
pub fn design_filter(args: &DesignArgs) -> Result<()> {
    let params = DesignParams {
        family: parse_family(&args.family)?,
        band: parse_band(&args.band)?,
        order: args.order,
        domain: parse_domain(&args.domain)?,
        cutoff1: args.cutoff,
        cutoff2: args.cutoff2,
        passband_ripple_db: args
            .ripple
            .unwrap_or(crate::design::DEFAULT_PASSBAND_RIPPLE_DB),
        stopband_atten_db: args
            .atten
            .unwrap_or(crate::design::DEFAULT_STOPBAND_ATTEN_DB),
    };

    info!(
        "Designing {} {} of order {}",
        args.family, args.band, args.order
    );

    let spec = design(&params)?;
    emit(&spec, args.output.as_deref())
}

/// Sweep a spec's frequency response.
pub fn frequency_sweep(args: &ResponseArgs) -> Result<()> {
    let spec = load_spec(&args.spec)?;

    let axis = match (args.start, args.stop) {
        (Some(start), Some(stop)) => {
            let points = args.points.unwrap_or(crate::axis::DEFAULT_FREQ_POINTS);
            match spec.domain {
                Domain::Analog => FrequencyAxis::log(start, stop, points),
                Domain::Digital => FrequencyAxis::linear(start, stop, points),
            }
        }
        (None, None) => {
            let mut axis = match spec.domain {
                Domain::Analog => FrequencyAxis::auto_analog(&spec),
                Domain::Digital => FrequencyAxis::default_digital(),
            };
            if let Some(points) = args.points {
                axis.points = points;
            }
            axis
        }
        _ => {
            return Err(FilterError::InvalidParameter {
                param: "start/stop".to_string(),
                value: "only one of them".to_string(),
                expected: "both or neither".to_string(),
            })
        }
    };

    info!(
        "Sweeping {} points over {}..{}",
        axis.points, axis.start, axis.stop
    );

    let samples = frequency_response(&spec, &axis)?;
    let phase = unwrap_phase(&samples);

    let rows: Vec<BodePoint> = samples
        .iter()
        .zip(&phase)
        .map(|(s, &ph)| BodePoint {
            frequency: s.frequency,
            magnitude_db: s.magnitude_db(),
            phase_deg: ph.to_degrees(),
            singular: s.singular,
        })
        .collect();

    emit(&rows, args.output.as_deref())
}

/// Compute a spec's impulse response.
pub fn impulse(args: &ImpulseArgs) -> Result<()> {
    let mut spec = load_spec(&args.spec)?;
    if args.anti_causal {
        spec.causality = Causality::AntiCausal;
    }

    let grid = match (spec.domain, args.start, args.stop) {
        (Domain::Analog, Some(start), Some(stop)) => {
            let points = args.points.unwrap_or(crate::axis::DEFAULT_TIME_POINTS);
            SampleGrid::Time(TimeGrid::new(start, stop, points))
        }
        (Domain::Digital, Some(start), Some(stop)) => {
            SampleGrid::Index(IndexGrid::new(start as i64, stop as i64))
        }
        (_, None, None) => SampleGrid::auto(&spec),
        _ => {
            return Err(FilterError::InvalidParameter {
                param: "start/stop".to_string(),
                value: "only one of them".to_string(),
                expected: "both or neither".to_string(),
            })
        }
    };

    let resp = impulse_response(&spec, &grid)?;

    if let Some(weight) = resp.dirac {
        info!("Response carries a Dirac impulse of weight {weight} at t = 0");
    }

    emit(&resp, args.output.as_deref())
}

fn load_spec(path: &Path) -> Result<FilterSpec> {
    info!("Loading spec: {}", path.display());
    let text = fs::read_to_string(path)?;
    let spec: FilterSpec = serde_json::from_str(&text)?;
    spec.validate()?;
    Ok(spec)
}

fn emit<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => {
            fs::write(path, json)?;
            println!("Wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn parse_family(s: &str) -> Result<FilterFamily> {
    match s.to_ascii_lowercase().as_str() {
        "butterworth" | "butter" => Ok(FilterFamily::Butterworth),
        "chebyshev1" | "cheby1" => Ok(FilterFamily::ChebyshevI),
        "chebyshev2" | "cheby2" => Ok(FilterFamily::ChebyshevII),
        "bessel" => Ok(FilterFamily::Bessel),
        other => Err(FilterError::InvalidParameter {
            param: "family".to_string(),
            value: other.to_string(),
            expected: "butterworth, chebyshev1, chebyshev2 or bessel".to_string(),
        }),
    }
}

fn parse_band(s: &str) -> Result<BandType> {
    match s.to_ascii_lowercase().as_str() {
        "lowpass" | "low" => Ok(BandType::Lowpass),
        "highpass" | "high" => Ok(BandType::Highpass),
        "bandpass" => Ok(BandType::Bandpass),
        "bandstop" => Ok(BandType::Bandstop),
        other => Err(FilterError::InvalidParameter {
            param: "band".to_string(),
            value: other.to_string(),
            expected: "lowpass, highpass, bandpass or bandstop".to_string(),
        }),
    }
}

fn parse_domain(s: &str) -> Result<Domain> {
    match s.to_ascii_lowercase().as_str() {
        "analog" | "s" => Ok(Domain::Analog),
        "digital" | "z" => Ok(Domain::Digital),
        other => Err(FilterError::InvalidParameter {
            param: "domain".to_string(),
            value: other.to_string(),
            expected: "analog or digital".to_string(),
        }),
    }
}
