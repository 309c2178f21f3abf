//! CLI Module
//!
//! Command-line interface over the response engine: design filters and
//! dump their responses as JSON for plotting or piping elsewhere.

pub mod commands;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Filterlab - pole-zero filter response engine
#[derive(Parser, Debug)]
#[command(name = "filterlab")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Design a classical filter and print its pole-zero spec
    #[command(name = "design")]
    Design(DesignArgs),

    /// Sweep the frequency response of a spec
    #[command(name = "response")]
    Response(ResponseArgs),

    /// Compute the impulse response of a spec
    #[command(name = "impulse")]
    Impulse(ImpulseArgs),
}

#[derive(Args, Debug)]
pub struct DesignArgs {
    /// Approximation family: butterworth, chebyshev1, chebyshev2, bessel
    #[arg(short, long, default_value = "butterworth")]
    pub family: String,

    /// Band shape: lowpass, highpass, bandpass, bandstop
    #[arg(short, long, default_value = "lowpass")]
    pub band: String,

    /// Filter order
    #[arg(short = 'n', long, default_value_t = 4)]
    pub order: usize,

    /// Domain: analog or digital
    #[arg(short, long, default_value = "analog")]
    pub domain: String,

    /// First cutoff (rad/s analog, fraction of Nyquist digital)
    #[arg(short = 'c', long, default_value_t = 1.0)]
    pub cutoff: f64,

    /// Second cutoff for bandpass/bandstop
    #[arg(long)]
    pub cutoff2: Option<f64>,

    /// Chebyshev I passband ripple in dB
    #[arg(long)]
    pub ripple: Option<f64>,

    /// Chebyshev II stopband attenuation in dB
    #[arg(long)]
    pub atten: Option<f64>,

    /// Write the spec JSON here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ResponseArgs {
    /// Path to a spec JSON file
    #[arg(short, long)]
    pub spec: PathBuf,

    /// First frequency of the sweep (defaults to an automatic window)
    #[arg(long)]
    pub start: Option<f64>,

    /// Last frequency of the sweep
    #[arg(long)]
    pub stop: Option<f64>,

    /// Number of sweep points
    #[arg(short, long)]
    pub points: Option<usize>,

    /// Write the sweep JSON here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ImpulseArgs {
    /// Path to a spec JSON file
    #[arg(short, long)]
    pub spec: PathBuf,

    /// Grid start (seconds analog, sample index digital)
    #[arg(long)]
    pub start: Option<f64>,

    /// Grid stop (seconds analog, sample index digital)
    #[arg(long)]
    pub stop: Option<f64>,

    /// Number of grid points (analog only; digital grids are integer)
    #[arg(short, long)]
    pub points: Option<usize>,

    /// Reconstruct unstable poles left-sided (bounded two-sided output)
    #[arg(long)]
    pub anti_causal: bool,

    /// Write the response JSON here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
