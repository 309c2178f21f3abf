//! Filterlab - Filter Response Engine
//!
//! Filterlab is the computation core of an interactive filter-design
//! explorer: place poles and zeros on the s or z plane and get back the
//! frequency (Bode) response and the impulse response, including the
//! anti-causal reconstruction that keeps unstable pole configurations
//! bounded.
//!
//! # Architecture
//!
//! - [`spec`]: the pole/zero/gain description the UI layer mutates on
//!   every interaction
//! - [`response`]: pure sweeps from a spec to frequency and time samples
//! - [`design`]: classical prototypes (Butterworth, Chebyshev, Bessel)
//!   producing specs from band descriptions
//!
//! Every engine call is stateless: identical inputs produce identical
//! outputs and independent calls can run concurrently.

pub mod axis;
pub mod design;
pub mod error;
mod math;
pub mod response;
pub mod spec;

// This module is a thin shell over the library for the bundled binary
pub mod cli;

pub use error::{FilterError, Result};
pub use spec::{Causality, Domain, FilterSpec};
