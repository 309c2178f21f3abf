//! Filter response engine
//!
//! Pure, stateless transformations from a [`crate::spec::FilterSpec`] to
//! frequency-domain and time-domain response data. Every entry point takes
//! immutable references and allocates only its output, so independent
//! calls may run concurrently without synchronization.

mod frequency;
mod impulse;
mod residue;

pub use frequency::{frequency_response, unwrap_phase, FrequencySample};
pub use impulse::{impulse_response, ImpulseResponse, ImpulseSample};
