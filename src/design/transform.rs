//! Spectral transforms on zero-pole-gain triples
//!
//! Lowpass-prototype to lowpass/highpass/bandpass/bandstop reshaping in
//! root form, plus the bilinear transform onto the z plane. Gain updates
//! track the leading-coefficient ratio of the transformed polynomials.

use num_complex::Complex64;
use num_traits::One;

use crate::design::Zpk;

fn relative_degree(zpk: &Zpk) -> usize {
    zpk.poles.len().saturating_sub(zpk.zeros.len())
}

/// Scale a unit-cutoff lowpass to cutoff `wo` (rad/s)
pub(crate) fn lp2lp(zpk: &Zpk, wo: f64) -> Zpk {
    let degree = relative_degree(zpk);
    Zpk {
        zeros: zpk.zeros.iter().map(|&z| z * wo).collect(),
        poles: zpk.poles.iter().map(|&p| p * wo).collect(),
        gain: zpk.gain * wo.powi(degree as i32),
    }
}

/// Turn a unit-cutoff lowpass into a highpass with cutoff `wo`
pub(crate) fn lp2hp(zpk: &Zpk, wo: f64) -> Zpk {
    let degree = relative_degree(zpk);

    let mut zeros: Vec<Complex64> = zpk.zeros.iter().map(|&z| wo / z).collect();
    let poles: Vec<Complex64> = zpk.poles.iter().map(|&p| wo / p).collect();
    // s -> wo/s sends the prototype's zeros at infinity to the origin
    zeros.extend(std::iter::repeat(Complex64::new(0.0, 0.0)).take(degree));

    let num: Complex64 = zpk.zeros.iter().map(|&z| -z).product();
    let den: Complex64 = zpk.poles.iter().map(|&p| -p).product();

    Zpk {
        zeros,
        poles,
        gain: zpk.gain * (num / den).re,
    }
}

/// Turn a unit-cutoff lowpass into a bandpass centered on `wo` with
/// bandwidth `bw`; each prototype root splits into a pair.
pub(crate) fn lp2bp(zpk: &Zpk, wo: f64, bw: f64) -> Zpk {
    let degree = relative_degree(zpk);

    let split = |roots: &[Complex64]| -> Vec<Complex64> {
        let mut out = Vec::with_capacity(roots.len() * 2);
        for &r in roots {
            let scaled = r * (bw / 2.0);
            let disc = (scaled * scaled - wo * wo).sqrt();
            out.push(scaled + disc);
            out.push(scaled - disc);
        }
        out
    };

    let mut zeros = split(&zpk.zeros);
    let poles = split(&zpk.poles);
    zeros.extend(std::iter::repeat(Complex64::new(0.0, 0.0)).take(degree));

    Zpk {
        zeros,
        poles,
        gain: zpk.gain * bw.powi(degree as i32),
    }
}

/// Turn a unit-cutoff lowpass into a bandstop notching `wo` with
/// bandwidth `bw`
pub(crate) fn lp2bs(zpk: &Zpk, wo: f64, bw: f64) -> Zpk {
    let degree = relative_degree(zpk);

    let split_inverted = |roots: &[Complex64]| -> Vec<Complex64> {
        let mut out = Vec::with_capacity(roots.len() * 2);
        for &r in roots {
            let inv = (bw / 2.0) / r;
            let disc = (inv * inv - wo * wo).sqrt();
            out.push(inv + disc);
            out.push(inv - disc);
        }
        out
    };

    let mut zeros = split_inverted(&zpk.zeros);
    let poles = split_inverted(&zpk.poles);
    // The prototype's zeros at infinity land on the notch frequency
    for _ in 0..degree {
        zeros.push(Complex64::new(0.0, wo));
        zeros.push(Complex64::new(0.0, -wo));
    }

    let num: Complex64 = zpk.zeros.iter().map(|&z| -z).product();
    let den: Complex64 = zpk.poles.iter().map(|&p| -p).product();

    Zpk {
        zeros,
        poles,
        gain: zpk.gain * (num / den).re,
    }
}

/// Bilinear transform: map the s plane onto the z plane at sample rate
/// `fs`, preserving the frequency response shape up to the tan warp the
/// caller pre-compensates.
pub(crate) fn bilinear(zpk: &Zpk, fs: f64) -> Zpk {
    let degree = relative_degree(zpk);
    let fs2 = Complex64::new(2.0 * fs, 0.0);

    let mut zeros: Vec<Complex64> = zpk.zeros.iter().map(|&z| (fs2 + z) / (fs2 - z)).collect();
    let poles: Vec<Complex64> = zpk.poles.iter().map(|&p| (fs2 + p) / (fs2 - p)).collect();
    // Zeros at infinity map to the Nyquist point z = -1
    zeros.extend(std::iter::repeat(Complex64::new(-1.0, 0.0)).take(degree));

    let num: Complex64 = zpk
        .zeros
        .iter()
        .fold(Complex64::one(), |acc, &z| acc * (fs2 - z));
    let den: Complex64 = zpk
        .poles
        .iter()
        .fold(Complex64::one(), |acc, &p| acc * (fs2 - p));

    Zpk {
        zeros,
        poles,
        gain: zpk.gain * (num / den).re,
    }
}
