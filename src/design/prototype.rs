//! Normalized analog lowpass prototypes
//!
//! Each function returns the zero-pole-gain triple of a unit-cutoff
//! analog lowpass filter; the spectral transforms scale and reshape it to
//! the requested band.

use num_complex::Complex64;

use crate::design::Zpk;
use crate::math::{find_roots, polyval};

use std::f64::consts::PI;

/// Butterworth prototype: poles spread evenly on the unit half-circle in
/// the left half-plane, no zeros, unit gain.
pub(crate) fn butterworth(order: usize) -> Zpk {
    let n = order as f64;
    let poles = (0..order)
        .map(|k| {
            let m = -(n - 1.0) + 2.0 * k as f64;
            let theta = PI * m / (2.0 * n);
            -Complex64::from_polar(1.0, theta)
        })
        .collect();

    Zpk {
        zeros: Vec::new(),
        poles,
        gain: 1.0,
    }
}

/// Chebyshev type I prototype with `ripple_db` of passband ripple.
///
/// Poles sit on an ellipse whose axes follow sinh/cosh of the inverse
/// ripple parameter; even orders are gain-compensated so the passband
/// oscillates between 0 and −ripple dB.
pub(crate) fn chebyshev1(order: usize, ripple_db: f64) -> Zpk {
    let n = order as f64;
    let eps = (10f64.powf(0.1 * ripple_db) - 1.0).sqrt();
    let mu = (1.0 / eps).asinh() / n;

    let poles: Vec<Complex64> = (0..order)
        .map(|k| {
            let m = -(n - 1.0) + 2.0 * k as f64;
            let theta = PI * m / (2.0 * n);
            -Complex64::new(mu, theta).sinh()
        })
        .collect();

    let mut gain = poles.iter().map(|&p| -p).product::<Complex64>().re;
    if order % 2 == 0 {
        gain /= (1.0 + eps * eps).sqrt();
    }

    Zpk {
        zeros: Vec::new(),
        poles,
        gain,
    }
}

/// Chebyshev type II (inverse Chebyshev) prototype with `atten_db` of
/// stopband attenuation. Zeros on the imaginary axis notch the stopband;
/// poles are inverted Chebyshev I locations.
pub(crate) fn chebyshev2(order: usize, atten_db: f64) -> Zpk {
    let n = order as f64;
    let de = 1.0 / (10f64.powf(0.1 * atten_db) - 1.0).sqrt();
    let mu = (1.0 / de).asinh() / n;

    // Zero angles skip the midpoint for odd orders (a zero at infinity)
    let mut zero_m: Vec<f64> = Vec::with_capacity(order);
    let mut m = -(n - 1.0);
    while m < n {
        if !(order % 2 == 1 && m == 0.0) {
            zero_m.push(m);
        }
        m += 2.0;
    }
    let zeros: Vec<Complex64> = zero_m
        .iter()
        .map(|&m| {
            let angle = m * PI / (2.0 * n);
            Complex64::new(0.0, 1.0 / angle.sin())
        })
        .collect();

    let poles: Vec<Complex64> = (0..order)
        .map(|k| {
            let m = -(n - 1.0) + 2.0 * k as f64;
            let p = -Complex64::from_polar(1.0, PI * m / (2.0 * n));
            let p = Complex64::new(mu.sinh() * p.re, mu.cosh() * p.im);
            p.inv()
        })
        .collect();

    let num: Complex64 = poles.iter().map(|&p| -p).product();
    let den: Complex64 = zeros.iter().map(|&z| -z).product();
    let gain = (num / den).re;

    Zpk { zeros, poles, gain }
}

/// Bessel prototype: poles are the roots of the degree-`order` reverse
/// Bessel polynomial, rescaled so the geometric mean of the pole
/// magnitudes is 1 (which puts the cutoff near ω = 1); DC gain is unity.
pub(crate) fn bessel(order: usize) -> Zpk {
    let coeffs = reverse_bessel_coeffs(order);
    let mut poles = find_roots(&coeffs);

    // Polish each root with a couple of Newton steps; Durand-Kerner gets
    // close and Newton converges the last digits.
    let deriv: Vec<Complex64> = coeffs[..coeffs.len() - 1]
        .iter()
        .enumerate()
        .map(|(i, &c)| c * (coeffs.len() - 1 - i) as f64)
        .collect();
    for p in poles.iter_mut() {
        for _ in 0..3 {
            let f = polyval(&coeffs, *p);
            let df = polyval(&deriv, *p);
            if df.norm() > 0.0 {
                *p -= f / df;
            }
        }
    }

    // Constant term of the monic polynomial = Π(-pole); its N-th root is
    // the geometric mean of the pole magnitudes.
    let a0 = coeffs[coeffs.len() - 1].re;
    let scale = a0.powf(1.0 / order as f64);
    let poles: Vec<Complex64> = poles.into_iter().map(|p| p / scale).collect();

    let gain = poles.iter().map(|&p| -p).product::<Complex64>().re;

    Zpk {
        zeros: Vec::new(),
        poles,
        gain,
    }
}

/// Monic descending coefficients of the reverse Bessel polynomial
/// θ_N(s) = Σ a_k s^k with a_k = (2N−k)! / (2^{N−k} k! (N−k)!).
///
/// Computed by the term ratio a_{k−1} = a_k · k(2N−k+1) / (2(N−k+1)) to
/// stay in f64 range for every supported order.
fn reverse_bessel_coeffs(order: usize) -> Vec<Complex64> {
    let n = order as f64;
    let mut coeffs = vec![1.0_f64];
    let mut a = 1.0_f64;
    let mut k = n;
    while k > 0.0 {
        a *= k * (2.0 * n - k + 1.0) / (2.0 * (n - k + 1.0));
        coeffs.push(a);
        k -= 1.0;
    }
    coeffs.into_iter().map(|c| Complex64::new(c, 0.0)).collect()
}
