//! Integration Tests
//!
//! End-to-end checks of the response engine: closed-form agreement,
//! causality semantics, cross-consistency between the frequency and time
//! views, and degenerate-input behavior.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use num_complex::Complex64;

use filterlab::axis::{FrequencyAxis, IndexGrid, SampleGrid, TimeGrid};
use filterlab::response::{frequency_response, impulse_response};
use filterlab::{Causality, FilterSpec};

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

/// Digital spec `H(z) = z/(z - p)`: the textbook geometric sequence
fn geometric_spec(p: f64) -> FilterSpec {
    FilterSpec::digital(vec![c(0.0, 0.0)], vec![c(p, 0.0)], 1.0)
}

fn amplitude_at(resp: &filterlab::response::ImpulseResponse, time: f64) -> f64 {
    resp.samples
        .iter()
        .find(|s| (s.time - time).abs() < 1e-9)
        .map(|s| s.amplitude)
        .expect("grid point missing")
}

// === Closed-form agreement ===

#[test]
fn test_geometric_series_round_trip() {
    let p = 0.5;
    let grid = SampleGrid::Index(IndexGrid::new(0, 9));
    let resp = impulse_response(&geometric_spec(p), &grid).unwrap();

    for (n, sample) in resp.samples.iter().enumerate() {
        assert_abs_diff_eq!(sample.amplitude, p.powi(n as i32), epsilon = 1e-9);
    }
}

#[test]
fn test_stable_impulse_decays_toward_zero() {
    for p in [0.3, 0.7, 0.95] {
        let grid = SampleGrid::Index(IndexGrid::new(0, 200));
        let resp = impulse_response(&geometric_spec(p), &grid).unwrap();

        let tail = resp.samples.last().unwrap().amplitude.abs();
        assert!(tail < 1e-4, "pole {p}: tail {tail} has not decayed");
        // And matches the closed form all the way down
        for (n, sample) in resp.samples.iter().enumerate().step_by(25) {
            assert_abs_diff_eq!(sample.amplitude, p.powi(n as i32), epsilon = 1e-12);
        }
    }
}

#[test]
fn test_dc_gain_property_analog() {
    // H(0) = gain · Π(-z) / Π(-p)
    let spec = FilterSpec::analog(
        vec![c(-3.0, 0.0)],
        vec![c(-1.0, 0.0), c(-2.0, 0.0)],
        4.0,
    );
    let expected = 4.0 * 3.0 / (1.0 * 2.0);

    let axis = FrequencyAxis::linear(0.0, 1.0, 3);
    let resp = frequency_response(&spec, &axis).unwrap();
    assert_relative_eq!(resp[0].value.re, expected, max_relative = 1e-12);
    assert_abs_diff_eq!(resp[0].value.im, 0.0, epsilon = 1e-12);
    assert_relative_eq!(spec.dc_gain().re, expected, max_relative = 1e-12);
}

#[test]
fn test_dc_gain_property_digital() {
    let spec = FilterSpec::digital(vec![c(-1.0, 0.0)], vec![c(0.5, 0.0)], 0.25);
    // H(1) = 0.25 · (1 + 1)/(1 - 0.5) = 1
    let axis = FrequencyAxis::linear(0.0, 1.0, 5);
    let resp = frequency_response(&spec, &axis).unwrap();
    assert_relative_eq!(resp[0].value.re, 1.0, max_relative = 1e-12);
    assert_relative_eq!(spec.dc_gain().re, 1.0, max_relative = 1e-12);
}

// === Causality semantics ===

#[test]
fn test_causality_toggle_for_unstable_pole() {
    let causal = FilterSpec::digital(vec![], vec![c(2.0, 0.0)], 1.0);
    let grid = SampleGrid::Index(IndexGrid::new(-10, 30));

    // Causal: right-sided and diverging
    let resp = impulse_response(&causal, &grid).unwrap();
    assert!(amplitude_at(&resp, 30.0).abs() > 1e8);
    assert_abs_diff_eq!(amplitude_at(&resp, -5.0), 0.0, epsilon = 1e-12);

    // Anti-causal: left-sided -2^n, bounded, zero for n >= 0
    let anti = causal.clone().with_causality(Causality::AntiCausal);
    let resp = impulse_response(&anti, &grid).unwrap();
    for n in [-1, -2, -5, -10] {
        assert_abs_diff_eq!(
            amplitude_at(&resp, n as f64),
            -2f64.powi(n),
            epsilon = 1e-9
        );
    }
    assert!(resp.samples.iter().all(|s| s.amplitude.abs() <= 0.5 + 1e-12));
}

#[test]
fn test_anti_causal_leaves_stable_poles_alone() {
    let spec = geometric_spec(0.5);
    let anti = spec.clone().with_causality(Causality::AntiCausal);
    let grid = SampleGrid::Index(IndexGrid::new(-10, 10));

    let a = impulse_response(&spec, &grid).unwrap();
    let b = impulse_response(&anti, &grid).unwrap();
    assert_eq!(a, b, "stable poles expand identically in both modes");
}

// === Frequency/time cross-consistency ===

#[test]
fn test_digital_transform_pair_consistency() {
    // For a stable causal spec with matched root counts, H(e^{jw}) must
    // equal the transform of the computed impulse response: Σ h[n]·e^{-jwn}.
    let spec = FilterSpec::digital(
        vec![c(0.2, 0.0), c(0.0, 0.0)],
        vec![c(0.6, 0.2), c(0.6, -0.2)],
        1.0,
    );
    let grid = SampleGrid::Index(IndexGrid::new(0, 400));
    let h = impulse_response(&spec, &grid).unwrap();

    let axis = FrequencyAxis::linear(0.1, 3.0, 8);
    let sweep = frequency_response(&spec, &axis).unwrap();

    for s in &sweep {
        let mut sum = Complex64::new(0.0, 0.0);
        for sample in &h.samples {
            sum += sample.amplitude * Complex64::from_polar(1.0, -s.frequency * sample.time);
        }
        assert_relative_eq!(sum.re, s.value.re, max_relative = 1e-6, epsilon = 1e-9);
        assert_relative_eq!(sum.im, s.value.im, max_relative = 1e-6, epsilon = 1e-9);
    }
}

#[test]
fn test_analog_pole_matches_reference_evaluation() {
    // H(s) = 1/(s+1): the partial-fraction engine output must agree with
    // the direct e^{-t} formula, and the sweep with 1/(1+jw).
    let spec = FilterSpec::analog(vec![], vec![c(-1.0, 0.0)], 1.0);

    let grid = SampleGrid::Time(TimeGrid::new(-1.0, 6.0, 141));
    let resp = impulse_response(&spec, &grid).unwrap();
    for s in &resp.samples {
        let reference = if s.time >= 0.0 { (-s.time).exp() } else { 0.0 };
        assert_abs_diff_eq!(s.amplitude, reference, epsilon = 1e-12);
    }

    let axis = FrequencyAxis::log(0.01, 100.0, 50);
    let sweep = frequency_response(&spec, &axis).unwrap();
    for s in &sweep {
        let reference = (Complex64::new(1.0, s.frequency)).inv();
        assert_relative_eq!(s.value.re, reference.re, max_relative = 1e-12);
        assert_relative_eq!(s.value.im, reference.im, max_relative = 1e-12);
    }
}

#[test]
fn test_analog_laplace_integral_consistency() {
    // Numerically integrate h(t)·e^{-jwt} over the decayed support and
    // compare with H(jw) for a two-pole spec.
    let spec = FilterSpec::analog(vec![], vec![c(-1.0, 0.0), c(-2.0, 0.0)], 2.0);

    let points = 40_001;
    let grid = SampleGrid::Time(TimeGrid::new(0.0, 40.0, points));
    let resp = impulse_response(&spec, &grid).unwrap();
    let dt = 40.0 / (points - 1) as f64;

    for w in [0.0, 0.5, 1.0, 3.0] {
        let mut integral = Complex64::new(0.0, 0.0);
        for s in &resp.samples {
            integral += s.amplitude * Complex64::from_polar(1.0, -w * s.time) * dt;
        }
        let axis = FrequencyAxis::linear(w, w, 1);
        let reference = frequency_response(&spec, &axis).unwrap()[0].value;
        assert_relative_eq!(integral.re, reference.re, max_relative = 1e-3, epsilon = 1e-3);
        assert_relative_eq!(integral.im, reference.im, max_relative = 1e-3, epsilon = 1e-3);
    }
}

// === Degenerate inputs ===

#[test]
fn test_degenerate_specs_never_crash() {
    let empty_digital = FilterSpec::digital(vec![], vec![], 1.0);
    let grid = SampleGrid::auto(&empty_digital);
    let resp = impulse_response(&empty_digital, &grid).unwrap();
    assert_abs_diff_eq!(amplitude_at(&resp, 0.0), 1.0, epsilon = 1e-12);

    let zero_gain = FilterSpec::digital(vec![], vec![c(0.9, 0.0)], 0.0);
    let resp = impulse_response(&zero_gain, &SampleGrid::auto(&zero_gain)).unwrap();
    assert!(resp.samples.iter().all(|s| s.amplitude == 0.0));

    let axis = FrequencyAxis::default_digital();
    let sweep = frequency_response(&zero_gain, &axis).unwrap();
    assert!(sweep.iter().all(|s| s.magnitude() == 0.0));

    // Empty analog spec: pure gain, all samples zero plus a reported Dirac
    let empty_analog = FilterSpec::analog(vec![], vec![], 3.0);
    let resp = impulse_response(&empty_analog, &SampleGrid::auto(&empty_analog)).unwrap();
    assert_eq!(resp.dirac, Some(3.0));
    assert!(resp.samples.iter().all(|s| s.amplitude == 0.0));
}

#[test]
fn test_error_paths_are_reported_not_panics() {
    // Repeated poles
    let spec = FilterSpec::digital(vec![], vec![c(0.5, 0.0), c(0.5, 0.0)], 1.0);
    let err = impulse_response(&spec, &SampleGrid::auto(&spec)).unwrap_err();
    assert_eq!(err.error_code(), "UNSUPPORTED_CONFIGURATION");

    // Improper analog transfer function
    let spec = FilterSpec::analog(vec![c(-1.0, 0.0)], vec![], 1.0);
    let err = impulse_response(&spec, &SampleGrid::auto(&spec)).unwrap_err();
    assert_eq!(err.error_code(), "UNSUPPORTED_CONFIGURATION");

    // Non-finite gain
    let spec = FilterSpec::digital(vec![], vec![c(0.5, 0.0)], f64::NAN);
    let err = impulse_response(&spec, &SampleGrid::auto(&spec)).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_SPECIFICATION");
}

#[test]
fn test_no_nan_leaks_into_samples() {
    // A pole sitting on the sweep axis must yield a flagged sample, and
    // every other sample must stay finite.
    let spec = FilterSpec::digital(vec![], vec![c(1.0, 0.0), c(0.5, 0.0)], 1.0);
    let axis = FrequencyAxis::linear(0.0, std::f64::consts::PI, 64);
    let sweep = frequency_response(&spec, &axis).unwrap();

    for s in &sweep {
        if s.singular {
            assert!(s.magnitude().is_infinite());
        } else {
            assert!(!s.value.re.is_nan() && !s.value.im.is_nan());
        }
    }
    assert_eq!(sweep.iter().filter(|s| s.singular).count(), 1);
}
