//! Dense complex polynomial helpers
//!
//! Coefficients are stored in descending power order (`c[0]` is the
//! leading coefficient), matching the transfer-function convention used
//! throughout the crate.

use num_complex::Complex64;

/// Expand `Π (x − rᵢ)` into monic descending coefficients.
///
/// An empty root set yields the constant polynomial `[1]`.
pub fn poly_from_roots(roots: &[Complex64]) -> Vec<Complex64> {
    let mut coeffs = vec![Complex64::new(1.0, 0.0)];
    for &r in roots {
        let mut next = vec![Complex64::new(0.0, 0.0); coeffs.len() + 1];
        for (i, &c) in coeffs.iter().enumerate() {
            next[i] += c;
            next[i + 1] -= r * c;
        }
        coeffs = next;
    }
    coeffs
}

/// Horner evaluation of descending coefficients at `x`
pub fn polyval(coeffs: &[Complex64], x: Complex64) -> Complex64 {
    coeffs
        .iter()
        .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * x + c)
}

/// Polynomial long division: `num = quot · den + rem`.
///
/// Returns `(quot, rem)` in descending order. The divisor's leading
/// coefficient must be nonzero; when `deg(num) < deg(den)` the quotient
/// is empty and the remainder is `num`.
pub fn poly_div(num: &[Complex64], den: &[Complex64]) -> (Vec<Complex64>, Vec<Complex64>) {
    debug_assert!(!den.is_empty() && den[0].norm() > 0.0);

    if num.len() < den.len() {
        return (Vec::new(), num.to_vec());
    }

    let mut rem = num.to_vec();
    let quot_len = num.len() - den.len() + 1;
    let mut quot = vec![Complex64::new(0.0, 0.0); quot_len];

    for i in 0..quot_len {
        let q = rem[i] / den[0];
        quot[i] = q;
        for (j, &d) in den.iter().enumerate() {
            rem[i + j] -= q * d;
        }
    }

    (quot, rem[quot_len..].to_vec())
}

/// All roots of a polynomial via Durand–Kerner iteration.
///
/// Coefficients are descending and the polynomial is normalized to monic
/// internally. Simultaneous iteration from the standard `(0.4 + 0.9i)^k`
/// seeds; converges quadratically for the well-separated root sets the
/// design module produces (Bessel polynomials).
pub fn find_roots(coeffs: &[Complex64]) -> Vec<Complex64> {
    let degree = coeffs.len().saturating_sub(1);
    if degree == 0 {
        return Vec::new();
    }

    // Normalize to monic
    let lead = coeffs[0];
    let monic: Vec<Complex64> = coeffs.iter().map(|&c| c / lead).collect();

    let seed = Complex64::new(0.4, 0.9);
    let mut roots: Vec<Complex64> = (0..degree).map(|k| seed.powu(k as u32 + 1)).collect();

    const MAX_ITER: usize = 200;
    const TOL: f64 = 1e-13;

    for _ in 0..MAX_ITER {
        let mut max_step = 0.0_f64;
        for i in 0..degree {
            let xi = roots[i];
            let mut denom = Complex64::new(1.0, 0.0);
            for (j, &xj) in roots.iter().enumerate() {
                if j != i {
                    denom *= xi - xj;
                }
            }
            let step = polyval(&monic, xi) / denom;
            roots[i] = xi - step;
            let scale = xi.norm().max(1.0);
            max_step = max_step.max(step.norm() / scale);
        }
        if max_step < TOL {
            break;
        }
    }

    roots
}
