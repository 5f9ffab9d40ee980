//! Hermite-style trigonometric-interpolation coefficients over a cyclic
//! integer domain.
//!
//! Functional bootstrapping evaluates a lookup table `f : Z_p -> R` while
//! refreshing ciphertext noise. The table is interpolated here by a
//! trigonometric sum whose coefficients the encrypted evaluator applies. All
//! three correction orders share the same base DFT computation over the `p`
//! samples; each order then applies its own closed-form boundary-correction
//! assembly, which is reproduced here exactly.
//!
//! Accumulation is plain double-precision complex arithmetic with no
//! stabilization against cancellation; precision degrades for large `p`. That
//! is a documented limit of the method, not something this module corrects.

use std::f64::consts::PI;

use num::{Complex, Zero};
use rayon::prelude::*;

use crate::{DomainSize, HermiteOrder, Result};

/// Compute trigonometric-interpolation coefficients for a function on the
/// cyclic domain `{0, 1, ..., p - 1}`.
///
/// `f` is invoked exactly once per point, in index order. The output length
/// is fixed by `order` and `p` (see [`HermiteOrder::coefficient_count`]):
/// `p` for order 1, `3p/2` (integer division) for order 2 and `2p` for
/// order 3.
///
/// For order 3 the entry at index `p` is an intentional zero: it is the
/// Nyquist-like midpoint of the doubled spectrum and no correction term lands
/// on it.
///
/// # Errors
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument) when `p == 0`,
/// identically for all three orders.
///
/// # Example
/// ```
/// use fbs_math::{hermite_interp_coefficients, DomainSize, HermiteOrder};
/// use num::Complex;
///
/// // A 4-entry lookup table; the constant coefficient is the table mean.
/// let coeffs =
///     hermite_interp_coefficients(|i| i as f64, DomainSize(4), HermiteOrder::First).unwrap();
///
/// assert_eq!(coeffs.len(), 4);
/// assert_eq!(coeffs[0], Complex::new(1.5, 0.0));
/// ```
pub fn hermite_interp_coefficients<F>(
    f: F,
    p: DomainSize,
    order: HermiteOrder,
) -> Result<Vec<Complex<f64>>>
where
    F: Fn(u32) -> f64,
{
    p.validate()?;
    log::trace!("hermite_interp_coefficients p={} order={order:?}", p.0);

    let y = (0..p.0).map(f).collect::<Vec<_>>();

    Ok(match order {
        HermiteOrder::First => base_coefficients(&y),
        HermiteOrder::Second => second_order(&y),
        HermiteOrder::Third => third_order(&y),
    })
}

/// One DFT bin of the samples at frequency `freq`: `sum_l y[l] *
/// exp(-2 pi i freq l / p)`.
///
/// `freq` may exceed `p`; the shifted kernels `p + k` and `p - k` are
/// evaluated literally rather than reduced mod `p`, matching the closed-form
/// derivation term for term.
fn dft_tap(y: &[f64], freq: usize) -> Complex<f64> {
    let p = y.len() as f64;
    let mut acc = Complex::zero();

    for (l, &y_l) in y.iter().enumerate() {
        acc += Complex::new(0.0, -2.0 * PI * freq as f64 * l as f64 / p).exp() * y_l;
    }

    acc
}

/// The shared base interpolant: `alpha[0]` is the sample mean and
/// `alpha[k] = 2 (p - k) / p^2 * dft_tap(y, k)` for `k` in `[1, p)`.
///
/// This is also the complete order-1 output.
fn base_coefficients(y: &[f64]) -> Vec<Complex<f64>> {
    let p = y.len();
    let p_f = p as f64;

    let mean = y.iter().sum::<f64>() / p_f;

    let mut alpha = Vec::with_capacity(p);
    alpha.push(Complex::new(mean, 0.0));
    alpha.par_extend(
        (1..p)
            .into_par_iter()
            .map(|k| dft_tap(y, k) * (2.0 * (p_f - k as f64) / (p_f * p_f))),
    );

    alpha
}

/// Order-2 assembly: half-range corrections `beta`, `delta`, `theta` at the
/// shifted frequencies `k`, `p + k` and `p - k` for `k` in `[1, p/2]`, merged
/// into a length-`3p/2` sequence.
fn second_order(y: &[f64]) -> Vec<Complex<f64>> {
    let p = y.len();
    let p_f = p as f64;
    let half = p / 2;
    let parity = p % 2;

    let alpha = base_coefficients(y);

    // The assembly below reads one slot past the computed range of each
    // correction sequence (at i == p/2 for either parity, and at the
    // theta tap for the first index past p/2 when p is odd). Those taps lie
    // outside the frequencies the derivation defines corrections for and
    // contribute exactly zero, so each sequence carries one trailing zero
    // slot.
    let mut beta = vec![Complex::zero(); half + 1];
    let mut delta = vec![Complex::zero(); half + 1];
    let mut theta = vec![Complex::zero(); half + 1];

    let taps = (1..=half)
        .into_par_iter()
        .map(|k| {
            let k_f = k as f64;
            // gamma halves the weight of the Nyquist bin when p is even.
            let gamma = if parity == 0 && k == half { 1.0 } else { 0.0 };
            let scale = (2.0 - gamma) * k_f * (p_f - k_f) / (p_f * p_f * p_f);

            (
                dft_tap(y, k) * scale,
                dft_tap(y, p + k) * scale,
                dft_tap(y, p - k) * scale,
            )
        })
        .collect::<Vec<_>>();

    for (slot, (b, d, t)) in taps.into_iter().enumerate() {
        beta[slot] = b;
        delta[slot] = d;
        theta[slot] = t;
    }

    let mut coeffs = vec![Complex::zero(); 3 * p / 2];
    coeffs[0] = alpha[0];

    for i in 1..coeffs.len() {
        if i < half {
            coeffs[i] = alpha[i] + beta[i];
        } else if i == half {
            let gate = (1 - parity) as f64;
            coeffs[i] = alpha[i] + beta[i] - theta[p - i - parity] * (gate * 0.5);
        } else if i < p {
            coeffs[i] = alpha[i] - theta[p - i] * 0.5;
        } else if i > p {
            coeffs[i] = delta[i - p] * -0.5;
        }
        // i == p is reached by no branch and stays zero.
    }

    coeffs
}

/// Order-3 assembly: full-range corrections for `k` in `[1, p)`, merged into
/// a length-`2p` sequence whose entry at index `p` is an intentional zero.
fn third_order(y: &[f64]) -> Vec<Complex<f64>> {
    let p = y.len();
    let p_f = p as f64;

    let alpha = base_coefficients(y);

    let taps = (1..p)
        .into_par_iter()
        .map(|k| {
            let k_f = k as f64;
            let scale = 2.0 * k_f * (p_f - k_f) * (2.0 * p_f - k_f) / (3.0 * p_f.powi(4));

            (
                dft_tap(y, k) * scale,
                dft_tap(y, p + k) * scale,
                dft_tap(y, p - k) * scale,
            )
        })
        .collect::<Vec<_>>();

    let mut beta = vec![Complex::zero(); p];
    let mut delta = vec![Complex::zero(); p];
    let mut theta = vec![Complex::zero(); p];

    for (k, (b, d, t)) in taps.into_iter().enumerate() {
        beta[k + 1] = b;
        delta[k + 1] = d;
        theta[k + 1] = t;
    }

    let mut coeffs = vec![Complex::zero(); 2 * p];
    coeffs[0] = alpha[0];

    for i in 1..coeffs.len() {
        if i < p {
            coeffs[i] = alpha[i] + beta[i] - theta[p - i] * 0.5;
        } else if i > p {
            coeffs[i] = delta[i - p] * -0.5;
        }
        // i == p stays zero: the Nyquist-like midpoint of the doubled
        // spectrum.
    }

    coeffs
}
