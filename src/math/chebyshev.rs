//! Chebyshev-basis coefficient extraction over a continuous interval.
//!
//! A function over `[a, b]` is sampled once at each Chebyshev node of the
//! interval and the samples are run through a type-II discrete cosine
//! transform. The resulting coefficient sequence, together with `[a, b]`, is
//! what the downstream homomorphic series evaluator consumes.

use std::{
    f64::consts::PI,
    ops::{Add, Mul},
};

use num::{Complex, Zero};
use rayon::prelude::*;

use crate::{ApproximationDegree, Result};

/// Compute the Chebyshev coefficients of a real-valued function over
/// `[a, b]`.
///
/// Returns `degree + 1` coefficients. The constant term is returned at the
/// same scale as the other coefficients (no halving); the consuming evaluator
/// owns the basis convention for `coeffs[0]`.
/// [`evaluate_chebyshev_series`] applies that convention in the clear.
///
/// `f` is invoked exactly once per node, in node order.
///
/// # Errors
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
/// `degree == 0`. There is no other failure mode.
///
/// # Example
/// ```
/// use fbs_math::{chebyshev_coefficients, ApproximationDegree};
///
/// let coeffs = chebyshev_coefficients(|x| x * x, -1.0, 1.0, ApproximationDegree(5)).unwrap();
///
/// // x^2 = T_0(x) / 2 + T_2(x) / 2, stored with an unhalved constant term.
/// assert_eq!(coeffs.len(), 6);
/// assert!((coeffs[0] - 1.0).abs() < 1e-12);
/// assert!((coeffs[2] - 0.5).abs() < 1e-12);
/// ```
pub fn chebyshev_coefficients<F>(
    f: F,
    a: f64,
    b: f64,
    degree: ApproximationDegree,
) -> Result<Vec<f64>>
where
    F: Fn(f64) -> f64,
{
    degree.validate()?;
    log::trace!("chebyshev_coefficients a={a} b={b} degree={}", degree.0);

    let samples = chebyshev_nodes(a, b, degree.coefficient_count())
        .map(f)
        .collect::<Vec<_>>();

    Ok(cosine_transform(&samples))
}

/// Compute the Chebyshev coefficients of a complex-valued function over
/// `[a, b]`.
///
/// Identical to [`chebyshev_coefficients`] except that the samples, and
/// therefore the coefficients, are complex. Needed because the values packed
/// into a ciphertext slot may themselves be complex.
///
/// # Errors
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
/// `degree == 0`.
pub fn chebyshev_coefficients_complex<F>(
    f: F,
    a: f64,
    b: f64,
    degree: ApproximationDegree,
) -> Result<Vec<Complex<f64>>>
where
    F: Fn(f64) -> Complex<f64>,
{
    degree.validate()?;
    log::trace!(
        "chebyshev_coefficients_complex a={a} b={b} degree={}",
        degree.0
    );

    let samples = chebyshev_nodes(a, b, degree.coefficient_count())
        .map(f)
        .collect::<Vec<_>>();

    Ok(cosine_transform(&samples))
}

/// Evaluate a coefficient sequence produced by [`chebyshev_coefficients`] at
/// `x` in `[a, b]`, using the Clenshaw recurrence.
///
/// Applies this crate's storage convention: the constant term is halved here
/// rather than in the stored sequence. Intended for validating an
/// approximation in the clear before handing it to the encrypted evaluator.
pub fn evaluate_chebyshev_series(coeffs: &[f64], a: f64, b: f64, x: f64) -> f64 {
    // Map x back onto [-1, 1].
    let s = (2.0 * x - (a + b)) / (b - a);
    let two_s = 2.0 * s;

    let mut b_k1 = 0.0;
    let mut b_k2 = 0.0;

    for &c in coeffs.iter().skip(1).rev() {
        let b_k = two_s * b_k1 - b_k2 + c;
        b_k2 = b_k1;
        b_k1 = b_k;
    }

    s * b_k1 - b_k2 + 0.5 * coeffs.first().copied().unwrap_or(0.0)
}

/// The `n` Chebyshev nodes of `[a, b]`, i.e. the roots of `T_n` mapped onto
/// the interval: `x_i = cos(pi (i + 0.5) / n) (b - a) / 2 + (a + b) / 2`.
fn chebyshev_nodes(a: f64, b: f64, n: usize) -> impl Iterator<Item = f64> {
    let half_width = 0.5 * (b - a);
    let midpoint = 0.5 * (a + b);
    let pi_by_n = PI / n as f64;

    (0..n).map(move |i| (pi_by_n * (i as f64 + 0.5)).cos() * half_width + midpoint)
}

/// Type-II DCT of the node samples: `out[i] = (2/n) sum_j samples[j] *
/// cos(pi i (j + 0.5) / n)`.
///
/// Generic over the sample scalar so the real and complex variants share one
/// transform. Each output entry only reads the sample slice, so the outer
/// loop parallelizes without affecting the per-entry accumulation order.
fn cosine_transform<T>(samples: &[T]) -> Vec<T>
where
    T: Copy + Zero + Add<Output = T> + Mul<f64, Output = T> + Send + Sync,
{
    let n = samples.len();
    let pi_by_n = PI / n as f64;
    let scale = 2.0 / n as f64;

    (0..n)
        .into_par_iter()
        .map(|i| {
            let mut acc = T::zero();

            for (j, &s) in samples.iter().enumerate() {
                acc = acc + s * (pi_by_n * i as f64 * (j as f64 + 0.5)).cos();
            }

            acc * scale
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn zero_degree_is_rejected() {
        let expected = Error::InvalidArgument("the degree of approximation cannot be zero");

        let err = chebyshev_coefficients(|x| x, -1.0, 1.0, ApproximationDegree(0)).unwrap_err();
        assert_eq!(err, expected);

        let err =
            chebyshev_coefficients_complex(|x| Complex::new(x, 0.0), -1.0, 1.0, ApproximationDegree(0))
                .unwrap_err();
        assert_eq!(err, expected);
    }

    #[test]
    fn returns_degree_plus_one_coefficients() {
        for degree in [1, 2, 5, 31] {
            let degree = ApproximationDegree(degree);
            let coeffs = chebyshev_coefficients(f64::sin, -2.0, 2.0, degree).unwrap();

            assert_eq!(coeffs.len(), degree.coefficient_count());
        }
    }

    #[test]
    fn square_function_round_trips_at_the_nodes() {
        let degree = ApproximationDegree(5);
        let coeffs = chebyshev_coefficients(|x| x * x, -1.0, 1.0, degree).unwrap();
        let n = coeffs.len();

        for i in 0..n {
            let x = (PI * (i as f64 + 0.5) / n as f64).cos();
            let err = (evaluate_chebyshev_series(&coeffs, -1.0, 1.0, x) - x * x).abs();

            assert!(err < 1e-9, "node {i}: reconstruction error {err}");
        }
    }

    #[test]
    fn polynomial_inputs_are_reproduced_exactly_between_nodes() {
        // A degree-2 function is inside the degree-5 approximation space, so
        // the interpolant matches it everywhere on the interval, not just at
        // the sampling nodes.
        let coeffs =
            chebyshev_coefficients(|x| x * x, -1.0, 1.0, ApproximationDegree(5)).unwrap();

        for x in [-0.95, -0.5, 0.0, 0.3, 0.77] {
            let err = (evaluate_chebyshev_series(&coeffs, -1.0, 1.0, x) - x * x).abs();
            assert!(err < 1e-12, "x={x}: error {err}");
        }
    }

    #[test]
    fn interval_mapping_samples_the_requested_interval() {
        // On [0, 4], x = 2 T_1(t) + 2 T_0(t) under t = (x - 2) / 2, so the
        // stored sequence (unhalved constant term) is [4, 2, 0, ...].
        let coeffs = chebyshev_coefficients(|x| x, 0.0, 4.0, ApproximationDegree(4)).unwrap();

        assert!((coeffs[0] - 4.0).abs() < 1e-12);
        assert!((coeffs[1] - 2.0).abs() < 1e-12);

        for (i, c) in coeffs.iter().enumerate().skip(2) {
            assert!(c.abs() < 1e-12, "coefficient {i} should vanish, got {c}");
        }
    }

    #[test]
    fn complex_variant_keeps_both_components() {
        let coeffs = chebyshev_coefficients_complex(
            |x| Complex::new(x, -x),
            -1.0,
            1.0,
            ApproximationDegree(3),
        )
        .unwrap();

        assert_eq!(coeffs.len(), 4);
        assert!((coeffs[1] - Complex::new(1.0, -1.0)).norm() < 1e-12);
        assert!(coeffs[0].norm() < 1e-12);
        assert!(coeffs[2].norm() < 1e-12);
    }

    #[test]
    fn identical_inputs_give_bit_identical_output() {
        let degree = ApproximationDegree(17);
        let first = chebyshev_coefficients(f64::exp, -1.0, 1.0, degree).unwrap();
        let second = chebyshev_coefficients(f64::exp, -1.0, 1.0, degree).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn constant_zero_function_is_processed_without_error() {
        let coeffs = chebyshev_coefficients(|_| 0.0, -1.0, 1.0, ApproximationDegree(7)).unwrap();

        assert!(coeffs.iter().all(|c| *c == 0.0));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn length_is_always_degree_plus_one(degree in 1u32..64) {
                let degree = ApproximationDegree(degree);
                let coeffs =
                    chebyshev_coefficients(f64::sin, -3.0, 3.0, degree).unwrap();

                prop_assert_eq!(coeffs.len(), degree.coefficient_count());
                prop_assert!(coeffs.iter().all(|c| c.is_finite()));
            }
        }
    }
}
