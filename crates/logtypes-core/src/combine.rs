//! Stable log-domain combinators
//!
//! These compute `log(exp(a) ± exp(b))` without evaluating `exp` of a
//! positive argument, so neither term can overflow, and `ln_1p` keeps full
//! precision when the smaller term is negligible next to the larger one.

/// Compute `log(exp(a) + exp(b))`.
///
/// If either argument is NaN the result is NaN. `-inf` is the log of zero,
/// so `logaddexp(a, -inf) == a`.
///
/// ```rust
/// use logtypes_core::logaddexp;
///
/// let sum = logaddexp(2f64.ln(), 3f64.ln());
/// assert!((sum.exp() - 5.0).abs() < 1e-12);
/// assert_eq!(logaddexp(f64::NEG_INFINITY, 1.5), 1.5);
/// ```
#[inline]
pub fn logaddexp(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        return f64::NAN;
    }
    let m = if a > b { a } else { b };
    // `inf - inf` would poison the correction term
    if m.is_infinite() {
        return m;
    }
    m + (-(a - b).abs()).exp().ln_1p()
}

/// Compute `log(exp(a) - exp(b))`.
///
/// The difference of two non-negative reals is only representable when
/// `a >= b`: `a < b` yields NaN and `a == b` yields `-inf` (exact zero).
///
/// ```rust
/// use logtypes_core::logsubexp;
///
/// let diff = logsubexp(5f64.ln(), 2f64.ln());
/// assert!((diff.exp() - 3.0).abs() < 1e-12);
/// assert!(logsubexp(0.0, 1.0).is_nan());
/// assert_eq!(logsubexp(1.0, 1.0), f64::NEG_INFINITY);
/// ```
#[inline]
pub fn logsubexp(a: f64, b: f64) -> f64 {
    if a < b {
        return f64::NAN;
    }
    if a == b {
        return f64::NEG_INFINITY;
    }
    a + (-(b - a).exp()).ln_1p()
}

/// Natural log that never traps on out-of-domain input.
///
/// Negative values map to NaN and zero maps to `-inf`.
#[inline]
pub fn log_no_fp_error(value: f64) -> f64 {
    if value < 0.0 {
        return f64::NAN;
    }
    if value == 0.0 {
        return f64::NEG_INFINITY;
    }
    value.ln()
}
