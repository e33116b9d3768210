//! Regularized incomplete gamma functions P(a, x) and Q(a, x)
//!
//! # References
//! - DLMF 8.7.1 (power series for the lower function)
//! - Abramowitz & Stegun 6.5.31 (continued fraction for the upper function)

use std::f64::consts::TAU;
use std::iter;

use super::continued_fraction::convergents;
use super::machine::MAXLOG;
use super::sequence::{abs_summation, limit};
use crate::error::{Error, Result};

/// Normalized lower incomplete gamma integral `P(a, x)`.
///
/// ```text
/// P(a, x) = (1/Γ(a)) ∫_0^x e^{-t} t^{a-1} dt
/// ```
///
/// # Algorithm
///
/// For `x <= max(1, a)` the power series
///
/// ```text
///  x^a e^{-x}  /        x          x^2             \
/// ----------- | 1 + ------- + -------------- + ... |
///  a Γ(a)     \     a + 1     (a + 1)(a + 2)       /
/// ```
///
/// obtained from DLMF 8.7.1 by expanding `Γ(a + k + 1) = Γ(a) a (a+1)...(a+k)`.
/// For larger `x` the result is `1 - gamma_above(a, x)`, so the pair is
/// complementary by construction.
///
/// # Panics
///
/// Unless `a` is positive and finite and `x` is nonnegative (NaN fails both).
/// See [`try_gamma_below`] for the checked form.
pub fn gamma_below(a: f64, x: f64) -> f64 {
    try_gamma_below(a, x).unwrap_or_else(|e| panic!("{e}"))
}

/// Normalized upper incomplete gamma integral `Q(a, x) = 1 - P(a, x)`.
///
/// ```text
/// Q(a, x) = (1/Γ(a)) ∫_x^∞ e^{-t} t^{a-1} dt
/// ```
///
/// # Algorithm
///
/// For `x > max(1, a)`, `x^a e^{-x} / Γ(a)` times the continued fraction
///
/// ```text
///                1
///     -----------------------
///               1 - a
///     x + -------------------
///                    1
///         1 + ---------------
///                    2 - a
///             x + -----------
///                        2
///                 1 + -------
///                     x + ...
/// ```
///
/// and `1 - gamma_below(a, x)` otherwise.
///
/// # Panics
///
/// Unless `a` is positive and finite and `x` is nonnegative (NaN fails both).
/// See [`try_gamma_above`] for the checked form.
pub fn gamma_above(a: f64, x: f64) -> f64 {
    try_gamma_above(a, x).unwrap_or_else(|e| panic!("{e}"))
}

/// Checked form of [`gamma_below`].
///
/// # Errors
///
/// [`Error::Domain`] when `a` is not positive and finite or `x` is negative or NaN.
pub fn try_gamma_below(a: f64, x: f64) -> Result<f64> {
    check_domain("gamma_below", a, x)?;
    Ok(lower(a, x))
}

/// Checked form of [`gamma_above`].
///
/// # Errors
///
/// [`Error::Domain`] when `a` is not positive and finite or `x` is negative or NaN.
pub fn try_gamma_above(a: f64, x: f64) -> Result<f64> {
    check_domain("gamma_above", a, x)?;
    Ok(upper(a, x))
}

fn check_domain(function: &'static str, a: f64, x: f64) -> Result<()> {
    if a.is_nan() || a <= 0.0 {
        return Err(Error::domain(function, a, x, "a must be positive"));
    }
    if a.is_infinite() {
        return Err(Error::domain(function, a, x, "a must be finite"));
    }
    if x.is_nan() || x < 0.0 {
        return Err(Error::domain(function, a, x, "x must be nonnegative"));
    }
    Ok(())
}

// lower/upper assume a checked domain. Each hands off to the other at most
// once: x > max(1, a) and x <= max(1, a) never both hold.

fn lower(a: f64, x: f64) -> f64 {
    if x == 0.0 {
        return 0.0;
    }
    if x > a.max(1.0) {
        return 1.0 - upper(a, x);
    }
    let Some(m) = series_prefactor(a, x) else {
        log::trace!("gamma_below(a={a}, x={x}): prefactor underflows");
        return 0.0;
    };

    // t_0 = 1, t_k = t_{k-1} x / (a + k)
    let terms = iter::successors(Some((1.0_f64, 0_u64)), |&(t, k)| {
        let k = k + 1;
        Some((t * x / (a + k as f64), k))
    })
    .map(|(t, _)| t);

    (m * abs_summation(terms)).min(1.0)
}

fn upper(a: f64, x: f64) -> f64 {
    if x <= a.max(1.0) {
        return 1.0 - lower(a, x);
    }
    if x.is_infinite() {
        return 0.0;
    }
    let Some(m) = prefactor(a, x) else {
        log::trace!("gamma_above(a={a}, x={x}): prefactor underflows");
        return 0.0;
    };

    (m * limit(convergents(upper_fraction(a, x)))).min(1.0)
}

/// `x^a e^{-x} / Γ(a)`, or `None` when it is below the smallest representable magnitude.
#[inline]
fn prefactor(a: f64, x: f64) -> Option<f64> {
    let w = a * x.ln() - x - libm::lgamma(a);
    let w = if w.is_finite() {
        w
    } else {
        stirling_log_series_prefactor(a, x) + a.ln()
    };
    exp_above_underflow(w)
}

/// `x^a e^{-x} / Γ(a + 1)`, the series prefactor with the `1/a` folded in.
///
/// Folding keeps subnormal shapes representable: `Γ(a)` alone overflows the
/// exponent there even though `a Γ(a)` is close to one.
#[inline]
fn series_prefactor(a: f64, x: f64) -> Option<f64> {
    let w = a * x.ln() - x - libm::lgamma(a + 1.0);
    let w = if w.is_finite() {
        w
    } else {
        stirling_log_series_prefactor(a, x)
    };
    exp_above_underflow(w)
}

/// `ln(x^a e^{-x} / Γ(a + 1))` from Stirling's formula.
///
/// Only reached once `a ln x` or `lgamma` overflows (`a > 2.5e305`), where the
/// dropped `1/(12a)` correction is far below one ulp. Written in `x - a` so
/// that neither product overflows.
fn stirling_log_series_prefactor(a: f64, x: f64) -> f64 {
    let d = x - a;
    a * (d / a).ln_1p() - d - 0.5 * (TAU.ln() + a.ln())
}

#[inline]
fn exp_above_underflow(w: f64) -> Option<f64> {
    debug_assert!(!w.is_nan(), "prefactor exponent is NaN");
    if w < -*MAXLOG { None } else { Some(w.exp()) }
}

/// Terms of A&S 6.5.31: `(1, x)` then `(k - a, 1), (k, x)` for `k = 1, 2, ...`.
fn upper_fraction(a: f64, x: f64) -> impl Iterator<Item = (f64, f64)> {
    // 1 / (x + ...) without the division
    iter::once((1.0, x)).chain((0_u64..).map(move |i| {
        if i % 2 == 0 {
            ((i / 2) as f64 + 1.0 - a, 1.0)
        } else {
            (((i + 1) / 2) as f64, x)
        }
    }))
}
