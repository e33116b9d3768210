//! Regularized incomplete gamma functions and the sequence machinery under them
//!
//! # Functions Provided
//!
//! ## Incomplete Gamma
//! - [`gamma_below`] - Lower regularized incomplete gamma P(a,x)
//! - [`gamma_above`] - Upper regularized incomplete gamma Q(a,x) = 1 - P(a,x)
//!
//! ## Continued Fractions
//! - [`continuants`] - Numerator/denominator pairs, rescaled against overflow
//! - [`convergents`] - Successive truncated values
//!
//! ## Sequence Reductions
//! - [`abs_summation`] - Sum of a decaying nonnegative series
//! - [`limit`] - Limit of a non-oscillating sequence
//! - [`partial_sums`] - Running totals
//! - [`relerr`] - Relative error
//!
//! # Why not `1 - P` everywhere?
//!
//! The series for P converges fast only for `x <= max(1, a)` and the
//! continued fraction for Q only beyond it. Each function evaluates whichever
//! representation is well-conditioned and takes the complement of it, so
//! `gamma_below(a, x) + gamma_above(a, x) == 1` up to one rounding.

pub mod scalar;
pub mod types;

pub use scalar::*;
pub use types::ConvergenceOptions;
