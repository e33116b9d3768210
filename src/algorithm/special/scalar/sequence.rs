//! Truncation rules for convergent series and sequences
//!
//! The reductions never look ahead: they pull one element at a time and stop
//! as soon as the next element can no longer change the answer at working
//! precision. Nothing guards against a sequence that does not converge; pass
//! [`ConvergenceOptions`] with a finite `max_iter` to the `try_*` forms for
//! that.

use std::iter::FusedIterator;

use super::super::types::ConvergenceOptions;
use crate::error::{Error, Result};

/// Relative error of `actual` with respect to `expected`: `|(actual - expected) / expected|`.
#[inline]
pub fn relerr(expected: f64, actual: f64) -> f64 {
    ((actual - expected) / expected).abs()
}

/// Sum a nonnegative sequence that decays to zero without oscillating.
///
/// Stops at the first term whose ratio to the running sum is at most machine
/// epsilon. A finite sequence that runs out first returns its exact sum; an
/// empty one sums to zero.
///
/// # Panics
///
/// On a negative term.
pub fn abs_summation<I>(sequence: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    try_abs_summation(sequence, &ConvergenceOptions::default()).unwrap_or_else(|e| panic!("{e}"))
}

/// Checked form of [`abs_summation`].
///
/// # Errors
///
/// - [`Error::NegativeTerm`] on a negative (or NaN) term
/// - [`Error::NotConverged`] once `options.max_iter` terms are consumed
/// - [`Error::InvalidArgument`] if `options` is malformed
pub fn try_abs_summation<I>(sequence: I, options: &ConvergenceOptions) -> Result<f64>
where
    I: IntoIterator<Item = f64>,
{
    options.validate()?;
    let mut terms = sequence.into_iter();
    let Some(mut sum) = terms.next() else {
        return Ok(0.0);
    };
    check_nonnegative(0, sum)?;

    let mut consumed = 1;
    for term in terms {
        if consumed >= options.max_iter {
            return Err(Error::not_converged("abs_summation", consumed));
        }
        check_nonnegative(consumed, term)?;
        consumed += 1;
        sum += term;
        if term <= options.rtol * sum {
            log::trace!("abs_summation converged after {consumed} terms: {sum:e}");
            return Ok(sum);
        }
    }
    Ok(sum)
}

#[inline]
fn check_nonnegative(index: usize, value: f64) -> Result<()> {
    // NaN fails this too
    if value >= 0.0 {
        Ok(())
    } else {
        Err(Error::NegativeTerm { index, value })
    }
}

/// Limit of a sequence that converges without oscillating.
///
/// Returns the first element whose relative error from its predecessor is at
/// most machine epsilon, or zero as soon as an element is exactly zero. A
/// finite sequence that runs out first returns its last element.
///
/// # Panics
///
/// If the sequence is empty.
pub fn limit<I>(sequence: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    try_limit(sequence, &ConvergenceOptions::default()).unwrap_or_else(|e| panic!("{e}"))
}

/// Checked form of [`limit`].
///
/// # Errors
///
/// - [`Error::EmptySequence`] if there is no element at all
/// - [`Error::NotConverged`] once `options.max_iter` elements are consumed
/// - [`Error::InvalidArgument`] if `options` is malformed
pub fn try_limit<I>(sequence: I, options: &ConvergenceOptions) -> Result<f64>
where
    I: IntoIterator<Item = f64>,
{
    options.validate()?;
    let mut values = sequence.into_iter();
    let mut previous = values.next().ok_or(Error::EmptySequence)?;

    let mut consumed = 1;
    for current in values {
        if consumed >= options.max_iter {
            return Err(Error::not_converged("limit", consumed));
        }
        consumed += 1;
        if current == 0.0 || relerr(previous, current) <= options.rtol {
            log::trace!("limit converged after {consumed} terms: {current:e}");
            return Ok(current);
        }
        previous = current;
    }
    Ok(previous)
}

/// Iterator over the running totals of a sequence.
#[derive(Debug, Clone)]
pub struct PartialSums<I> {
    terms: I,
    sum: Option<f64>,
}

impl<I> Iterator for PartialSums<I>
where
    I: Iterator<Item = f64>,
{
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let term = self.terms.next()?;
        let sum = self.sum.map_or(term, |s| s + term);
        self.sum = Some(sum);
        Some(sum)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.terms.size_hint()
    }
}

impl<I> FusedIterator for PartialSums<I> where I: FusedIterator<Item = f64> {}

/// Running totals `s_0 = t_0, s_k = s_{k-1} + t_k` of a sequence.
pub fn partial_sums<I>(sequence: I) -> PartialSums<I::IntoIter>
where
    I: IntoIterator<Item = f64>,
{
    PartialSums {
        terms: sequence.into_iter(),
        sum: None,
    }
}
