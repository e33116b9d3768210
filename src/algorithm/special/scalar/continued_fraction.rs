//! Lazy evaluation of generalized continued fractions
//!
//! A term sequence `(n0, d0), (n1, d1), (n2, d2), ...` represents
//!
//! ```text
//!             n0
//!     ------------------
//!               n1
//!     d0 + -------------
//!                  n2
//!          d1 + --------
//!               d2 + ...
//! ```
//!
//! [`Continuants`] walks the fundamental recurrence forward, one term at a
//! time, and [`Convergents`] divides each continuant out. Nothing is
//! evaluated from the tail, so the caller decides how deep to go by how far
//! it pulls the iterator.

use std::iter::FusedIterator;

use super::machine::{EPSILON, EPSINV};

/// Numerator and denominator of a continued fraction truncated after some
/// term, before division.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Continuant {
    /// Numerator
    pub p: f64,
    /// Denominator, never zero for a yielded continuant
    pub q: f64,
}

impl Continuant {
    /// The convergent `p / q`.
    #[inline]
    pub fn value(&self) -> f64 {
        self.p / self.q
    }

    #[inline]
    fn scale(&mut self, factor: f64) {
        self.p *= factor;
        self.q *= factor;
    }
}

/// Iterator over the continuants of a continued fraction.
///
/// Yields one [`Continuant`] per input term using
///
/// ```text
/// p_k = d_k p_{k-1} + n_k p_{k-2}
/// q_k = d_k q_{k-1} + n_k q_{k-2}
/// ```
///
/// seeded with `(p, q) = (1, 0)` two steps back and `(0, 1)` one step back.
///
/// The recurrence is linear and homogeneous in the two carried pairs, so
/// whenever `|p|` or `|q|` reaches `1/EPSILON` both pairs are multiplied by
/// `EPSILON`. Every ratio is unchanged and the magnitudes stay bounded.
///
/// # Panics
///
/// If a step produces `q == 0`; the term sequence is malformed.
#[derive(Debug, Clone)]
pub struct Continuants<I> {
    terms: I,
    previous: Continuant,
    current: Continuant,
    stage: usize,
    epsilon: f64,
    epsinv: f64,
}

impl<I> Continuants<I>
where
    I: Iterator<Item = (f64, f64)>,
{
    /// Start the recurrence over a term sequence.
    pub fn new<T>(terms: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            terms: terms.into_iter(),
            previous: Continuant { p: 1.0, q: 0.0 },
            current: Continuant { p: 0.0, q: 1.0 },
            stage: 0,
            epsilon: *EPSILON,
            epsinv: *EPSINV,
        }
    }

    /// Number of terms consumed so far.
    #[inline]
    pub fn stage(&self) -> usize {
        self.stage
    }
}

impl<I> Iterator for Continuants<I>
where
    I: Iterator<Item = (f64, f64)>,
{
    type Item = Continuant;

    fn next(&mut self) -> Option<Continuant> {
        let (n, d) = self.terms.next()?;
        let next = Continuant {
            p: d * self.current.p + n * self.previous.p,
            q: d * self.current.q + n * self.previous.q,
        };
        self.previous = self.current;
        self.current = next;

        if self.current.p.abs() >= self.epsinv || self.current.q.abs() >= self.epsinv {
            log::debug!(
                "rescaling continuants at stage {} (p={:e}, q={:e})",
                self.stage,
                self.current.p,
                self.current.q
            );
            self.previous.scale(self.epsilon);
            self.current.scale(self.epsilon);
        }

        assert!(
            self.current.q != 0.0,
            "continued fraction term {} ({}, {}) produced a zero denominator",
            self.stage,
            n,
            d
        );
        self.stage += 1;
        Some(self.current)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.terms.size_hint()
    }
}

impl<I> FusedIterator for Continuants<I> where I: FusedIterator<Item = (f64, f64)> {}

/// Continuants of the continued fraction given by `terms`.
pub fn continuants<T>(terms: T) -> Continuants<T::IntoIter>
where
    T: IntoIterator<Item = (f64, f64)>,
{
    Continuants::new(terms)
}

/// Iterator over the convergents of a continued fraction.
///
/// The first continuant is always divided out. After that, a continuant with
/// a numerator of exactly zero means the fraction has terminated: the input
/// is no longer consulted and the last convergent is repeated forever. The
/// same happens when a finite term sequence runs out, so after the first
/// element the iterator never ends. An empty term sequence yields nothing.
#[derive(Debug, Clone)]
pub struct Convergents<I> {
    continuants: Continuants<I>,
    last: Option<f64>,
    terminated: bool,
}

impl<I> Convergents<I>
where
    I: Iterator<Item = (f64, f64)>,
{
    /// Start evaluating convergents of a term sequence.
    pub fn new<T>(terms: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            continuants: Continuants::new(terms),
            last: None,
            terminated: false,
        }
    }

    /// Whether the fraction has terminated and the last value is repeating.
    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }
}

impl<I> Iterator for Convergents<I>
where
    I: Iterator<Item = (f64, f64)>,
{
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.terminated {
            return self.last;
        }
        match self.continuants.next() {
            Some(c) if c.p == 0.0 && self.last.is_some() => {
                self.terminated = true;
                self.last
            }
            Some(c) => {
                let value = c.value();
                self.last = Some(value);
                Some(value)
            }
            None => {
                self.terminated = true;
                self.last
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.terminated, self.last) {
            (true, None) => (0, Some(0)),
            (_, Some(_)) => (usize::MAX, None),
            (false, None) => (0, None),
        }
    }
}

impl<I> FusedIterator for Convergents<I> where I: Iterator<Item = (f64, f64)> {}

/// Convergents of the continued fraction given by `terms`.
pub fn convergents<T>(terms: T) -> Convergents<T::IntoIter>
where
    T: IntoIterator<Item = (f64, f64)>,
{
    Convergents::new(terms)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, tol: f64) {
        assert!(
            (a - b).abs() < tol,
            "expected {} to be close to {}, diff = {}",
            a,
            b,
            (a - b).abs()
        );
    }

    #[test]
    fn test_continuants_finite_fraction() {
        // 1 / (2 + 1/3) = 3/7
        let cs: Vec<Continuant> = continuants([(1.0, 2.0), (1.0, 3.0)]).collect();
        assert_eq!(cs, [Continuant { p: 1.0, q: 2.0 }, Continuant { p: 3.0, q: 7.0 }]);
        assert_close(cs[1].value(), 3.0 / 7.0, 1e-15);
    }

    #[test]
    fn test_continuants_stage_counts_terms() {
        let mut cs = continuants(std::iter::repeat((1.0, 1.0)));
        assert_eq!(cs.stage(), 0);
        let _ = cs.nth(4);
        assert_eq!(cs.stage(), 5);
    }

    #[test]
    fn test_continuants_size_hint_follows_terms() {
        let cs = continuants(vec![(1.0, 1.0); 7]);
        assert_eq!(cs.size_hint(), (7, Some(7)));
        assert_eq!(cs.count(), 7);
    }

    #[test]
    fn test_golden_ratio() {
        // 1 / (1 + 1 / (1 + ...)) = 1/phi, with Fibonacci continuants
        let cs: Vec<Continuant> = continuants(std::iter::repeat((1.0, 1.0))).take(6).collect();
        let p: Vec<f64> = cs.iter().map(|c| c.p).collect();
        let q: Vec<f64> = cs.iter().map(|c| c.q).collect();
        assert_eq!(p, [1.0, 1.0, 2.0, 3.0, 5.0, 8.0]);
        assert_eq!(q, [1.0, 2.0, 3.0, 5.0, 8.0, 13.0]);

        let inv_phi = (5.0_f64.sqrt() - 1.0) / 2.0;
        let v = convergents(std::iter::repeat((1.0, 1.0))).nth(60).unwrap();
        assert_close(v, inv_phi, 1e-15);
    }

    #[test]
    fn test_rescaling_keeps_values_finite() {
        // y = 1 / (1e10 + y); unscaled continuants overflow after ~31 terms
        let big = 1e10;
        let cs: Vec<Continuant> = continuants(std::iter::repeat((1.0, big))).take(500).collect();
        for c in &cs {
            assert!(c.p.is_finite() && c.q.is_finite());
            assert!(c.q.abs() < *EPSINV);
        }
        let exact = 2.0 / (big + (big * big + 4.0).sqrt());
        let last = cs.last().unwrap().value();
        assert!(((last - exact) / exact).abs() < 1e-15);
    }

    #[test]
    #[should_panic(expected = "zero denominator")]
    fn test_zero_denominator_panics() {
        let _ = continuants([(1.0, 0.0)]).next();
    }

    #[test]
    fn test_convergents_repeat_after_exhaustion() {
        let vs: Vec<f64> = convergents([(1.0, 2.0), (1.0, 3.0)]).take(4).collect();
        assert_eq!(vs, [0.5, 3.0 / 7.0, 3.0 / 7.0, 3.0 / 7.0]);
    }

    #[test]
    fn test_convergents_stop_pulling_after_zero_numerator() {
        // p_2 = d_2 * p_1 = 0, so the fraction terminates at the first value
        let terms = [(1.0, 2.0), (3.0, 0.0)]
            .into_iter()
            .chain(std::iter::from_fn(|| panic!("pulled a term past termination")));
        let mut cv = convergents(terms);
        let vs: Vec<f64> = cv.by_ref().take(5).collect();
        assert_eq!(vs, [0.5; 5]);
        assert!(cv.is_terminated());
    }

    #[test]
    fn test_first_convergent_may_be_zero() {
        let vs: Vec<f64> = convergents([(0.0, 1.0), (1.0, 1.0)]).take(3).collect();
        assert_eq!(vs, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_convergents_empty() {
        let mut cv = convergents(Vec::<(f64, f64)>::new());
        assert_eq!(cv.size_hint(), (0, None));
        assert_eq!(cv.next(), None);
        assert_eq!(cv.next(), None);
        assert_eq!(cv.size_hint(), (0, Some(0)));
    }
}
