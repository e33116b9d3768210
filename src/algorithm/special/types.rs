//! Options for the checked sequence reductions

use super::scalar::EPSILON;
use crate::error::{Error, Result};

/// Stopping rule for [`try_abs_summation`](super::try_abs_summation) and
/// [`try_limit`](super::try_limit)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceOptions {
    /// Relative tolerance of the stopping rule (default: machine epsilon)
    pub rtol: f64,
    /// Maximum number of terms to consume (default: unbounded)
    pub max_iter: usize,
}

impl Default for ConvergenceOptions {
    fn default() -> Self {
        Self {
            rtol: *EPSILON,
            max_iter: usize::MAX,
        }
    }
}

impl ConvergenceOptions {
    /// Default stopping rule with a bounded number of terms.
    pub fn bounded(max_iter: usize) -> Self {
        Self {
            max_iter,
            ..Self::default()
        }
    }

    /// Replace the relative tolerance.
    pub fn with_rtol(mut self, rtol: f64) -> Self {
        self.rtol = rtol;
        self
    }

    /// Replace the iteration budget.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.rtol.is_nan() || self.rtol <= 0.0 || self.rtol >= 1.0 {
            return Err(Error::invalid_argument(
                "rtol",
                format!("must lie in (0, 1), got {}", self.rtol),
            ));
        }
        if self.max_iter == 0 {
            return Err(Error::invalid_argument("max_iter", "must be at least 1"));
        }
        Ok(())
    }
}
