//! Error types for incgamma

use thiserror::Error;

/// Result type alias using incgamma's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while evaluating series, continued fractions and
/// the incomplete gamma functions
///
/// Every variant is a broken caller contract. The plain entry points
/// ([`gamma_below`](crate::gamma_below), [`abs_summation`](crate::abs_summation), ...)
/// panic with the variant's message; the `try_*` entry points return it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Arguments outside the domain of an incomplete gamma function
    #[error("{function}(a={a}, x={x}) is undefined: {reason}")]
    Domain {
        /// The function that rejected its arguments
        function: &'static str,
        /// Shape parameter
        a: f64,
        /// Integration bound
        x: f64,
        /// Which precondition failed
        reason: &'static str,
    },

    /// A negative term was fed to a summation that requires nonnegative terms
    #[error("term {index} of a nonnegative series is negative: {value}")]
    NegativeTerm {
        /// Zero-based position of the term in the sequence
        index: usize,
        /// The offending term
        value: f64,
    },

    /// A reduction was asked for the limit of a sequence with no elements
    #[error("cannot take the limit of an empty sequence")]
    EmptySequence,

    /// The stopping rule was not met within the iteration budget
    #[error("{op} did not converge after {iterations} terms")]
    NotConverged {
        /// The reduction that gave up
        op: &'static str,
        /// Number of terms consumed
        iterations: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create a domain error for an incomplete gamma function
    pub fn domain(function: &'static str, a: f64, x: f64, reason: &'static str) -> Self {
        Self::Domain {
            function,
            a,
            x,
            reason,
        }
    }

    /// Create a not-converged error
    pub fn not_converged(op: &'static str, iterations: usize) -> Self {
        Self::NotConverged { op, iterations }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Returns true if the error reports arguments outside a function's domain
    #[inline]
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }
}
