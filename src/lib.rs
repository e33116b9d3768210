//! # incgamma
//!
//! **Regularized incomplete gamma functions from overflow-safe continued
//! fractions and power series.**
//!
//! ## Why incgamma?
//!
//! - **Full range**: matches the reference C library across the `f64` range
//! - **Exactly complementary**: `gamma_below + gamma_above == 1` by construction
//! - **Lazy building blocks**: continuants, convergents and series reductions
//!   are plain iterators you can reuse for other fractions and series
//!
//! ## Quick Start
//!
//! ```rust
//! use incgamma::prelude::*;
//!
//! let p = gamma_below(2.0, 3.0);
//! let q = gamma_above(2.0, 3.0);
//! assert!((p + q - 1.0).abs() < 1e-15);
//!
//! // 1 / (1 + 1 / (1 + ...)) = 1/phi
//! let inv_phi = limit(convergents(std::iter::repeat((1.0, 1.0))));
//! assert!((inv_phi - 0.618_033_988_749_895).abs() < 1e-15);
//! ```
//!
//! ## Contracts
//!
//! Arguments outside a function's domain are caller bugs. The plain
//! functions panic with an [`Error`](error::Error) message; the `try_*`
//! functions return it instead.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod error;

pub use algorithm::special::{
    ConvergenceOptions, EMAX, EPSILON, EPSINV, MACHINE, MAXLOG, abs_summation, continuants,
    convergents, gamma_above, gamma_below, limit, partial_sums, relerr, try_abs_summation,
    try_gamma_above, try_gamma_below, try_limit,
};
pub use error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::special::{
        ConvergenceOptions, abs_summation, convergents, gamma_above, gamma_below, limit,
        partial_sums, relerr, try_gamma_above, try_gamma_below,
    };
    pub use crate::error::{Error, Result};
}
