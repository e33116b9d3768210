//! Numerical algorithms
//!
//! - [`special`] - Incomplete gamma functions, continued fractions, series reductions

pub mod special;
