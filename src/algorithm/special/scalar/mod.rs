//! Scalar kernels for the incomplete gamma functions
//!
//! # Algorithms
//!
//! - **machine**: epsilon and exponent range probed once per process
//! - **continuants/convergents**: forward recurrence with epsilon rescaling
//! - **abs_summation/limit**: truncation at machine-epsilon relative change
//! - **gamma_below/gamma_above**: DLMF 8.7.1 power series + A&S 6.5.31
//!   continued fraction, split at `x = max(1, a)`

pub mod continued_fraction;
pub mod gamma_functions;
pub mod machine;
pub mod sequence;

pub use continued_fraction::*;
pub use gamma_functions::*;
pub use machine::*;
pub use sequence::*;
