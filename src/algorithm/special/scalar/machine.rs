//! Floating-point limits probed at runtime
//!
//! The values are measured on the executing hardware instead of being read
//! from `f64::EPSILON` / `f64::MAX_EXP`, and the probe runs once per process.

use std::sync::LazyLock;

/// Limits of the working `f64` representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachineConstants {
    /// Smallest power of two `e` with `1 + e/2 == 1`
    pub epsilon: f64,
    /// `1 / epsilon`
    pub epsinv: f64,
    /// Largest exponent `k` such that `2^k` is finite
    pub emax: i32,
    /// `ln 2^(emax + 1)`, the log of the largest representable magnitude
    pub maxlog: f64,
}

impl MachineConstants {
    /// Measure the limits by repeated doubling and halving.
    ///
    /// Prefer [`MACHINE`], which caches the result. Calling this again is
    /// wasteful but returns the same values.
    pub fn probe() -> Self {
        let mut emax = 0;
        let mut unit = 1.0_f64;
        while (unit * 2.0).is_finite() {
            unit *= 2.0;
            emax += 1;
        }

        let mut epsilon = 1.0_f64;
        while 1.0 + epsilon / 2.0 != 1.0 {
            epsilon /= 2.0;
        }

        // ln 2^(emax + 1) = ln 2 + ln 2^emax
        let maxlog = std::f64::consts::LN_2 + unit.ln();

        debug_assert!(0.0 < epsilon && epsilon < 1.0);
        debug_assert!(maxlog > 0.0 && maxlog.is_finite());

        Self {
            epsilon,
            epsinv: 1.0 / epsilon,
            emax,
            maxlog,
        }
    }
}

/// Process-wide machine limits, probed on first use.
pub static MACHINE: LazyLock<MachineConstants> = LazyLock::new(MachineConstants::probe);

/// Machine epsilon: relative tolerance of every default stopping rule.
pub static EPSILON: LazyLock<f64> = LazyLock::new(|| MACHINE.epsilon);

/// Reciprocal of [`EPSILON`]: continuants at or above it get rescaled.
pub static EPSINV: LazyLock<f64> = LazyLock::new(|| MACHINE.epsinv);

/// Largest binary exponent that does not overflow.
pub static EMAX: LazyLock<i32> = LazyLock::new(|| MACHINE.emax);

/// Log of the largest finite magnitude; prefactors below `exp(-MAXLOG)` are zero.
pub static MAXLOG: LazyLock<f64> = LazyLock::new(|| MACHINE.maxlog);
