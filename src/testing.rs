//! Tools to test kernels and the measurement protocol
#![allow(dead_code)]
use core::cell::Cell;

use num_complex::Complex;
use num_traits::Float;

use crate::{Clock, Instant};

/// Maximum acceptable error between a computed and actual value given fixed and relative
/// tolerances.
///
/// # Args
/// * `a` - First input.
/// * `b` - Second input. The relative tolerance is computed with respect to the maximum of the
///   absolute values of the first and second inputs.
/// * `rtol` - Relative tolerance.
/// * `atol` - Fixed tolerance.
///
/// # Returns
/// Maximum acceptable error.
pub fn max_error<T: Float>(a: T, b: T, rtol: T, atol: T) -> T {
    rtol * a.abs().max(b.abs()) + atol
}

/// Return whether two numbers are within absolute plus relative tolerance
pub fn isclose<T: Float>(a: T, b: T, rtol: T, atol: T) -> bool {
    (a - b).abs() <= max_error(a, b, rtol, atol)
}

/// Return whether all values are close
pub fn allclose<T: Float>(a: &[T], b: &[T], rtol: T, atol: T) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(a, b)| isclose(*a, *b, rtol, atol))
}

/// Return whether both real and imaginary component are close
pub fn complex_isclose<T: Float>(a: Complex<T>, b: Complex<T>, rtol: T, atol: T) -> bool {
    isclose(a.re, b.re, rtol, atol) && isclose(a.im, b.im, rtol, atol)
}

/// Return whether all complex values are close
pub fn complex_allclose<T: Float>(a: &[Complex<T>], b: &[Complex<T>], rtol: T, atol: T) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b)
            .all(|(a, b)| complex_isclose(*a, *b, rtol, atol))
}

/// Deterministic clock advancing by a fixed step on every reading
#[derive(Debug)]
pub struct StepClock {
    t: Cell<u64>,
    step: u64,
    reads: Cell<usize>,
}

impl StepClock {
    pub fn new(start: u64, step: u64) -> Self {
        Self {
            t: Cell::new(start),
            step,
            reads: Cell::new(0),
        }
    }

    /// Number of readings taken so far
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl Clock for StepClock {
    fn now(&self) -> Instant {
        let t = self.t.get();
        self.t.set(t + self.step);
        self.reads.set(self.reads.get() + 1);
        Instant(t)
    }
}
