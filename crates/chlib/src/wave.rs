//! Element-wise sine-wave generators.
//!
//! Small sampling helpers over [`Real`] buffers: plain sine of a sample
//! grid, and a parameterized wave `amp * sin(freq * t - phase)`. Each
//! generator comes in an allocating form and an `_into` form that fills a
//! caller-supplied buffer of the same length.

use crate::real::Real;

/// Sine of every sample in `t`.
pub fn sin_array(t: &[Real]) -> Vec<Real> {
    t.iter().map(|x| x.sin()).collect()
}

/// Sine of every sample in `t`, written into `out`.
///
/// Panics if `t` and `out` have different lengths.
pub fn sin_array_into(t: &[Real], out: &mut [Real]) {
    assert_eq!(
        t.len(),
        out.len(),
        "sample and output buffers must have equal length"
    );
    for (dst, x) in out.iter_mut().zip(t.iter()) {
        *dst = x.sin();
    }
}

/// Samples `amp * sin(freq * t - phase)` over the grid `t`.
pub fn sine_wave(t: &[Real], amp: Real, freq: Real, phase: Real) -> Vec<Real> {
    t.iter().map(|x| amp * (freq * x - phase).sin()).collect()
}

/// Samples `amp * sin(freq * t - phase)` into `out`.
///
/// Panics if `t` and `out` have different lengths.
pub fn sine_wave_into(t: &[Real], out: &mut [Real], amp: Real, freq: Real, phase: Real) {
    assert_eq!(
        t.len(),
        out.len(),
        "sample and output buffers must have equal length"
    );
    for (dst, x) in out.iter_mut().zip(t.iter()) {
        *dst = amp * (freq * x - phase).sin();
    }
}
