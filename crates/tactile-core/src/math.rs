//! Stateless numeric transforms for control values.
//!
//! All functions are pure, allocation-free and suitable for `no_std`. None of
//! them guard against degenerate input: a zero-width range, an empty slice or
//! a non-positive gain produces the IEEE-754 result of the arithmetic
//! (`NaN`, `±inf`) and that sentinel flows on into whatever the caller does
//! next.
//!
//! # Range Mapping
//!
//! | Function | Maps | Degenerate input |
//! |----------|------|------------------|
//! | [`clip`] | clamp into `[min, max]` | `min > max` returns `min` |
//! | [`normalize`] | `[min, max]` → `[0, 1]` | `min == max` gives `±inf`/`NaN` |
//! | [`scale`] | `[in_min, in_max]` → `[out_min, out_max]` | `in_min == in_max` returns `out_min` |
//! | [`interp`] | `[0, 1]` → `[min, max]` | extrapolates, never clamps |
//! | [`invert`] | `[0, 1]` → `[1, 0]` | extrapolates, never clamps |
//!
//! # Acoustic Conversions
//!
//! - [`mtof`] - MIDI note to Hz (12-TET, A4 = 440 Hz)
//! - [`octave`] - Octaves to frequency ratio
//! - [`gain_to_db`] - Linear gain to dB
//!
//! # Utilities
//!
//! - [`prune`] - Round to a number of decimal digits
//! - [`cycle`] - Advance a wrapping counter
//! - [`average`] - Arithmetic mean of a slice

use libm::{exp2f, log10f, pow, round};

/// Frequency of MIDI note 69 (A4) in Hz.
const A4_HZ: f32 = 440.0;

/// MIDI note number of A4.
const A4_NOTE: f32 = 69.0;

/// Clamp a value into `[min, max]`.
///
/// Computed as `max(min, min(value, max))`. The composition is order
/// sensitive: when `min > max` the result is `min` for every input. A `NaN`
/// value propagates.
///
/// # Example
/// ```rust
/// use tactile_core::clip;
///
/// assert_eq!(clip(11.0, 0.0, 10.0), 10.0);
/// assert_eq!(clip(-1.0, 0.0, 10.0), 0.0);
/// assert_eq!(clip(5.0, 10.0, 0.0), 10.0);
/// ```
#[inline]
pub fn clip(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        return value;
    }
    // Not f32::clamp, which panics on an inverted range.
    min.max(value.min(max))
}

/// Map `value` from `[min, max]` onto `[0, 1]`.
///
/// Yields `±inf` or `NaN` when `min == max`.
#[inline]
pub fn normalize(value: f32, min: f32, max: f32) -> f32 {
    (value - min) / (max - min)
}

/// Linearly remap `in_num` from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// Either range may be reversed. Values outside the input range extrapolate.
/// A zero-width input range returns `out_min` exactly instead of `NaN`.
///
/// # Arguments
/// * `in_num` - Value to remap
/// * `in_min`, `in_max` - Source range
/// * `out_min`, `out_max` - Destination range
///
/// # Example
/// ```rust
/// use tactile_core::scale;
///
/// assert_eq!(scale(0.5, 0.0, 1.0, 0.0, 10.0), 5.0);
/// assert!((scale(0.9, 0.0, 1.0, 1.0, 0.0) - 0.1).abs() < 1e-6);
/// assert_eq!(scale(3.0, 5.0, 5.0, 0.0, 10.0), 0.0);
/// ```
#[inline]
pub fn scale(in_num: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    if in_min == in_max {
        return out_min;
    }
    (in_num - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Round `data` to `digits` decimal places.
///
/// Ties round away from zero. The result is still subject to `f32`
/// representation, so `prune(0.1234, 2)` is the `f32` nearest to `0.12`.
///
/// Rounding happens in `f64`. When `data` carries no digits below the
/// requested place, or the scaled value would overflow, `data` is returned
/// unchanged.
///
/// # Example
/// ```rust
/// use tactile_core::prune;
///
/// assert_eq!(prune(7.6, 0), 8.0);
/// assert_eq!(prune(1e30, 9), 1e30);
/// ```
#[inline]
pub fn prune(data: f32, digits: u32) -> f32 {
    let magnitude = pow(10.0, f64::from(digits));
    let scaled = f64::from(data) * magnitude;
    if !scaled.is_finite() {
        return data;
    }
    (round(scaled) / magnitude) as f32
}

/// Flip a value in `[0, 1]`, mapping 0 to 1 and 1 to 0.
///
/// Defined as `scale(in_num, 1, 0, 0, 1)`, so values outside the unit
/// interval extrapolate linearly rather than clamping.
#[inline]
pub fn invert(in_num: f32) -> f32 {
    scale(in_num, 1.0, 0.0, 0.0, 1.0)
}

/// Convert a MIDI note number to frequency in Hz.
///
/// Twelve-tone equal temperament referenced to A4 = 440 Hz:
/// `440 · 2^((midi - 69) / 12)`. Fractional notes give detuned pitches.
///
/// # Example
/// ```rust
/// use tactile_core::mtof;
///
/// assert_eq!(mtof(69.0), 440.0);
/// assert!((mtof(60.0) - 261.62557).abs() < 1e-3);
/// ```
#[inline]
pub fn mtof(midi: f32) -> f32 {
    A4_HZ * exp2f((midi - A4_NOTE) / 12.0)
}

/// Linear interpolation from `min` (at `loc = 0`) to `max` (at `loc = 1`).
///
/// `loc` outside `[0, 1]` extrapolates.
#[inline]
pub fn interp(loc: f32, min: f32, max: f32) -> f32 {
    loc * (max - min) + min
}

/// Frequency multiplier for a shift of `num` octaves: `2^num`.
///
/// Fractional and negative shifts are allowed.
#[inline]
pub fn octave(num: f32) -> f32 {
    exp2f(num)
}

/// A value [`cycle`] can advance by one.
///
/// Integer counters saturate at their maximum instead of overflowing.
pub trait Counter: Copy + PartialOrd {
    /// `self + 1`.
    fn step(self) -> Self;
}

macro_rules! impl_counter_int {
    ($($t:ty),*) => {$(
        impl Counter for $t {
            #[inline]
            fn step(self) -> Self {
                self.saturating_add(1)
            }
        }
    )*};
}

macro_rules! impl_counter_float {
    ($($t:ty),*) => {$(
        impl Counter for $t {
            #[inline]
            fn step(self) -> Self {
                self + 1.0
            }
        }
    )*};
}

impl_counter_int!(i32, i64, u32, u64, usize);
impl_counter_float!(f32, f64);

/// Advance a bounded counter.
///
/// Returns `input + 1`, or `min` once that reaches or exceeds `max`.
/// Fractional counters keep their offset: `cycle(0.5, 0.0, 2.0)` is `1.5`.
///
/// # Example
/// ```rust
/// use tactile_core::cycle;
///
/// assert_eq!(cycle(6, 0, 8), 7);
/// assert_eq!(cycle(7, 0, 8), 0);
/// assert_eq!(cycle(0.5, 0.0, 2.0), 1.5);
/// assert_eq!(cycle(1.5, 0.0, 2.0), 0.0);
/// ```
#[inline]
pub fn cycle<T: Counter>(input: T, min: T, max: T) -> T {
    let next = input.step();
    if next >= max { min } else { next }
}

/// Arithmetic mean of `data`.
///
/// An empty slice divides zero by zero and returns `NaN`.
#[inline]
pub fn average(data: &[f32]) -> f32 {
    let sum: f32 = data.iter().sum();
    sum / data.len() as f32
}

/// Convert linear gain to decibels: `20 · log10(gain)`.
///
/// Unlike a metering conversion this does not floor its input: `0` gives
/// `-inf` and negative gain gives `NaN`.
///
/// # Example
/// ```rust
/// use tactile_core::gain_to_db;
///
/// assert_eq!(gain_to_db(1.0), 0.0);
/// assert!((gain_to_db(0.5) + 6.0206).abs() < 1e-3);
/// assert_eq!(gain_to_db(0.0), f32::NEG_INFINITY);
/// ```
#[inline]
pub fn gain_to_db(gain: f32) -> f32 {
    20.0 * log10f(gain)
}
