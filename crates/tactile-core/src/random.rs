//! Randomized value generators.
//!
//! Every generator comes in two forms:
//!
//! - `*_with` takes any [`rand::Rng`]. Use it with a seeded generator for
//!   reproducible sequences, or on `no_std` targets.
//! - The short form ([`ri`], [`rf`], [`pick`], [`coin`]) draws from
//!   [`rand::thread_rng`] and needs the `std` feature.
//!
//! # Bound Resolution
//!
//! [`ri`] and [`rf`] accept an optional second bound. When it is `None`, or
//! `Some` zero (or `NaN` for floats), the call is read as a single-bound call
//! from `0` to `bound1`. The two bounds are then ordered, so
//! `ri(10, Some(2))` and `ri(2, Some(10))` draw from the same range. Passing
//! an explicit zero is indistinguishable from omitting the bound; since the
//! bounds are ordered afterwards, both readings give the same range. A `NaN`
//! second bound is the one case where the rule is observable: `rf(5.0,
//! Some(f32::NAN))` draws from `[0, 5)` instead of returning `NaN`.

use rand::Rng;

/// Probability used by [`coin`] when no odds are given.
pub const DEFAULT_COIN_ODDS: f32 = 0.5;

/// Resolve an optional second bound into an ordered `(low, high)` pair.
#[inline]
fn resolve_bounds<T: PartialOrd + Copy>(bound1: T, bound2: Option<T>, zero: T) -> (T, T) {
    let (a, b) = match bound2 {
        Some(b) => (bound1, b),
        None => (zero, bound1),
    };
    if a <= b { (a, b) } else { (b, a) }
}

/// Random integer in `[low, high)` drawn from `rng`.
///
/// See the [module docs](self) for how `bound2` is resolved. When the
/// resolved bounds are equal the single value is returned.
#[doc(alias = "random_int")]
pub fn ri_with<R: Rng + ?Sized>(rng: &mut R, bound1: i32, bound2: Option<i32>) -> i32 {
    let (low, high) = resolve_bounds(bound1, bound2.filter(|&b| b != 0), 0);
    if low < high {
        rng.gen_range(low..high)
    } else {
        low
    }
}

/// Random float in `[low, high)` drawn from `rng`.
///
/// See the [module docs](self) for how `bound2` is resolved. Equal bounds
/// return that bound; a `NaN` `bound1` returns `NaN`.
///
/// The draw is `low + u · (high - low)` with `u` uniform in `[0, 1)`,
/// computed in `f64` so spans wider than `f32::MAX` stay finite. An infinite
/// bound yields the IEEE result of that formula (`±inf` or `NaN`).
#[doc(alias = "random_float")]
pub fn rf_with<R: Rng + ?Sized>(rng: &mut R, bound1: f32, bound2: Option<f32>) -> f32 {
    let bound2 = bound2.filter(|b| *b != 0.0 && !b.is_nan());
    let (low, high) = resolve_bounds(bound1, bound2, 0.0);
    if low < high {
        let span = f64::from(high) - f64::from(low);
        let value = (f64::from(low) + rng.r#gen::<f64>() * span) as f32;
        // Narrowing to f32 can round up onto the excluded bound.
        if value >= high && high.is_finite() {
            next_below(high)
        } else {
            value
        }
    } else if low == high {
        low
    } else {
        f32::NAN
    }
}

/// Largest `f32` strictly below the finite value `x`.
fn next_below(x: f32) -> f32 {
    if x == 0.0 {
        -f32::from_bits(1)
    } else if x > 0.0 {
        f32::from_bits(x.to_bits() - 1)
    } else {
        f32::from_bits(x.to_bits() + 1)
    }
}

/// Choose one element of `items` uniformly at random using `rng`.
///
/// # Panics
///
/// `items` must not be empty; an empty slice panics.
pub fn pick_with<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Weighted coin toss using `rng`: `1` with probability `odds`, else `0`.
///
/// `None` uses [`DEFAULT_COIN_ODDS`]. The draw is uniform in `[0, 1)` and
/// compared with `<`, so `odds = 0` never returns `1` and `odds = 1` always
/// does.
pub fn coin_with<R: Rng + ?Sized>(rng: &mut R, odds: Option<f32>) -> u8 {
    let odds = odds.unwrap_or(DEFAULT_COIN_ODDS);
    u8::from(rng.r#gen::<f32>() < odds)
}

/// Random integer in `[low, high)` from the thread-local generator.
///
/// # Example
/// ```rust
/// use tactile_core::ri;
///
/// let die = ri(1, Some(7));
/// assert!((1..7).contains(&die));
///
/// // Single-bound form draws from [0, 4)
/// assert!((0..4).contains(&ri(4, None)));
/// ```
#[cfg(feature = "std")]
#[doc(alias = "random_int")]
pub fn ri(bound1: i32, bound2: Option<i32>) -> i32 {
    ri_with(&mut rand::thread_rng(), bound1, bound2)
}

/// Random float in `[low, high)` from the thread-local generator.
#[cfg(feature = "std")]
#[doc(alias = "random_float")]
pub fn rf(bound1: f32, bound2: Option<f32>) -> f32 {
    rf_with(&mut rand::thread_rng(), bound1, bound2)
}

/// Choose one element of `items` uniformly at random.
///
/// # Panics
///
/// `items` must not be empty; an empty slice panics.
///
/// # Example
/// ```rust
/// use tactile_core::pick;
///
/// let colors = ["red", "green", "blue"];
/// assert!(colors.contains(pick(&colors)));
/// ```
#[cfg(feature = "std")]
pub fn pick<T>(items: &[T]) -> &T {
    pick_with(&mut rand::thread_rng(), items)
}

/// Weighted coin toss: `1` with probability `odds` (default 0.5), else `0`.
#[cfg(feature = "std")]
pub fn coin(odds: Option<f32>) -> u8 {
    coin_with(&mut rand::thread_rng(), odds)
}
