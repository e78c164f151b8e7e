//! Tactile Core - numeric primitives for interactive input
//!
//! This crate turns raw, noisy, continuously-varying input samples (pointer
//! coordinates, slider drags, generated control values) into smoothed,
//! range-mapped, or geometrically/acoustically transformed values that a
//! rendering or audio layer can consume directly.
//!
//! # Core Abstractions
//!
//! ## Smoothing
//!
//! - [`MovingAverageFilter`] - Bounded-window moving average over the most
//!   recent samples of one input stream
//!
//! ## Range Mapping
//!
//! - [`clip`], [`normalize`], [`scale`], [`invert`], [`interp`], [`prune`]
//! - [`cycle`] - Advance a bounded counter
//!
//! ## Acoustic Conversions
//!
//! - [`mtof`] - MIDI note number to frequency
//! - [`octave`] - Octave shift to frequency multiplier
//! - [`gain_to_db`] - Linear gain to decibels
//!
//! ## Geometry
//!
//! - [`to_polar`] / [`to_cartesian`] - Screen-space coordinate conversions
//! - [`distance`] - Euclidean distance between two points
//!
//! ## Randomness
//!
//! - [`ri`] / [`rf`] - Random integers and floats within resolved bounds
//! - [`pick`] - Uniform choice from a slice
//! - [`coin`] - Weighted coin toss
//!
//! # Numeric Sentinels
//!
//! Nothing in this crate returns an error. Degenerate input (an empty
//! sequence, a zero-width range, a non-positive gain) yields the IEEE-754
//! result of the arithmetic (`NaN`, `±inf`) so the hot input path never
//! branches on failure. The only documented panic is [`pick`] on an empty
//! slice.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature and
//! use the `*_with` random functions with a generator of your choice:
//!
//! ```toml
//! [dependencies]
//! tactile-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use tactile_core::{MovingAverageFilter, clip, scale};
//!
//! let mut smoother = MovingAverageFilter::new(Some(4));
//! for raw in [0.10, 0.12, 0.55, 0.14] {
//!     let smoothed = smoother.update(raw);
//!     let cutoff = clip(scale(smoothed, 0.0, 1.0, 20.0, 20000.0), 20.0, 20000.0);
//!     assert!((20.0..=20000.0).contains(&cutoff));
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod geometry;
pub mod math;
pub mod moving_average;
pub mod random;

// Re-export main types at crate root
pub use geometry::{CartesianCoord, PolarCoord, distance, to_cartesian, to_polar};
pub use math::{
    Counter, average, clip, cycle, gain_to_db, interp, invert, mtof, normalize, octave, prune,
    scale,
};
pub use moving_average::MovingAverageFilter;
pub use random::{DEFAULT_COIN_ODDS, coin_with, pick_with, rf_with, ri_with};

#[cfg(feature = "std")]
pub use random::{coin, pick, rf, ri};
