//! Control profile format.

use serde::{Deserialize, Serialize};

/// A closed numeric range. `min` may exceed `max` to describe a reversed
/// mapping.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ValueRange {
    /// Value mapped from/to the start of the range.
    pub min: f32,
    /// Value mapped from/to the end of the range.
    pub max: f32,
}

impl ValueRange {
    /// Create a range.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// The unit interval `[0, 1]`.
    pub const fn unit() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Smaller of the two bounds.
    pub fn lower(&self) -> f32 {
        self.min.min(self.max)
    }

    /// Larger of the two bounds.
    pub fn upper(&self) -> f32 {
        self.min.max(self.max)
    }

    /// Whether both bounds are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::unit()
    }
}

/// How one input control turns raw samples into output values.
///
/// Applied by [`ControlMapper`](crate::ControlMapper) in this order:
/// smoothing, scale `input` onto `output` (flipped when `invert` is set),
/// clip, prune.
///
/// # TOML Format
///
/// ```toml
/// name = "cutoff"
/// description = "Filter cutoff slider"
/// smoothing = 4
/// clip = true
/// precision = 1
///
/// [input]
/// min = 0.0
/// max = 1.0
///
/// [output]
/// min = 20.0
/// max = 20000.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControlProfile {
    /// Unique name within a profile set.
    pub name: String,

    /// Optional human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Moving-average window; absent means no smoothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoothing: Option<usize>,

    /// Flip within the input range, so `input.min` maps to `output.max`.
    #[serde(default)]
    pub invert: bool,

    /// Clip the mapped value to the output range.
    #[serde(default = "default_clip")]
    pub clip: bool,

    /// Round the result to this many decimal digits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,

    /// Range raw samples are expected in.
    #[serde(default)]
    pub input: ValueRange,

    /// Range output values are mapped onto.
    #[serde(default)]
    pub output: ValueRange,
}

fn default_clip() -> bool {
    true
}

impl ControlProfile {
    /// Create an identity profile: unit ranges, clipping on, no smoothing.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            smoothing: None,
            invert: false,
            clip: true,
            precision: None,
            input: ValueRange::unit(),
            output: ValueRange::unit(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the moving-average window.
    pub fn with_smoothing(mut self, window: usize) -> Self {
        self.smoothing = Some(window);
        self
    }

    /// Set the input range.
    pub fn with_input(mut self, min: f32, max: f32) -> Self {
        self.input = ValueRange::new(min, max);
        self
    }

    /// Set the output range.
    pub fn with_output(mut self, min: f32, max: f32) -> Self {
        self.output = ValueRange::new(min, max);
        self
    }

    /// Enable or disable inversion.
    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Enable or disable output clipping.
    pub fn with_clip(mut self, clip: bool) -> Self {
        self.clip = clip;
        self
    }

    /// Round results to `digits` decimal places.
    pub fn with_precision(mut self, digits: u32) -> Self {
        self.precision = Some(digits);
        self
    }
}

impl Default for ControlProfile {
    fn default() -> Self {
        Self::new("untitled")
    }
}
