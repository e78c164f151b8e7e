//! Runtime mapping from raw samples to output values.

use tactile_core::{MovingAverageFilter, clip, prune, scale};

use crate::error::ConfigError;
use crate::profile::{ControlProfile, ValueRange};
use crate::validation::validate_profile;

/// Processes one input stream according to a [`ControlProfile`].
///
/// Owns the stream's [`MovingAverageFilter`], so use one mapper per stream.
/// Stages run in a fixed order: smoothing, scale, clip, prune. Inversion
/// flips within the input range, so `input.min` maps to `output.max` for
/// any input range.
///
/// # Example
///
/// ```rust
/// use tactile_config::{ControlMapper, ControlProfile};
///
/// let profile = ControlProfile::new("pan").with_output(-1.0, 1.0);
/// let mut mapper = ControlMapper::from_profile(&profile).unwrap();
/// assert_eq!(mapper.process(0.5), 0.0);
/// assert_eq!(mapper.process(1.7), 1.0); // clipped
/// ```
#[derive(Debug, Clone)]
pub struct ControlMapper {
    name: String,
    smoother: Option<MovingAverageFilter>,
    invert: bool,
    input: ValueRange,
    output: ValueRange,
    clip: bool,
    precision: Option<u32>,
}

impl ControlMapper {
    /// Validate `profile` and build its processing stages.
    pub fn from_profile(profile: &ControlProfile) -> Result<Self, ConfigError> {
        if let Err(err) = validate_profile(profile) {
            tracing::warn!(profile = %profile.name, error = %err, "rejected control profile");
            return Err(ConfigError::invalid_profile(&profile.name, err));
        }

        tracing::debug!(
            profile = %profile.name,
            smoothing = ?profile.smoothing,
            "building control mapper"
        );

        Ok(Self {
            name: profile.name.clone(),
            smoother: profile.smoothing.map(|w| MovingAverageFilter::new(Some(w))),
            invert: profile.invert,
            input: profile.input,
            output: profile.output,
            clip: profile.clip,
            precision: profile.precision,
        })
    }

    /// Name of the profile this mapper was built from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Smoothing window, if smoothing is enabled.
    pub fn smoothing_window(&self) -> Option<usize> {
        self.smoother.as_ref().map(MovingAverageFilter::capacity)
    }

    /// Map one raw sample.
    pub fn process(&mut self, raw: f32) -> f32 {
        let smoothed = match self.smoother.as_mut() {
            Some(filter) => filter.update(raw),
            None => raw,
        };

        let (in_from, in_to) = if self.invert {
            (self.input.max, self.input.min)
        } else {
            (self.input.min, self.input.max)
        };
        let mut value = scale(smoothed, in_from, in_to, self.output.min, self.output.max);

        if self.clip {
            value = clip(value, self.output.lower(), self.output.upper());
        }

        match self.precision {
            Some(digits) => prune(value, digits),
            None => value,
        }
    }

    /// Map a sequence of raw samples in order.
    pub fn process_block(&mut self, raw: &[f32]) -> Vec<f32> {
        raw.iter().map(|&x| self.process(x)).collect()
    }
}
