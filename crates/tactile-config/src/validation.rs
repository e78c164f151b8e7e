//! Control profile validation.
//!
//! Profiles are plain data and can be written by hand, so everything that
//! would make a [`ControlMapper`](crate::ControlMapper) produce surprising
//! output is rejected here rather than left to the numeric core, which never
//! reports errors.
//!
//! # Example
//!
//! ```rust
//! use tactile_config::{ControlProfile, ValidationError, validate_profile};
//!
//! let ok = ControlProfile::new("volume").with_output(0.0, 1.0);
//! assert!(validate_profile(&ok).is_ok());
//!
//! let zero_window = ControlProfile::new("volume").with_smoothing(0);
//! assert!(matches!(
//!     validate_profile(&zero_window),
//!     Err(ValidationError::ZeroSmoothing(_))
//! ));
//! ```

use std::collections::HashSet;
use thiserror::Error;

use crate::profile::{ControlProfile, ValueRange};

/// Largest `precision` accepted; `f32` carries fewer significant digits.
pub const MAX_PRECISION: u32 = 9;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Profile name is empty or whitespace.
    #[error("profile name must not be empty")]
    EmptyName,

    /// Two profiles in one set share a name.
    #[error("duplicate profile name: {0}")]
    DuplicateName(String),

    /// A range bound is `NaN` or infinite.
    #[error("profile '{profile}' has a non-finite {field} range [{min}, {max}]")]
    NonFiniteRange {
        /// Name of the profile.
        profile: String,
        /// Which range (`input` or `output`).
        field: &'static str,
        /// Lower bound as written.
        min: f32,
        /// Upper bound as written.
        max: f32,
    },

    /// `smoothing = 0` would silently mean a window of two.
    #[error(
        "profile '{0}' sets smoothing = 0; omit it to disable smoothing or use a window of 1 or more"
    )]
    ZeroSmoothing(String),

    /// More decimal digits than `f32` can represent.
    #[error("profile '{profile}' precision {precision} exceeds the maximum of {max}")]
    PrecisionTooLarge {
        /// Name of the profile.
        profile: String,
        /// Requested digits.
        precision: u32,
        /// Largest accepted value.
        max: u32,
    },

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Collapse a list of errors into a single result.
fn collect(mut errors: Vec<ValidationError>) -> ValidationResult<()> {
    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}

fn check_range(
    profile: &str,
    field: &'static str,
    range: &ValueRange,
    errors: &mut Vec<ValidationError>,
) {
    if !range.is_finite() {
        errors.push(ValidationError::NonFiniteRange {
            profile: profile.to_string(),
            field,
            min: range.min,
            max: range.max,
        });
    }
}

fn profile_errors(profile: &ControlProfile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if profile.name.trim().is_empty() {
        errors.push(ValidationError::EmptyName);
    }

    check_range(&profile.name, "input", &profile.input, &mut errors);
    check_range(&profile.name, "output", &profile.output, &mut errors);

    if profile.smoothing == Some(0) {
        errors.push(ValidationError::ZeroSmoothing(profile.name.clone()));
    }

    if let Some(precision) = profile.precision
        && precision > MAX_PRECISION
    {
        errors.push(ValidationError::PrecisionTooLarge {
            profile: profile.name.clone(),
            precision,
            max: MAX_PRECISION,
        });
    }

    errors
}

/// Validate a single profile.
///
/// A zero-width input range is allowed: `scale` maps it to the start of the
/// output range.
pub fn validate_profile(profile: &ControlProfile) -> ValidationResult<()> {
    collect(profile_errors(profile))
}

/// Validate every profile in `profiles` and check names are unique.
pub fn validate_profiles<'a>(
    profiles: impl IntoIterator<Item = &'a ControlProfile>,
) -> ValidationResult<()> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for profile in profiles {
        errors.extend(profile_errors(profile));
        if !seen.insert(profile.name.as_str()) {
            errors.push(ValidationError::DuplicateName(profile.name.clone()));
        }
    }

    collect(errors)
}
