//! Built-in control profiles.
//!
//! A small catalogue covering the controls most toolkits start with. Each
//! profile is valid and its name is unique.

use crate::profile::ControlProfile;

/// Names of all factory profiles, in catalogue order.
pub const FACTORY_PROFILE_NAMES: &[&str] = &["pointer", "volume", "cutoff", "pan"];

/// All factory profiles.
pub fn factory_profiles() -> Vec<ControlProfile> {
    vec![
        ControlProfile::new("pointer")
            .with_description("Pointer coordinate, lightly smoothed, passed through unclipped")
            .with_smoothing(4)
            .with_input(0.0, 1.0)
            .with_output(0.0, 1.0)
            .with_clip(false),
        ControlProfile::new("volume")
            .with_description("Fader position to linear gain")
            .with_smoothing(2)
            .with_output(0.0, 1.0)
            .with_precision(3),
        ControlProfile::new("cutoff")
            .with_description("Slider position to filter cutoff in Hz")
            .with_smoothing(6)
            .with_output(20.0, 20000.0)
            .with_precision(1),
        ControlProfile::new("pan")
            .with_description("Knob position to stereo pan, left to right")
            .with_smoothing(3)
            .with_output(-1.0, 1.0)
            .with_precision(2),
    ]
}

/// Look up a factory profile by name (case-insensitive).
pub fn get_factory_profile(name: &str) -> Option<ControlProfile> {
    factory_profiles()
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Names of all factory profiles.
pub fn factory_profile_names() -> &'static [&'static str] {
    FACTORY_PROFILE_NAMES
}

/// Whether `name` is a factory profile (case-insensitive).
pub fn is_factory_profile(name: &str) -> bool {
    FACTORY_PROFILE_NAMES
        .iter()
        .any(|n| n.eq_ignore_ascii_case(name))
}
