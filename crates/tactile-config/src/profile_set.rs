//! Profile set file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::profile::ControlProfile;
use crate::validation::{ValidationResult, validate_profiles};

/// A named collection of control profiles, stored as one TOML file.
///
/// # TOML Format
///
/// ```toml
/// name = "Synth panel"
///
/// [[profiles]]
/// name = "cutoff"
/// smoothing = 4
/// [profiles.output]
/// min = 20.0
/// max = 20000.0
///
/// [[profiles]]
/// name = "pan"
/// [profiles.output]
/// min = -1.0
/// max = 1.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileSet {
    /// Name of the set.
    pub name: String,

    /// Optional description of the set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Profiles in declaration order.
    #[serde(default)]
    pub profiles: Vec<ControlProfile>,
}

impl ProfileSet {
    /// Create an empty set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            profiles: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a profile.
    pub fn with_profile(mut self, profile: ControlProfile) -> Self {
        self.profiles.push(profile);
        self
    }

    /// Add several profiles.
    pub fn with_profiles(mut self, profiles: impl IntoIterator<Item = ControlProfile>) -> Self {
        self.profiles.extend(profiles);
        self
    }

    /// Load a profile set from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read(path, e))?;
        let set: ProfileSet =
            toml::from_str(&content).map_err(|e| ConfigError::parse(path, e))?;
        tracing::debug!(
            path = %path.display(),
            profiles = set.profiles.len(),
            "loaded profile set"
        );
        Ok(set)
    }

    /// Load a profile set from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(ConfigError::ParseProfileText)
    }

    /// Save the set to a TOML file, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write(path, e))?;
        tracing::debug!(path = %path.display(), "saved profile set");
        Ok(())
    }

    /// Convert the set to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|source| ConfigError::EncodeProfileSet {
            name: self.name.clone(),
            source,
        })
    }

    /// Validate every profile and check names are unique.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_profiles(&self.profiles)
    }

    /// Look up a profile by name.
    pub fn get(&self, name: &str) -> Option<&ControlProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Look up a profile by name, failing with [`ConfigError::ProfileNotFound`].
    pub fn require(&self, name: &str) -> Result<&ControlProfile, ConfigError> {
        self.get(name).ok_or_else(|| ConfigError::ProfileNotFound {
            profile: name.to_string(),
            set: self.name.clone(),
        })
    }

    /// Profile names in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.name.as_str()).collect()
    }

    /// Number of profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the set has no profiles.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Iterate over profiles.
    pub fn iter(&self) -> impl Iterator<Item = &ControlProfile> {
        self.profiles.iter()
    }
}

impl Default for ProfileSet {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ValueRange;

    #[test]
    fn test_set_new() {
        let set = ProfileSet::new("Panel");
        assert_eq!(set.name, "Panel");
        assert!(set.description.is_none());
        assert!(set.is_empty());
    }

    #[test]
    fn test_set_from_toml() {
        let toml = r#"
name = "Synth panel"
description = "Knobs and sliders"

[[profiles]]
name = "cutoff"
smoothing = 4
precision = 1
[profiles.output]
min = 20.0
max = 20000.0

[[profiles]]
name = "pan"
invert = true
clip = false
[profiles.output]
min = -1.0
max = 1.0
"#;

        let set = ProfileSet::from_toml(toml).unwrap();
        assert_eq!(set.name, "Synth panel");
        assert_eq!(set.description.as_deref(), Some("Knobs and sliders"));
        assert_eq!(set.names(), vec!["cutoff", "pan"]);

        let cutoff = set.get("cutoff").unwrap();
        assert_eq!(cutoff.smoothing, Some(4));
        assert_eq!(cutoff.precision, Some(1));
        assert!(cutoff.clip);
        assert_eq!(cutoff.input, ValueRange::unit());
        assert_eq!(cutoff.output, ValueRange::new(20.0, 20000.0));

        let pan = set.get("pan").unwrap();
        assert!(pan.invert);
        assert!(!pan.clip);
        assert!(pan.smoothing.is_none());
    }

    #[test]
    fn test_set_to_toml() {
        let set = ProfileSet::new("Test")
            .with_description("Test description")
            .with_profile(ControlProfile::new("volume").with_smoothing(2));

        let toml = set.to_toml().unwrap();
        assert!(toml.contains("name = \"Test\""));
        assert!(toml.contains("description = \"Test description\""));
        assert!(toml.contains("name = \"volume\""));
        assert!(toml.contains("smoothing = 2"));
    }

    #[test]
    fn test_set_roundtrip() {
        let original = ProfileSet::new("Roundtrip").with_profiles([
            ControlProfile::new("a").with_output(0.0, 127.0),
            ControlProfile::new("b").with_invert(true).with_precision(3),
        ]);
        let parsed = ProfileSet::from_toml(&original.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_require_missing() {
        let set = ProfileSet::new("Empty");
        let err = set.require("nope").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ProfileNotFound { ref profile, ref set } if profile == "nope" && set == "Empty"
        ));
    }

    #[test]
    fn test_validate_catches_duplicates() {
        let set = ProfileSet::new("Dupes")
            .with_profile(ControlProfile::new("x"))
            .with_profile(ControlProfile::new("x"));
        assert!(set.validate().is_err());
    }

    #[test]
    fn test_bad_toml() {
        let result = ProfileSet::from_toml("name = ");
        assert!(matches!(result, Err(ConfigError::ParseProfileText(_))));
    }

    #[test]
    fn test_default() {
        let set = ProfileSet::default();
        assert_eq!(set.name, "Untitled");
        assert!(set.is_empty());
    }
}
