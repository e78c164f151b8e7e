//! Error types for loading, saving and applying control profiles.

use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised while working with profile sets and control profiles.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The profile set file could not be read.
    #[error("cannot read profile set '{path}': {source}")]
    ReadProfileSet {
        /// Profile set file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The profile set file could not be written.
    #[error("cannot write profile set '{path}': {source}")]
    WriteProfileSet {
        /// Profile set file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The directory that should hold a profile set could not be created.
    #[error("cannot create profile directory '{path}': {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A profile set file is not valid TOML, or does not match the schema.
    #[error("invalid profile set '{path}': {source}")]
    ParseProfileSet {
        /// File the text came from.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// Inline profile set text is not valid TOML, or does not match the schema.
    #[error("invalid profile set text: {0}")]
    ParseProfileText(#[source] toml::de::Error),

    /// The profile set could not be encoded as TOML.
    #[error("cannot encode profile set '{name}' as TOML: {source}")]
    EncodeProfileSet {
        /// Name of the profile set.
        name: String,
        /// Underlying TOML error.
        #[source]
        source: toml::ser::Error,
    },

    /// No profile with the requested name exists in the set.
    #[error("no profile named '{profile}' in set '{set}'")]
    ProfileNotFound {
        /// Requested profile name.
        profile: String,
        /// Name of the set that was searched.
        set: String,
    },

    /// A profile failed validation and cannot drive a mapper.
    #[error("profile '{profile}' rejected: {source}")]
    InvalidProfile {
        /// Name of the rejected profile.
        profile: String,
        /// What was wrong with it.
        #[source]
        source: ValidationError,
    },
}

impl ConfigError {
    /// A profile set file could not be read.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadProfileSet {
            path: path.into(),
            source,
        }
    }

    /// A profile set file could not be written.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::WriteProfileSet {
            path: path.into(),
            source,
        }
    }

    /// A profile directory could not be created.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// A profile set file failed to parse.
    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        ConfigError::ParseProfileSet {
            path: path.into(),
            source,
        }
    }

    /// `profile` failed validation.
    pub fn invalid_profile(profile: impl Into<String>, source: ValidationError) -> Self {
        ConfigError::InvalidProfile {
            profile: profile.into(),
            source,
        }
    }
}
