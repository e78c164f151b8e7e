//! Control profile configuration for tactile.
//!
//! The numeric core leaves composition to its callers. This crate is one such
//! caller: a [`ControlProfile`] declares, per input control, how raw samples
//! are smoothed, flipped, mapped onto an output range, clipped and rounded,
//! and a [`ControlMapper`] runs those stages over a live stream.
//!
//! # Features
//!
//! - **Profiles**: TOML-serializable per-control settings
//! - **Profile Sets**: Load and save collections of profiles from one file
//! - **Validation**: Reject settings the core would silently misinterpret
//! - **Factory Profiles**: Built-in profiles for common controls
//!
//! # Example
//!
//! ```rust
//! use tactile_config::{ControlMapper, ProfileSet};
//!
//! let set = ProfileSet::from_toml(r#"
//! name = "Panel"
//!
//! [[profiles]]
//! name = "cutoff"
//! smoothing = 2
//! [profiles.output]
//! min = 20.0
//! max = 20000.0
//! "#).unwrap();
//!
//! let mut cutoff = ControlMapper::from_profile(set.require("cutoff").unwrap()).unwrap();
//! assert_eq!(cutoff.process(0.0), 20.0);
//! assert_eq!(cutoff.process(1.0), 10010.0); // mean of 0.0 and 1.0
//! ```

mod error;
mod mapper;
mod profile;
mod profile_set;

/// Profile validation.
pub mod validation;

/// Factory profiles bundled with the library.
pub mod factory_profiles;

pub use error::ConfigError;
pub use factory_profiles::{
    FACTORY_PROFILE_NAMES, factory_profile_names, factory_profiles, get_factory_profile,
    is_factory_profile,
};
pub use mapper::ControlMapper;
pub use profile::{ControlProfile, ValueRange};
pub use profile_set::ProfileSet;
pub use validation::{
    MAX_PRECISION, ValidationError, ValidationResult, validate_profile, validate_profiles,
};
