//! Integration tests for tactile-config.
//!
//! These tests verify end-to-end functionality across modules: files on disk,
//! validation, and mappers driven by loaded profiles.

use tactile_config::{
    ConfigError, ControlMapper, ControlProfile, ProfileSet, ValidationError, factory_profiles,
    get_factory_profile,
};
use tempfile::TempDir;

/// Save a set, load it back, and drive a mapper from the loaded copy.
#[test]
fn test_save_load_and_map() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("panel.toml");

    let set = ProfileSet::new("Panel")
        .with_description("Integration test panel")
        .with_profile(
            ControlProfile::new("cutoff")
                .with_smoothing(2)
                .with_output(20.0, 20000.0),
        )
        .with_profile(ControlProfile::new("pan").with_output(-1.0, 1.0));

    set.save(&path).expect("save should create parent directories");
    assert!(path.exists());

    let loaded = ProfileSet::load(&path).expect("saved set should load");
    assert_eq!(loaded, set);

    let mut pan = ControlMapper::from_profile(loaded.require("pan").unwrap()).unwrap();
    assert_eq!(pan.process_block(&[0.0, 0.5, 1.0]), vec![-1.0, 0.0, 1.0]);
}

/// Loading a missing file reports the path.
#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");
    let err = ProfileSet::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ReadProfileSet { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

/// A malformed file names the file in its parse error.
#[test]
fn test_load_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "name = \"Broken\"\n[[profiles]]\nsmoothing = \"lots\"\n").unwrap();

    let err = ProfileSet::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseProfileSet { .. }));
    let msg = err.to_string();
    assert!(msg.starts_with("invalid profile set '"), "got: {msg}");
    assert!(msg.contains("broken.toml"), "got: {msg}");
}

/// A syntactically valid file with a bad profile loads, but fails validation
/// and cannot produce a mapper.
#[test]
fn test_invalid_profile_in_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(
        &path,
        r#"
name = "Bad"

[[profiles]]
name = "knob"
smoothing = 0
"#,
    )
    .unwrap();

    let set = ProfileSet::load(&path).unwrap();
    assert_eq!(
        set.validate(),
        Err(ValidationError::ZeroSmoothing("knob".to_string()))
    );
    let err = ControlMapper::from_profile(set.require("knob").unwrap()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidProfile { ref profile, .. } if profile == "knob"));
}

/// Every factory profile builds a mapper that keeps clipped output in range.
#[test]
fn test_factory_profiles_build_mappers() {
    for profile in factory_profiles() {
        let mut mapper = ControlMapper::from_profile(&profile)
            .unwrap_or_else(|e| panic!("factory profile '{}' invalid: {e}", profile.name));

        let sweep: Vec<f32> = (0..=20).map(|i| i as f32 / 20.0).collect();
        for out in mapper.process_block(&sweep) {
            assert!(out.is_finite(), "profile '{}' produced {out}", profile.name);
            if profile.clip {
                assert!(
                    out >= profile.output.lower() && out <= profile.output.upper(),
                    "profile '{}' produced {out} outside its output range",
                    profile.name
                );
            }
        }
    }
}

/// Smoothing in a mapper damps a step the same way the core filter does.
#[test]
fn test_cutoff_step_response() {
    let profile = get_factory_profile("cutoff").unwrap();
    let window = profile.smoothing.unwrap();
    let mut mapper = ControlMapper::from_profile(&profile).unwrap();

    for _ in 0..window {
        mapper.process(0.0);
    }
    let first = mapper.process(1.0);
    assert!(first > 20.0 && first < 20000.0, "first step {first}");

    let mut last = first;
    for _ in 1..window {
        last = mapper.process(1.0);
    }
    assert_eq!(last, 20000.0);
}

/// Mappers for separate streams keep separate history.
#[test]
fn test_mappers_are_independent() {
    let profile = ControlProfile::new("x").with_smoothing(4);
    let mut a = ControlMapper::from_profile(&profile).unwrap();
    let mut b = ControlMapper::from_profile(&profile).unwrap();

    a.process_block(&[1.0, 1.0, 1.0, 1.0]);
    assert_eq!(b.process(0.0), 0.0);
    assert_eq!(a.process(1.0), 1.0);
}
