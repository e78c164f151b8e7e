//! Shared CLI helpers used across multiple commands.

use anyhow::Context;
use std::io::Read;
use std::path::{Path, PathBuf};
use tactile_config::{ControlProfile, ProfileSet, get_factory_profile};

/// Parse whitespace- or comma-separated numbers.
pub fn parse_samples(text: &str) -> anyhow::Result<Vec<f32>> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            token
                .parse::<f32>()
                .with_context(|| format!("sample {} is not a number: '{}'", i + 1, token))
        })
        .collect()
}

/// Read samples from `path`, or from stdin when no path is given.
pub fn read_samples(path: Option<&Path>) -> anyhow::Result<Vec<f32>> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read samples from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read samples from stdin")?;
            buf
        }
    };
    let samples = parse_samples(&text)?;
    tracing::debug!(count = samples.len(), "read samples");
    Ok(samples)
}

/// Print values one per line, or as a JSON array.
pub fn print_values(values: &[f32], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(values)?);
    } else {
        for v in values {
            println!("{v}");
        }
    }
    Ok(())
}

/// Resolve a profile by name from a config file, or from the factory
/// catalogue when no file is given.
pub fn find_profile(name: &str, config: Option<&PathBuf>) -> anyhow::Result<ControlProfile> {
    match config {
        Some(path) => {
            let set = ProfileSet::load(path)?;
            Ok(set.require(name)?.clone())
        }
        None => get_factory_profile(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown factory profile: {}", name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_samples_mixed_separators() {
        let samples = parse_samples("1 2.5\n-3,4e1\t\n").unwrap();
        assert_eq!(samples, vec![1.0, 2.5, -3.0, 40.0]);
    }

    #[test]
    fn test_parse_samples_empty() {
        assert!(parse_samples("  \n ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_samples_reports_position() {
        let err = parse_samples("1 2 oops").unwrap_err();
        assert!(err.to_string().contains("sample 3"), "got: {err}");
    }

    #[test]
    fn test_find_factory_profile() {
        assert_eq!(find_profile("pan", None).unwrap().name, "pan");
        assert!(find_profile("nope", None).is_err());
    }
}
