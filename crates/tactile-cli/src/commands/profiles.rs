//! Profile listing command.

#![allow(clippy::print_literal)] // Table headers use literal strings intentionally

use clap::Args;
use std::path::PathBuf;
use tactile_config::{ControlProfile, ProfileSet, factory_profiles};

#[derive(Args)]
pub struct ProfilesArgs {
    /// Profile set file (lists factory profiles if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn format_row(profile: &ControlProfile) -> String {
    let smoothing = profile
        .smoothing
        .map_or_else(|| "-".to_string(), |w| w.to_string());
    format!(
        "  {:12}  {:>9}  [{}, {}] -> [{}, {}]",
        profile.name,
        smoothing,
        profile.input.min,
        profile.input.max,
        profile.output.min,
        profile.output.max
    )
}

pub fn run(args: ProfilesArgs) -> anyhow::Result<()> {
    let profiles = match &args.config {
        Some(path) => {
            let set = ProfileSet::load(path)?;
            set.validate()?;
            set.profiles
        }
        None => factory_profiles(),
    };

    println!("  {:12}  {:>9}  {}", "Name", "Smoothing", "Mapping");
    println!("  {:12}  {:>9}  {}", "----", "---------", "-------");
    for profile in &profiles {
        println!("{}", format_row(profile));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_row() {
        let profile = ControlProfile::new("pan").with_output(-1.0, 1.0);
        let row = format_row(&profile);
        assert!(row.contains("pan"));
        assert!(row.contains("[0, 1] -> [-1, 1]"), "got: {row}");
    }
}
