//! Profile mapping command.

use super::common::{find_profile, print_values, read_samples};
use clap::Args;
use std::path::PathBuf;
use tactile_config::ControlMapper;

#[derive(Args)]
pub struct MapArgs {
    /// Samples to map (reads stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Profile name
    #[arg(short, long)]
    profile: String,

    /// Profile set file (uses factory profiles if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a JSON array instead of one value per line
    #[arg(long)]
    json: bool,
}

pub fn run(args: MapArgs) -> anyhow::Result<()> {
    let profile = find_profile(&args.profile, args.config.as_ref())?;
    let mut mapper = ControlMapper::from_profile(&profile)?;
    let samples = read_samples(args.input.as_deref())?;

    let mapped = mapper.process_block(&samples);
    print_values(&mapped, args.json)
}
