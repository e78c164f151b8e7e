//! Moving-average smoothing command.

use super::common::{print_values, read_samples};
use clap::Args;
use std::path::PathBuf;
use tactile_core::MovingAverageFilter;

#[derive(Args)]
pub struct SmoothArgs {
    /// Samples to smooth (reads stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Window length; 0 or omitted uses the default of 2
    #[arg(short, long)]
    window: Option<usize>,

    /// Print a JSON array instead of one value per line
    #[arg(long)]
    json: bool,
}

pub fn run(args: SmoothArgs) -> anyhow::Result<()> {
    let samples = read_samples(args.input.as_deref())?;
    let mut filter = MovingAverageFilter::new(args.window);
    tracing::debug!(window = filter.capacity(), "smoothing");

    let smoothed: Vec<f32> = samples.iter().map(|&x| filter.update(x)).collect();
    print_values(&smoothed, args.json)
}
