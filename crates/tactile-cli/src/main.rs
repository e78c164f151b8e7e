//! Tactile CLI - Command-line interface for the tactile numeric toolkit.

mod commands;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tactile")]
#[command(author, version, about = "Tactile input smoothing and transform CLI", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Smooth a sample stream with a moving average
    Smooth(commands::smooth::SmoothArgs),

    /// Map a sample stream through a control profile
    Map(commands::map::MapArgs),

    /// Convert a single value (MIDI to Hz, gain to dB, ...)
    Convert(commands::convert::ConvertArgs),

    /// Draw random integers, floats or coin tosses
    Random(commands::random::RandomArgs),

    /// List control profiles
    Profiles(commands::profiles::ProfilesArgs),
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Smooth(args) => commands::smooth::run(args),
        Commands::Map(args) => commands::map::run(args),
        Commands::Convert(args) => commands::convert::run(args),
        Commands::Random(args) => commands::random::run(args),
        Commands::Profiles(args) => commands::profiles::run(args),
    }
}
