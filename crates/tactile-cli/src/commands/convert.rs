//! Single-value conversion command.

use clap::{Args, ValueEnum};
use tactile_core::{gain_to_db, invert, mtof, octave};

#[derive(Clone, Copy, ValueEnum)]
enum Conversion {
    /// MIDI note number to frequency in Hz
    Mtof,
    /// Octave shift to frequency multiplier
    Octave,
    /// Linear gain to decibels
    Db,
    /// Flip a value in [0, 1]
    Invert,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Conversion to apply
    #[arg(value_enum)]
    conversion: Conversion,

    /// Input value
    #[arg(allow_hyphen_values = true)]
    value: f32,
}

fn apply(conversion: Conversion, value: f32) -> f32 {
    match conversion {
        Conversion::Mtof => mtof(value),
        Conversion::Octave => octave(value),
        Conversion::Db => gain_to_db(value),
        Conversion::Invert => invert(value),
    }
}

pub fn run(args: ConvertArgs) -> anyhow::Result<()> {
    println!("{}", apply(args.conversion, args.value));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply() {
        assert_eq!(apply(Conversion::Mtof, 69.0), 440.0);
        assert!((apply(Conversion::Octave, -1.0) - 0.5).abs() < 1e-6);
        assert_eq!(apply(Conversion::Db, 1.0), 0.0);
        assert_eq!(apply(Conversion::Invert, 0.25), 0.75);
    }
}
