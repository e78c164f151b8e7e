//! Random draw command.

use clap::{Args, ValueEnum};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tactile_core::{coin_with, rf_with, ri_with};

#[derive(Clone, Copy, ValueEnum)]
enum Draw {
    /// Integer in [low, high)
    Int,
    /// Float in [low, high)
    Float,
    /// 1 with probability --odds, else 0
    Coin,
}

#[derive(Args)]
pub struct RandomArgs {
    /// What to draw
    #[arg(value_enum)]
    kind: Draw,

    /// First bound; alone it means the range [0, low)
    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    low: f32,

    /// Second bound; omitted or 0 means a single-bound draw
    #[arg(long, allow_hyphen_values = true)]
    high: Option<f32>,

    /// Coin odds (default 0.5)
    #[arg(long)]
    odds: Option<f32>,

    /// Number of draws
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Seed for a reproducible sequence
    #[arg(long)]
    seed: Option<u64>,
}

/// A fully resolved draw, with bounds converted to the kind's type.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Request {
    Int(i32, Option<i32>),
    Float(f32, Option<f32>),
    Coin(Option<f32>),
}

/// Convert a bound to `i32`, rejecting fractions and out-of-range values.
fn int_bound(flag: &str, value: f32) -> anyhow::Result<i32> {
    if value.fract() != 0.0 || !(-2_147_483_648.0..2_147_483_648.0).contains(&value) {
        anyhow::bail!("{flag} must be a whole number in i32 range for integer draws, got {value}");
    }
    Ok(value as i32)
}

impl RandomArgs {
    fn request(&self) -> anyhow::Result<Request> {
        Ok(match self.kind {
            Draw::Int => Request::Int(
                int_bound("--low", self.low)?,
                self.high.map(|h| int_bound("--high", h)).transpose()?,
            ),
            Draw::Float => Request::Float(self.low, self.high),
            Draw::Coin => Request::Coin(self.odds),
        })
    }
}

fn draw_all<R: RngCore>(rng: &mut R, request: Request, count: usize) -> Vec<String> {
    (0..count)
        .map(|_| match request {
            Request::Int(low, high) => ri_with(&mut *rng, low, high).to_string(),
            Request::Float(low, high) => rf_with(&mut *rng, low, high).to_string(),
            Request::Coin(odds) => coin_with(&mut *rng, odds).to_string(),
        })
        .collect()
}

pub fn run(args: RandomArgs) -> anyhow::Result<()> {
    if let Some(odds) = args.odds
        && !(0.0..=1.0).contains(&odds)
    {
        tracing::warn!(odds, "coin odds outside [0, 1] always or never land");
    }

    let request = args.request()?;
    tracing::debug!(?request, count = args.count, seeded = args.seed.is_some(), "drawing");

    let draws = match args.seed {
        Some(seed) => draw_all(&mut StdRng::seed_from_u64(seed), request, args.count),
        None => draw_all(&mut rand::thread_rng(), request, args.count),
    };

    for line in draws {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(kind: Draw, low: f32, high: Option<f32>) -> RandomArgs {
        RandomArgs {
            kind,
            low,
            high,
            odds: None,
            count: 50,
            seed: Some(5),
        }
    }

    #[test]
    fn test_seeded_draws_repeat() {
        let request = args(Draw::Float, 0.0, Some(10.0)).request().unwrap();
        let first = draw_all(&mut StdRng::seed_from_u64(5), request, 50);
        let second = draw_all(&mut StdRng::seed_from_u64(5), request, 50);
        assert_eq!(first, second);
        assert_eq!(first.len(), 50);
    }

    #[test]
    fn test_int_draws_in_range() {
        let request = args(Draw::Int, 6.0, None).request().unwrap();
        assert_eq!(request, Request::Int(6, None));
        for s in draw_all(&mut StdRng::seed_from_u64(1), request, 50) {
            let v: i32 = s.parse().unwrap();
            assert!((0..6).contains(&v));
        }
    }

    #[test]
    fn test_int_rejects_fractional_bounds() {
        let err = args(Draw::Int, 1.0, Some(0.4)).request().unwrap_err();
        assert!(err.to_string().contains("--high"), "got: {err}");

        let err = args(Draw::Int, 2.5, None).request().unwrap_err();
        assert!(err.to_string().contains("--low"), "got: {err}");
    }

    #[test]
    fn test_int_rejects_out_of_range_bounds() {
        assert!(args(Draw::Int, 3e9, None).request().is_err());
        assert!(args(Draw::Int, f32::NAN, None).request().is_err());
        assert_eq!(
            args(Draw::Int, -2_147_483_648.0, Some(0.0)).request().unwrap(),
            Request::Int(i32::MIN, Some(0))
        );
    }

    #[test]
    fn test_float_keeps_fractional_bounds() {
        assert_eq!(
            args(Draw::Float, 0.25, Some(0.4)).request().unwrap(),
            Request::Float(0.25, Some(0.4))
        );
    }
}
