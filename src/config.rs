//! Command-line configuration.
//!
//! Every flag has an environment fallback so a session can be pinned (e.g. a
//! fixed seed) without retyping it.

use clap::{Parser, ValueEnum};

use crate::types::{Variant, DEFAULT_FPS};

pub const MIN_FPS: u32 = 1;
pub const MAX_FPS: u32 = 240;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    /// Uniform random pieces, no score or hold
    Simple,
    /// 7-bag, preview, hold, ghost, score and levels
    Extended,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Simple => Variant::Simple,
            VariantArg::Extended => Variant::Extended,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "twin-tetris", version, about)]
pub struct Cli {
    /// Rule set to play
    #[arg(long, value_enum, env = "TETRIS_VARIANT", default_value = "extended")]
    pub variant: VariantArg,

    /// Piece sequence seed. If omitted, one is drawn from the OS.
    #[arg(long, env = "TETRIS_SEED")]
    pub seed: Option<u64>,

    /// Frames per second (clamped to 1..=240)
    #[arg(long, env = "TETRIS_FPS", default_value_t = DEFAULT_FPS)]
    pub fps: u32,
}

/// Resolved settings for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub variant: Variant,
    pub seed: u64,
    pub fps: u32,
}

impl Cli {
    /// Fill in the seed and clamp the frame rate.
    pub fn resolve(&self) -> Config {
        self.resolve_with(rand::random)
    }

    /// Like [`resolve`](Self::resolve), with the fallback seed supplied by the caller.
    pub fn resolve_with(&self, random_seed: impl FnOnce() -> u64) -> Config {
        Config {
            variant: self.variant.into(),
            seed: self.seed.unwrap_or_else(random_seed),
            fps: self.fps.clamp(MIN_FPS, MAX_FPS),
        }
    }
}
