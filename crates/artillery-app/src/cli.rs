//! Command-line arguments.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use artillery_core::enums::GameMode;
use artillery_core::tuning::Tuning;
use artillery_sim::SimConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Campaign,
    Multiplayer,
    Challenge,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Campaign => GameMode::Campaign,
            ModeArg::Multiplayer => GameMode::Multiplayer,
            ModeArg::Challenge => GameMode::Challenge,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Turn-based artillery duel", long_about = None)]
pub struct Args {
    /// Game mode
    #[arg(short, long, value_enum, default_value_t = ModeArg::Campaign)]
    pub mode: ModeArg,

    /// RNG seed; the same seed replays the same match
    #[arg(short, long, default_value_t = 42)]
    pub seed: u64,

    /// Stop after this many ticks (0 runs until quit)
    #[arg(short, long, default_value_t = 18_000)]
    pub ticks: u64,

    /// TOML file overriding physics and pacing values
    #[arg(long)]
    pub tuning: Option<PathBuf>,

    /// Pace ticks at 60 Hz wall-clock time
    #[arg(long, overrides_with = "no_realtime")]
    pub realtime: bool,

    /// Run ticks back to back with a fixed step
    #[arg(long, overrides_with = "realtime")]
    pub no_realtime: bool,
}

impl Args {
    pub fn realtime(&self) -> bool {
        self.realtime && !self.no_realtime
    }

    pub fn max_ticks(&self) -> Option<u64> {
        (self.ticks > 0).then_some(self.ticks)
    }

    /// Build the engine config, reading the tuning file if one was given.
    pub fn sim_config(&self) -> Result<SimConfig> {
        let tuning = match &self.tuning {
            Some(path) => Tuning::load(path)
                .with_context(|| format!("loading tuning from {}", path.display()))?,
            None => Tuning::default(),
        };
        Ok(SimConfig {
            seed: self.seed,
            mode: self.mode.into(),
            tuning,
        })
    }
}
