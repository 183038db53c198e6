use anyhow::Result;
use clap::Parser;
use tracing::info;

use artillery_app::audio::LogAudioSink;
use artillery_app::cli::Args;
use artillery_app::game_loop::{self, LoopOptions};
use artillery_app::init_tracing;
use artillery_app::input::AutoPilot;
use artillery_core::enums::Side;
use artillery_sim::SimulationEngine;

/// Power the autopilot settles on before each shot.
const AUTOPILOT_POWER: f32 = 120.0;

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = args.sim_config()?;
    let gravity = config.tuning.gravity;
    let mut engine = SimulationEngine::new(config);

    // The enemy plays itself unless the mode hands it to a second human.
    let sides = if engine.is_ai(Side::Enemy) {
        vec![Side::Player]
    } else {
        vec![Side::Player, Side::Enemy]
    };
    let mut input = AutoPilot::new(sides, gravity, AUTOPILOT_POWER);
    let mut audio = LogAudioSink::default();

    let summary = game_loop::run(
        &mut engine,
        &mut input,
        &mut audio,
        LoopOptions {
            realtime: args.realtime(),
            max_ticks: args.max_ticks(),
        },
    );

    info!(
        ticks = summary.ticks,
        shots = summary.shots,
        explosions = summary.explosions,
        highest_level = summary.highest_level,
        games_over = summary.games_over,
        cues = audio.played(),
        "session finished"
    );
    Ok(())
}
