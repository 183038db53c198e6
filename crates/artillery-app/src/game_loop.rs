//! Game loop: polls input, advances the engine and hands cues to the sink.
//!
//! In real-time mode ticks are paced at `TICK_RATE` against the wall clock
//! and `dt` is the measured frame time, capped at `MAX_FRAME_DT`. Otherwise
//! ticks run back to back with the fixed `DT`.

use std::time::{Duration, Instant};

use tracing::info;

use artillery_core::constants::{DT, MAX_FRAME_DT, TICK_RATE};
use artillery_core::enums::MatchPhase;
use artillery_core::events::AudioEvent;
use artillery_sim::SimulationEngine;

use crate::audio::AudioSink;
use crate::input::InputSource;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

#[derive(Debug, Clone, Copy, Default)]
pub struct LoopOptions {
    pub realtime: bool,
    /// `None` runs until the input source asks to quit.
    pub max_ticks: Option<u64>,
}

/// What happened over a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoopSummary {
    pub ticks: u64,
    pub shots: u64,
    pub explosions: u64,
    pub highest_level: u32,
    pub games_over: u64,
    pub quit: bool,
}

/// Run until quit or the tick limit.
pub fn run(
    engine: &mut SimulationEngine,
    input: &mut dyn InputSource,
    audio: &mut dyn AudioSink,
    options: LoopOptions,
) -> LoopSummary {
    let mut summary = LoopSummary {
        highest_level: engine.level(),
        ..Default::default()
    };
    let mut snapshot = engine.snapshot();
    let mut last_frame = Instant::now();
    let mut next_tick_time = last_frame;
    let mut dt = DT;

    loop {
        if options.max_ticks.is_some_and(|max| summary.ticks >= max) {
            break;
        }

        // 1. Input for this frame
        let frame = input.poll(&snapshot, dt);
        if frame.quit_requested() {
            summary.quit = true;
            break;
        }
        engine.apply_input(&frame);

        // 2. Advance one tick
        if options.realtime {
            let now = Instant::now();
            dt = now.duration_since(last_frame).as_secs_f32().min(MAX_FRAME_DT);
            last_frame = now;
        }
        let was_over = matches!(engine.phase(), MatchPhase::GameOver { .. });
        snapshot = engine.tick(dt);
        summary.ticks += 1;

        // 3. Sound cues
        for event in &snapshot.audio_events {
            match event {
                AudioEvent::ShotFired { .. } => summary.shots += 1,
                AudioEvent::Explosion { .. } => summary.explosions += 1,
            }
            audio.play(event);
        }

        if let MatchPhase::GameOver { winner, .. } = snapshot.phase {
            if !was_over {
                summary.games_over += 1;
                info!(?winner, tick = summary.ticks, "game over");
            }
        }
        summary.highest_level = summary.highest_level.max(snapshot.hud.level);

        // 4. Sleep until the next tick
        if options.realtime {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind; drop the backlog.
                next_tick_time = now;
            }
        }
    }

    summary
}
