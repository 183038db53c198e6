//! Audio sinks for the per-tick sound cues.

use tracing::info;

use artillery_core::events::AudioEvent;

pub trait AudioSink {
    fn play(&mut self, event: &AudioEvent);
}

/// Reports cues through `tracing` instead of a sound device.
#[derive(Debug, Default)]
pub struct LogAudioSink {
    played: u64,
}

impl LogAudioSink {
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for LogAudioSink {
    fn play(&mut self, event: &AudioEvent) {
        self.played += 1;
        match event {
            AudioEvent::ShotFired { side, weapon } => info!(?side, ?weapon, "sfx: shot"),
            AudioEvent::Explosion { position } => {
                info!(x = position.x, y = position.y, "sfx: explosion")
            }
        }
    }
}
