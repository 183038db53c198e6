//! Level progression rules and interstitial phase timing.

use artillery_core::constants::*;
use artillery_core::enums::{GameMode, MatchPhase};
use artillery_core::tuning::Tuning;

/// Flavour line shown on the level intro.
pub fn narrative(level: u32) -> &'static str {
    match level {
        1 => "Welcome to the battle!",
        2 => "The fight heats up!",
        3 => "You're getting stronger!",
        4 => "Bigger challenges ahead!",
        5 => "Victory is near!",
        _ => "Prepare for battle!",
    }
}

/// Enemy hit points at the start of `level` after a level-up.
pub fn enemy_health(level: u32) -> i32 {
    TANK_START_HEALTH + level as i32 * ENEMY_HEALTH_PER_LEVEL
}

/// Obstacles placed on a new level.
pub fn obstacle_count(level: u32) -> u32 {
    (OBSTACLE_BASE_COUNT + level).min(OBSTACLE_MAX_COUNT)
}

/// Phase the match starts in, and returns to after each new level.
pub fn opening_phase(mode: GameMode, tuning: &Tuning) -> MatchPhase {
    if mode.has_levels() {
        MatchPhase::LevelIntro {
            remaining_secs: tuning.level_intro_secs,
        }
    } else {
        MatchPhase::Active
    }
}

/// Run down an interstitial timer.
///
/// The intro ends early on any key press; the game-over hold does not.
pub fn advance_phase(
    phase: MatchPhase,
    dt: f32,
    key_pressed: bool,
    mode: GameMode,
    tuning: &Tuning,
) -> MatchPhase {
    match phase {
        MatchPhase::Active => MatchPhase::Active,
        MatchPhase::LevelIntro { remaining_secs } => {
            let remaining_secs = remaining_secs - dt;
            if key_pressed || remaining_secs <= 0.0 {
                MatchPhase::Active
            } else {
                MatchPhase::LevelIntro { remaining_secs }
            }
        }
        MatchPhase::GameOver {
            remaining_secs,
            winner,
        } => {
            let remaining_secs = remaining_secs - dt;
            if remaining_secs <= 0.0 {
                opening_phase(mode, tuning)
            } else {
                MatchPhase::GameOver {
                    remaining_secs,
                    winner,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use artillery_core::enums::Side;

    use super::*;

    #[test]
    fn test_narratives_fall_back() {
        assert_eq!(narrative(1), "Welcome to the battle!");
        assert_eq!(narrative(5), "Victory is near!");
        assert_eq!(narrative(6), "Prepare for battle!");
        assert_eq!(narrative(0), "Prepare for battle!");
    }

    #[test]
    fn test_level_scaling() {
        assert_eq!(enemy_health(2), 120);
        assert_eq!(enemy_health(5), 150);
        assert_eq!(obstacle_count(1), 4);
        assert_eq!(obstacle_count(5), 8);
        assert_eq!(obstacle_count(40), 8);
    }

    #[test]
    fn test_intro_times_out() {
        let tuning = Tuning::default();
        let mut phase = opening_phase(GameMode::Campaign, &tuning);
        for _ in 0..5 {
            phase = advance_phase(phase, 0.5, false, GameMode::Campaign, &tuning);
        }
        assert!(matches!(phase, MatchPhase::LevelIntro { .. }));
        phase = advance_phase(phase, 0.5, false, GameMode::Campaign, &tuning);
        assert_eq!(phase, MatchPhase::Active);
    }

    #[test]
    fn test_intro_skipped_by_key() {
        let tuning = Tuning::default();
        let phase = opening_phase(GameMode::Challenge, &tuning);
        let phase = advance_phase(phase, 0.01, true, GameMode::Challenge, &tuning);
        assert_eq!(phase, MatchPhase::Active);
    }

    #[test]
    fn test_game_over_hold_ignores_keys() {
        let tuning = Tuning::default();
        let phase = MatchPhase::GameOver {
            remaining_secs: 3.0,
            winner: Side::Enemy,
        };
        let phase = advance_phase(phase, 1.0, true, GameMode::Campaign, &tuning);
        assert!(matches!(phase, MatchPhase::GameOver { .. }));
        let phase = advance_phase(phase, 2.0, false, GameMode::Campaign, &tuning);
        assert!(matches!(phase, MatchPhase::LevelIntro { .. }));
    }

    #[test]
    fn test_multiplayer_skips_intro() {
        let tuning = Tuning::default();
        assert_eq!(opening_phase(GameMode::Multiplayer, &tuning), MatchPhase::Active);
        let phase = MatchPhase::GameOver {
            remaining_secs: 0.1,
            winner: Side::Player,
        };
        let phase = advance_phase(phase, 0.5, false, GameMode::Multiplayer, &tuning);
        assert_eq!(phase, MatchPhase::Active);
    }
}
