#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::{HeldKeys, InputEvent, TickInput};
    use crate::components::Tank;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::AudioEvent;
    use crate::tuning::{Tuning, TuningError};
    use crate::types::Rect;

    #[test]
    fn test_weapon_cycle_wraps() {
        let mut weapon = Weapon::Normal;
        let mut seen = Vec::new();
        for _ in 0..3 {
            weapon = weapon.next();
            seen.push(weapon);
        }
        assert_eq!(seen, vec![Weapon::Guided, Weapon::Grenade, Weapon::Normal]);
    }

    #[test]
    fn test_weapon_damage_table() {
        assert_eq!(Weapon::Normal.damage(), 20);
        assert_eq!(Weapon::Guided.damage(), 20);
        assert_eq!(Weapon::Grenade.damage(), 30);
        assert_eq!(Weapon::Normal.burst(), 30);
        assert_eq!(Weapon::Grenade.burst(), 10);
    }

    #[test]
    fn test_material_speed_factors() {
        assert_eq!(Material::Normal.speed_factor(), 1.0);
        assert_eq!(Material::Mud.speed_factor(), 0.5);
        assert_eq!(Material::Rock.speed_factor(), 0.8);
    }

    #[test]
    fn test_facing_world_angle_round_trip() {
        assert_eq!(Facing::Right.world_angle(30.0), 30.0);
        assert_eq!(Facing::Left.world_angle(30.0), 150.0);

        let (facing, elevation) = Facing::from_world_angle(135.0);
        assert_eq!(facing, Facing::Left);
        assert_eq!(elevation, 45.0);

        let (facing, elevation) = Facing::from_world_angle(90.0);
        assert_eq!(facing, Facing::Right);
        assert_eq!(elevation, 90.0);
    }

    #[test]
    fn test_new_tanks_face_each_other() {
        let player = Tank::new(Side::Player);
        let enemy = Tank::new(Side::Enemy);
        assert_eq!(player.world_angle(), 45.0);
        assert_eq!(enemy.world_angle(), 135.0);
        assert_eq!(player.health, TANK_START_HEALTH);
        assert_eq!(enemy.power, TANK_DEFAULT_POWER);
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Player.opponent(), Side::Enemy);
        assert_eq!(Side::Enemy.opponent().opponent(), Side::Enemy);
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::new(100.0, 200.0, 50.0, 40.0);
        assert!(rect.contains(Vec2::new(100.0, 200.0)));
        assert!(rect.contains(Vec2::new(149.9, 239.9)));
        assert!(!rect.contains(Vec2::new(150.0, 220.0)));
        assert!(!rect.contains(Vec2::new(120.0, 240.0)));
        assert!(!rect.contains(Vec2::new(99.9, 220.0)));
    }

    #[test]
    fn test_game_mode_rules() {
        assert!(GameMode::Campaign.has_ai());
        assert!(GameMode::Challenge.has_levels());
        assert!(!GameMode::Multiplayer.has_ai());
        assert!(!GameMode::Multiplayer.has_levels());
    }

    #[test]
    fn test_tick_input_helpers() {
        let input = TickInput {
            events: vec![InputEvent::Fire(Side::Enemy)],
            player: HeldKeys::default(),
            enemy: HeldKeys {
                move_left: true,
                ..Default::default()
            },
        };
        assert!(!input.quit_requested());
        assert!(input.held(Side::Enemy).move_left);
        assert!(!input.held(Side::Player).move_left);
        assert_eq!(InputEvent::Fire(Side::Enemy).side(), Some(Side::Enemy));
        assert_eq!(InputEvent::Quit.side(), None);
    }

    #[test]
    fn test_match_phase_serde() {
        let phases = vec![
            MatchPhase::default(),
            MatchPhase::Active,
            MatchPhase::GameOver {
                remaining_secs: 2.5,
                winner: Side::Enemy,
            },
        ];
        for phase in phases {
            let json = serde_json::to_string(&phase).unwrap();
            let back: MatchPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(phase, back);
        }
    }

    #[test]
    fn test_audio_event_tagged_json() {
        let event = AudioEvent::ShotFired {
            side: Side::Player,
            weapon: Weapon::Guided,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"ShotFired\""), "got {json}");
    }

    // ---- Tuning ----

    #[test]
    fn test_tuning_defaults_match_constants() {
        let tuning = Tuning::default();
        assert_eq!(tuning.gravity, GRAVITY);
        assert_eq!(tuning.effective_gravity(), 98.0);
        assert_eq!(tuning.terrain_floor(), 570.0);
        assert_eq!(tuning.terrain_ceiling(), 450.0);
        assert_eq!(tuning.wind_limit(3), 15.0);
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_tuning_partial_toml_overrides() {
        let tuning = Tuning::from_toml_str("drag_coeff = 0.0\ngravity = 4.9\n").unwrap();
        assert_eq!(tuning.drag_coeff, 0.0);
        assert_eq!(tuning.gravity, 4.9);
        assert_eq!(tuning.screen_width, SCREEN_WIDTH);
    }

    #[test]
    fn test_tuning_rejects_inverted_power_range() {
        let err = Tuning::from_toml_str("power_min = 300.0").unwrap_err();
        assert!(matches!(err, TuningError::Invalid(_)), "got {err:?}");
    }

    #[test]
    fn test_tuning_rejects_malformed_toml() {
        let err = Tuning::from_toml_str("gravity = \"heavy\"").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn test_tuning_missing_file_is_io_error() {
        let err = Tuning::load("/nonexistent/artillery/tuning.toml").unwrap_err();
        assert!(matches!(err, TuningError::Io(_)));
    }
}
