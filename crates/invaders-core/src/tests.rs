#[cfg(test)]
mod tests {
    use glam::DVec2;

    use crate::commands::PlayerCommand;
    use crate::config::{ConfigError, SimConfig};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::types::{Bounds, SimTime};

    #[test]
    fn test_contact_matrix() {
        use EntityCategory::*;

        assert!(Ship.can_contact(InvaderBullet));
        assert!(InvaderBullet.can_contact(Ship));
        assert!(Invader.can_contact(ShipBullet));
        assert!(ShipBullet.can_contact(Invader));
        assert!(Invader.can_contact(Ship));

        assert!(!ShipBullet.can_contact(InvaderBullet));
        assert!(!ShipBullet.can_contact(Ship));
        assert!(!InvaderBullet.can_contact(Invader));
        assert!(!Invader.can_contact(Invader));
    }

    #[test]
    fn test_category_bits_are_distinct() {
        let bits = [
            INVADER_CATEGORY,
            SHIP_FIRED_BULLET_CATEGORY,
            SHIP_CATEGORY,
            SCENE_EDGE_CATEGORY,
            INVADER_FIRED_BULLET_CATEGORY,
        ];
        let combined = bits.iter().fold(0, |acc, b| acc | b);
        assert_eq!(combined.count_ones() as usize, bits.len());
        assert_eq!(
            EntityCategory::Ship.collision_mask(),
            SCENE_EDGE_CATEGORY,
            "Ship is stopped by the playfield edge"
        );
    }

    #[test]
    fn test_bounds_edges_and_overlap() {
        let a = Bounds::new(DVec2::new(10.0, 20.0), DVec2::new(4.0, 8.0));
        assert_eq!(a.min_x(), 8.0);
        assert_eq!(a.max_x(), 12.0);
        assert_eq!(a.min_y(), 16.0);
        assert_eq!(a.max_y(), 24.0);

        let touching = Bounds::new(DVec2::new(14.0, 20.0), DVec2::new(4.0, 8.0));
        assert!(a.intersects(&touching), "Shared edge counts as contact");

        let apart = Bounds::new(DVec2::new(14.1, 20.0), DVec2::new(4.0, 8.0));
        assert!(!a.intersects(&apart));

        let mut moved = a;
        moved.translate(DVec2::new(0.0, -10.0));
        assert_eq!(moved.center, DVec2::new(10.0, 10.0));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_invader_kind_cycles_by_row() {
        assert_eq!(InvaderKind::for_row(0), InvaderKind::A);
        assert_eq!(InvaderKind::for_row(1), InvaderKind::B);
        assert_eq!(InvaderKind::for_row(2), InvaderKind::C);
        assert_eq!(InvaderKind::for_row(3), InvaderKind::A);
    }

    #[test]
    fn test_round_phase_terminal() {
        assert!(!RoundPhase::InProgress.is_terminal());
        assert!(RoundPhase::Won.is_terminal());
        assert!(RoundPhase::Lost.is_terminal());
        assert_eq!(RoundPhase::from(RoundOutcome::Lost), RoundPhase::Lost);
        assert!(MovementDirection::TurningToLeft.is_turning());
        assert!(!MovementDirection::MovingLeft.is_turning());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = SimConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.invader_rows, 5);
        assert_eq!(config.invader_columns, 10);
        assert_eq!(config.formation_width(), 10.0 * 24.0 + 9.0 * 12.0);
    }

    #[test]
    fn test_config_json_partial_override() {
        let config = SimConfig::from_json_str(r#"{ "seed": 7, "invader_rows": 2 }"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.invader_rows, 2);
        assert_eq!(config.invader_columns, INVADER_COLUMN_COUNT);
        assert!(config.detect_contacts);
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let err = SimConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let config = SimConfig {
            invader_columns: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyFormation { rows: 5, columns: 0 })
        ));

        let config = SimConfig {
            initial_move_interval: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "initial_move_interval",
                ..
            })
        ));

        let config = SimConfig {
            speed_up_factor: 1.5,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::SpeedUpFactor(1.5)));

        let config = SimConfig {
            invader_columns: 30,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FormationTooWide { .. })
        ));
    }

    #[test]
    fn test_config_rejects_formation_outside_playfield_height() {
        // Top rows would sit above the playfield, out of reach of ship bullets.
        let config = SimConfig {
            invader_rows: 30,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FormationTooTall { height, .. }) if height == 800.0
        ));

        // Row count large enough to overflow a u32 cell count.
        let json = r#"{ "invader_rows": 3000000000, "invader_columns": 2 }"#;
        let err = SimConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::FormationTooTall { .. }));

        // A short playfield cannot hold the default lattice.
        let config = SimConfig {
            playfield_height: 40.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        // Floor raised above the lowest row: the round would be lost on the first tick.
        let config = SimConfig {
            floor_height: 600.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FormationBelowFloor { floor, .. }) if floor == 600.0
        ));
    }

    #[test]
    fn test_config_rejects_floor_and_ship_outside_playfield() {
        let config = SimConfig {
            floor_height: 900.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::FloorOutOfBounds(900.0)));

        let config = SimConfig {
            floor_height: -1.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::FloorOutOfBounds(-1.0)));

        let config = SimConfig {
            ship_y: 2.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ShipOutOfBounds(2.0)));

        let config = SimConfig {
            ship_y: 795.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ShipOutOfBounds(795.0)));
    }

    #[test]
    fn test_default_formation_vertical_extent() {
        let (bottom, top) = SimConfig::default().formation_vertical_extent();
        let origin_y = 800.0 / 1.35;
        assert!((bottom - (origin_y - 8.0)).abs() < 1e-9);
        assert!((top - (origin_y + 4.0 * 32.0 + 8.0)).abs() < 1e-9);
        assert!(bottom > MIN_INVADER_BOTTOM_HEIGHT && top <= PLAYFIELD_HEIGHT);
    }

    #[test]
    fn test_command_and_event_json_shape() {
        let json = serde_json::to_string(&PlayerCommand::Steer { velocity: -0.5 }).unwrap();
        assert_eq!(json, r#"{"type":"Steer","velocity":-0.5}"#);

        let event = GameEvent::RoundEnded {
            outcome: RoundOutcome::Won,
            cause: None,
            final_score: 5000,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
