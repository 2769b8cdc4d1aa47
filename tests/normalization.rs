//! Property tests for angle normalization and sweep bounding

use std::f64::consts::TAU;

use angle_dial::{DialOptions, DialState, state::sweep_end};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_stored_angle_in_range_and_congruent(angle in -1.0e6f64..1.0e6f64) {
        let mut state = DialState::new(0.0);
        state.set_angle(angle);
        let stored = state.angle();

        prop_assert!((0.0..TAU).contains(&stored));
        // congruent to the input modulo one turn
        let turns = (stored - angle) / TAU;
        prop_assert!((turns - turns.round()).abs() < 1e-6);
    }

    #[test]
    fn test_set_angle_idempotent_on_normalized_values(angle in -1.0e4f64..1.0e4f64) {
        let mut state = DialState::new(angle);
        let first = state.angle();
        state.set_angle(first);
        prop_assert_eq!(first, state.angle());
    }

    #[test]
    fn test_sweep_end_stays_under_one_turn(
        angle in -1.0e4f64..1.0e4f64,
        start_angle in -10.0f64..10.0f64,
        clockwise in any::<bool>(),
    ) {
        let config = DialOptions {
            start_angle: Some(start_angle),
            clockwise: Some(clockwise),
            ..DialOptions::default()
        }
        .resolve();

        let mut state = DialState::new(0.0);
        state.set_angle(angle);
        let d = sweep_end(&config, state.angle());
        prop_assert!(d > -TAU && d < TAU);
    }
}
