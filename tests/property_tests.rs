//! Property-based tests for the round engine.
//!
//! These tests use proptest to check the game's invariants across many
//! seeds, timings and input streams.

mod common;

use std::time::Duration;

use common::Harness;
use genius::{
    engine::{Feedback, InputOutcome},
    game::Sequence,
    EngineConfig, Signal, TurnPhase,
};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_signal()(index in 0..4usize) -> Signal {
        Signal::from_index(index).unwrap()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sequence_length_tracks_round(seed in any::<u64>(), rounds in 1..12usize) {
        let mut game = Harness::new(seed);
        game.start();
        for round in 1..=rounds {
            game.run_until_input();
            prop_assert_eq!(game.sequence().len(), round);
            prop_assert_eq!(game.engine.state().level() as usize, round);
            game.play_round();
        }
    }

    #[test]
    fn progress_is_prefix_while_awaiting(
        seed in any::<u64>(),
        inputs in prop::collection::vec(arbitrary_signal(), 1..40),
    ) {
        let mut game = Harness::new(seed);
        game.start();

        for signal in inputs {
            if !game.engine.state().running() {
                break;
            }
            game.run_until_input();
            game.now += Duration::from_millis(100);
            game.press(signal);

            let state = game.engine.state();
            if state.phase() == TurnPhase::AwaitingInput {
                prop_assert!(state.sequence().is_prefix(state.progress()));
                prop_assert!(state.progress().len() < state.sequence().len());
            }
        }
    }

    #[test]
    fn start_is_idempotent_while_running(seed in any::<u64>(), rounds in 0..4usize, delay in 0..5_000u64) {
        let mut game = Harness::new(seed);
        game.start();
        for _ in 0..rounds {
            game.play_round();
        }

        let sequence = game.sequence();
        let level = game.engine.state().level();
        let phase = game.phase();
        let pending = game.engine.pending();

        game.now += Duration::from_millis(delay);
        let feedback = game.sink.len();
        prop_assert!(!game.start());
        prop_assert_eq!(game.sequence(), sequence);
        prop_assert_eq!(game.engine.state().level(), level);
        prop_assert_eq!(game.phase(), phase);
        prop_assert_eq!(game.engine.pending(), pending);
        prop_assert_eq!(game.sink.len(), feedback);
    }

    #[test]
    fn game_over_drops_all_input(seed in any::<u64>(), inputs in prop::collection::vec(arbitrary_signal(), 1..20)) {
        let mut game = Harness::new(seed);
        game.start();
        game.run_until_input();
        let wrong = common::other_than(game.sequence()[0]);
        game.press(wrong);
        prop_assert_eq!(game.phase(), TurnPhase::GameOver);

        let feedback = game.sink.len();
        for signal in inputs {
            prop_assert_eq!(game.press(signal), InputOutcome::Ignored);
        }
        prop_assert_eq!(game.sink.len(), feedback);
        prop_assert_eq!(game.phase(), TurnPhase::GameOver);
    }

    #[test]
    fn playback_cues_are_evenly_spaced(
        signals in prop::collection::vec(arbitrary_signal(), 0..30),
        start in 0..10_000u64,
        interval in 1..2_000u64,
    ) {
        let sequence = Sequence::from(signals.clone());
        let start = Duration::from_millis(start);
        let interval = Duration::from_millis(interval);
        let cues: Vec<_> = sequence.playback(start, interval).collect();

        prop_assert_eq!(cues.len(), signals.len());
        for (i, cue) in cues.iter().enumerate() {
            prop_assert_eq!(cue.index, i);
            prop_assert_eq!(cue.signal, signals[i]);
            prop_assert_eq!(cue.onset, start + interval * i as u32);
        }
    }

    #[test]
    fn engine_playback_matches_interval(seed in any::<u64>(), interval_ms in 50..1_500u64) {
        let config = EngineConfig::default().interval(Duration::from_millis(interval_ms));
        let mut game = Harness::with_config(seed, config);
        game.start();
        game.play_round();
        game.play_round();

        game.sink.clear();
        game.run_until_input();
        let onsets: Vec<Duration> = game
            .sink
            .iter()
            .filter_map(|f| match *f {
                Feedback::Highlight { at, .. } => Some(at),
                _ => None,
            })
            .collect();

        prop_assert_eq!(onsets.len(), 3);
        prop_assert!(onsets.windows(2).all(|w| w[1] - w[0] == config.interval));
        prop_assert_eq!(game.now, onsets[2] + config.interval);
    }
}
