//! Benchmarks for driving the round engine through whole games.

use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion};
use genius::engine::NullSink;
use genius::{EngineConfig, RoundEngine, TurnPhase};
use rand::{rngs::StdRng, SeedableRng};

/// Play `rounds` perfect rounds, stepping the clock timer to timer
fn play_game(rounds: usize) -> u32 {
    let mut engine = RoundEngine::with_rng(EngineConfig::default(), StdRng::seed_from_u64(7));
    let mut sink = NullSink;
    let mut now = Duration::ZERO;
    engine.start_game(now, &mut sink);

    for _ in 0..rounds {
        while engine.state().phase() != TurnPhase::AwaitingInput {
            match engine.next_deadline() {
                Some(due) => now = due,
                None => return engine.state().level(),
            }
            engine.advance(now, &mut sink);
        }
        let sequence: Vec<_> = engine.state().sequence().iter().collect();
        for signal in sequence {
            engine.accept_input(signal, now, &mut sink);
        }
    }
    engine.state().level()
}

pub fn bench_rounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/rounds");

    for rounds in [10usize, 50, 200] {
        group.bench_with_input(
            BenchmarkId::new("perfect_game", rounds),
            &rounds,
            |b, &rounds| b.iter(|| black_box(play_game(black_box(rounds)))),
        );
    }

    group.finish();
}
