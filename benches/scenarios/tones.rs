//! Benchmarks for the tone synth with overlapping pad tones.

use std::collections::VecDeque;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use genius::synth::{pad_voice, ToneMessage, ToneSynth};
use genius::Signal;

use crate::BLOCK_SIZES;

pub fn bench_tones(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/tones");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // === ALL FOUR PADS AT ONCE ===
        // Worst case: every voice sounding. Long tones so they stay active.
        let rx: VecDeque<ToneMessage> = Signal::ALL
            .iter()
            .map(|s| ToneMessage::Play {
                frequency: s.frequency(),
                length: 3_600.0,
            })
            .collect();
        let mut synth = ToneSynth::new(48_000.0, 4, pad_voice, rx);
        synth.render_block(&mut buffer);

        group.bench_with_input(BenchmarkId::new("four_voices", size), &size, |b, _| {
            b.iter(|| {
                synth.render_block(black_box(&mut buffer));
            })
        });

        // === SILENT POOL ===
        // Between cues: nothing sounding, only the mix loop runs
        let mut idle = ToneSynth::new(48_000.0, 4, pad_voice, VecDeque::new());
        group.bench_with_input(BenchmarkId::new("idle", size), &size, |b, _| {
            b.iter(|| {
                idle.render_block(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
