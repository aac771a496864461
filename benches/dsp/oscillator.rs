//! Benchmarks for sine generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use genius::dsp::oscillator::Oscillator;
use genius::graph::node::RenderCtx;
use genius::Signal;

use crate::BLOCK_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");
    let ctx = RenderCtx::from_freq(48_000.0, Signal::Blue.frequency(), 1.0);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Sine - uses sin() transcendental function
        let mut osc = Oscillator::sine();
        group.bench_with_input(BenchmarkId::new("sine", size), &size, |b, _| {
            b.iter(|| {
                osc.render(black_box(&mut buffer), black_box(&ctx));
            })
        });
    }

    group.finish();
}
