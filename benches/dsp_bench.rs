//! Benchmarks for the realtime synthesis path.
//!
//! Run with: cargo bench
//!
//! Reference timing at 48kHz sample rate:
//!   - 64 samples  = 1.33ms deadline
//!   - 128 samples = 2.67ms deadline
//!   - 256 samples = 5.33ms deadline
//!   - 512 samples = 10.67ms deadline

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use entrain_dsp::dsp::{SineOscillator, SmoothedParam};
use entrain_dsp::graph::{BinauralVoice, RenderCtx, StereoNode, VoiceParams};

/// Common buffer sizes used in audio applications.
const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

const SAMPLE_RATE: f32 = 48_000.0;

fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BLOCK_SIZES {
        let mut osc = SineOscillator::new();
        group.bench_with_input(BenchmarkId::new("sine", size), &size, |b, &size| {
            b.iter(|| {
                for _ in 0..size {
                    black_box(osc.next(black_box(400.0), SAMPLE_RATE));
                }
            })
        });
    }

    group.finish();
}

fn bench_smooth(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/smooth");

    for &size in BLOCK_SIZES {
        let mut param = SmoothedParam::new(0.0);
        group.bench_with_input(BenchmarkId::new("ramp", size), &size, |b, &size| {
            b.iter(|| {
                param.set_target(black_box(1.0), SAMPLE_RATE);
                for _ in 0..size {
                    black_box(param.next());
                }
            })
        });
    }

    group.finish();
}

fn bench_voice(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voice");
    let ctx = RenderCtx::new(SAMPLE_RATE);

    for &size in BLOCK_SIZES {
        let mut voice = BinauralVoice::new(VoiceParams {
            left_hz: 395.0,
            right_hz: 405.0,
            gain: 0.5,
        });
        let mut buffer = vec![0.0f32; size * 2];
        group.bench_with_input(BenchmarkId::new("stereo", size), &size, |b, _| {
            b.iter(|| {
                voice.render_block(black_box(&mut buffer), &ctx);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_oscillator, bench_smooth, bench_voice);
criterion_main!(benches);
