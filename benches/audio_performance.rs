//! Audio Performance Benchmarks
//!
//! The oscillator runs once per sample, so a buffer must render before the
//! next one arrives:
//!
//! ```text
//! time_budget = buffer_size / sample_rate
//! ```
//!
//! | Sample Rate | Buffer 64  | Buffer 128 | Buffer 256 | Buffer 512 |
//! |-------------|------------|------------|------------|------------|
//! | 44.1 kHz    | 1.45 ms    | 2.90 ms    | 5.80 ms    | 11.61 ms   |
//! | 48 kHz      | 1.33 ms    | 2.67 ms    | 5.33 ms    | 10.67 ms   |
//! | 96 kHz      | 0.67 ms    | 1.33 ms    | 2.67 ms    | 5.33 ms    |
//! | 192 kHz     | 0.33 ms    | 0.67 ms    | 1.33 ms    | 2.67 ms    |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wavemaker::module::{AM_INPUT, FM_INPUT, PWM_INPUT, SAW_OUTPUT, SYNC_INPUT};
use wavemaker::prelude::*;

const SAMPLE_RATES: [f64; 4] = [44100.0, 48000.0, 96000.0, 192000.0];
const BUFFER_SIZES: [usize; 4] = [64, 128, 256, 512];

/// Every modulation jack patched
fn fully_modulated() -> ControlInputs {
    ControlInputs {
        pitch: 0.5,
        pitch_cv: 0.25,
        pulse_width: 0.4,
        pwm_depth: 0.5,
        pwm_cv: Some(3.0),
        fm_depth: 0.3,
        fm_cv: Some(-2.0),
        am_depth: 0.7,
        am_cv: Some(6.0),
        sync: Some(0.0),
    }
}

fn bench_core(c: &mut Criterion) {
    let mut group = c.benchmark_group("oscillator/process");

    for sample_rate in SAMPLE_RATES {
        let sr_name = format!("{}kHz", sample_rate as u32 / 1000);
        let sample_time = 1.0 / sample_rate;

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::new("unpatched", &sr_name),
            &sample_time,
            |b, &dt| {
                let mut osc = Oscillator::new().with_seed(1);
                let inputs = ControlInputs::default();
                b.iter(|| osc.process(black_box(&inputs), dt).sawtooth);
            },
        );
        group.bench_with_input(
            BenchmarkId::new("modulated", &sr_name),
            &sample_time,
            |b, &dt| {
                let mut osc = Oscillator::new().with_seed(1);
                let inputs = fully_modulated();
                b.iter(|| osc.process(black_box(&inputs), dt).sawtooth);
            },
        );
    }

    group.finish();
}

fn bench_buffers(c: &mut Criterion) {
    let mut group = c.benchmark_group("oscillator/buffer");
    let sample_time = 1.0 / 48000.0;

    for buffer_size in BUFFER_SIZES {
        group.throughput(Throughput::Elements(buffer_size as u64));
        group.bench_with_input(
            BenchmarkId::new("48kHz", buffer_size),
            &buffer_size,
            |b, &size| {
                let mut osc = Oscillator::new().with_seed(1);
                let inputs = fully_modulated();
                let mut buffer = vec![0.0; size];
                b.iter(|| {
                    for sample in buffer.iter_mut() {
                        *sample = osc.process(&inputs, sample_time).square;
                    }
                    black_box(&buffer);
                });
            },
        );
    }

    group.finish();
}

fn bench_module_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("module/tick");
    let sample_time = 1.0 / 48000.0;

    group.throughput(Throughput::Elements(1));
    group.bench_function("patched", |b| {
        let mut module = Wavemaker::with_seed(1);
        let mut inputs = PortValues::new();
        inputs.set(PWM_INPUT, 3.0);
        inputs.set(FM_INPUT, -2.0);
        inputs.set(AM_INPUT, 6.0);
        inputs.set(SYNC_INPUT, 0.0);
        let mut outputs = PortValues::new();

        b.iter(|| {
            module.tick(sample_time, black_box(&inputs), &mut outputs);
            outputs.get(SAW_OUTPUT).unwrap_or(0.0)
        });
    });

    group.finish();
}

criterion_group!(oscillator_benches, bench_core, bench_buffers);
criterion_group!(module_benches, bench_module_tick);
criterion_main!(oscillator_benches, module_benches);
