// SPDX-License-Identifier: LGPL-3.0-or-later

//! Criterion benchmarks for the compressor engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use drc_dsp_units::dynamics::compressor::{Compressor, CompressorParams};
use drc_dsp_units::dynamics::gain::knee_gain;
use drc_dsp_units::dynamics::sidechain::BusNegotiator;

const BUF_SIZE: usize = 1024;

struct GrantAll;
impl BusNegotiator for GrantAll {
    fn request_add_input_bus(&mut self) -> bool {
        true
    }
    fn request_remove_input_bus(&mut self) -> bool {
        true
    }
}

/// Generate a deterministic white noise buffer using a simple LCG.
fn white_noise(len: usize) -> Vec<f32> {
    let mut state: u64 = 0xDEAD_BEEF_CAFE_BABE;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((state >> 33) as i32) as f32 / (i32::MAX as f32)
        })
        .collect()
}

fn bench_compressor(c: &mut Criterion) {
    let mut group = c.benchmark_group("dynamics_compressor");
    let input = white_noise(BUF_SIZE);
    let key = white_noise(BUF_SIZE);
    let mut output = vec![0.0f32; BUF_SIZE];
    let mut host = GrantAll;

    group.bench_function("hard_knee", |b| {
        let mut comp = Compressor::new();
        comp.prepare(48000.0, BUF_SIZE, 1);
        let mut params = CompressorParams {
            soft_knee: false,
            ..CompressorParams::default()
        };

        b.iter(|| {
            comp.process(
                black_box(&mut [&mut output[..]]),
                black_box(&[&input[..]]),
                None,
                &mut params,
                &mut host,
            );
        });
    });

    group.bench_function("soft_knee", |b| {
        let mut comp = Compressor::new();
        comp.prepare(48000.0, BUF_SIZE, 1);
        let mut params = CompressorParams {
            soft_knee: true,
            knee_width_db: 10.0,
            ..CompressorParams::default()
        };

        b.iter(|| {
            comp.process(
                black_box(&mut [&mut output[..]]),
                black_box(&[&input[..]]),
                None,
                &mut params,
                &mut host,
            );
        });
    });

    group.bench_function("sidechain", |b| {
        let mut comp = Compressor::new();
        comp.prepare(48000.0, BUF_SIZE, 1);
        let mut params = CompressorParams {
            side_chain: true,
            ..CompressorParams::default()
        };

        b.iter(|| {
            comp.process(
                black_box(&mut [&mut output[..]]),
                black_box(&[&input[..]]),
                Some(black_box(&[&key[..]])),
                &mut params,
                &mut host,
            );
        });
    });

    group.finish();
}

fn bench_knee_gain(c: &mut Criterion) {
    let mut group = c.benchmark_group("dynamics_knee_gain");
    let levels = white_noise(BUF_SIZE);

    group.bench_function("hard", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &x in levels.iter() {
                acc += knee_gain(black_box(x * 40.0 - 20.0), -12.0, 4.0, 0.0, false);
            }
            black_box(acc)
        });
    });

    group.bench_function("soft", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &x in levels.iter() {
                acc += knee_gain(black_box(x * 40.0 - 20.0), -12.0, 4.0, 10.0, true);
            }
            black_box(acc)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_compressor, bench_knee_gain);
criterion_main!(benches);
