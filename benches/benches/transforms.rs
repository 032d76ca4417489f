//! Benchmarks for the watermarking transform pipeline
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use svdmark::{embed, BitGrid, Plane, Subband, WatermarkConfig, Wavelet};
use svdmark_modulation::update_block;
use svdmark_transform::{forward_dct, forward_wavelet, inverse_dct, inverse_wavelet};

fn textured_plane(width: usize, height: usize) -> Plane {
    Plane::from_fn(width, height, |r, c| ((r * 31 + c * 17) % 256) as f64)
}

fn bench_dct(c: &mut Criterion) {
    let mut group = c.benchmark_group("DCT Transform");

    for n in [8usize, 16] {
        let block = textured_plane(n, n);
        let coeffs = forward_dct(&block).unwrap();

        group.bench_with_input(BenchmarkId::new("forward", n), &block, |b, block| {
            b.iter(|| forward_dct(black_box(block)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("inverse", n), &coeffs, |b, coeffs| {
            b.iter(|| inverse_dct(black_box(coeffs)).unwrap());
        });
    }

    group.finish();
}

fn bench_wavelet(c: &mut Criterion) {
    let mut group = c.benchmark_group("Haar DWT");

    let image = textured_plane(512, 512);
    group.bench_function("forward_512", |b| {
        b.iter(|| forward_wavelet(black_box(&image), Wavelet::Haar).unwrap());
    });

    let bands = forward_wavelet(&image, Wavelet::Haar).unwrap();
    group.bench_function("inverse_512", |b| {
        b.iter(|| inverse_wavelet(black_box(&bands), Wavelet::Haar).unwrap());
    });

    group.finish();
}

fn bench_modulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("SVD Modulation");

    let coeffs = forward_dct(&textured_plane(8, 8)).unwrap();
    group.bench_function("update_block", |b| {
        b.iter(|| update_block(black_box(&coeffs), true, black_box(2.0)).unwrap());
    });

    group.finish();
}

fn bench_embed(c: &mut Criterion) {
    let mut group = c.benchmark_group("End to End");
    group.sample_size(20);

    let image = textured_plane(512, 512);
    let config = WatermarkConfig::new(8, Subband::Ll, 2.0);
    let bits = BitGrid::from_fn(32, 32, |r, c| (r + c) % 2 == 0);

    group.bench_function("embed_512", |b| {
        b.iter(|| embed(black_box(&image), black_box(&bits), &config).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_dct, bench_wavelet, bench_modulation, bench_embed);
criterion_main!(benches);
