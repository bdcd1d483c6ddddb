//! Benchmarks for pixfmt bulk operations.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use pixfmt_core::{PixelConversionModifiers, Vector4};
use pixfmt_formats::{Bgr565, Bgra32, HalfVector4, Pixel, Rgba32, Rgba64};
use pixfmt_ops::composite::{AlphaCompositionMode, ColorBlendingMode, get_blender};
use pixfmt_ops::{DefaultOperations, PixelOperations, PixelOps, convert};

const SIZES: [usize; 3] = [1_000, 64_000, 1_000_000];

fn gradient<P: Pixel>(n: usize) -> Vec<P> {
    (0..n)
        .map(|i| {
            let t = i as f32 / n as f32;
            P::from_scaled_vector4(Vector4::new(t, 1.0 - t, t * 0.5, 0.25 + t * 0.75))
        })
        .collect()
}

/// SIMD strategy against the per-pixel default for 8-bit formats.
fn bench_to_vector4(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_vector4");

    for size in SIZES {
        let pixels = gradient::<Rgba32>(size);
        let mut vectors = vec![Vector4::ZERO; size];
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("rgba32_simd", size), &pixels, |b, p| {
            b.iter(|| {
                Rgba32::operations()
                    .to_vector4(black_box(p), &mut vectors, PixelConversionModifiers::SCALE)
                    .unwrap()
            })
        });

        let scalar = DefaultOperations::<Rgba32>::new();
        group.bench_with_input(BenchmarkId::new("rgba32_scalar", size), &pixels, |b, p| {
            b.iter(|| {
                scalar
                    .to_vector4(black_box(p), &mut vectors, PixelConversionModifiers::SCALE)
                    .unwrap()
            })
        });

        let halves = gradient::<HalfVector4>(size);
        group.bench_with_input(BenchmarkId::new("half_vector4", size), &halves, |b, p| {
            b.iter(|| {
                HalfVector4::operations()
                    .to_vector4(black_box(p), &mut vectors, PixelConversionModifiers::SCALE)
                    .unwrap()
            })
        });
    }

    group.finish();
}

/// Cross-format conversion through the chunked vector pipeline.
fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for size in SIZES {
        let source = gradient::<Rgba32>(size);
        group.throughput(Throughput::Elements(size as u64));

        let mut bgra = vec![Bgra32::default(); size];
        group.bench_with_input(BenchmarkId::new("rgba32_to_bgra32", size), &source, |b, s| {
            b.iter(|| convert(black_box(s), &mut bgra).unwrap())
        });

        let mut wide = vec![Rgba64::default(); size];
        group.bench_with_input(BenchmarkId::new("rgba32_to_rgba64", size), &source, |b, s| {
            b.iter(|| convert(black_box(s), &mut wide).unwrap())
        });

        let mut packed = vec![Bgr565::default(); size];
        group.bench_with_input(BenchmarkId::new("rgba32_to_bgr565", size), &source, |b, s| {
            b.iter(|| convert(black_box(s), &mut packed).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("parallel_rgba32_to_rgba64", size), &source, |b, s| {
            b.iter(|| pixfmt_ops::parallel::convert(black_box(s), &mut wide).unwrap())
        });
    }

    group.finish();
}

/// Blending with a few representative mode pairs.
fn bench_blend(c: &mut Criterion) {
    let mut group = c.benchmark_group("blend");

    let pairs = [
        (ColorBlendingMode::Normal, AlphaCompositionMode::SrcOver),
        (ColorBlendingMode::Multiply, AlphaCompositionMode::SrcAtop),
        (ColorBlendingMode::Overlay, AlphaCompositionMode::Xor),
    ];

    for size in [1_000usize, 64_000] {
        let background = gradient::<Rgba32>(size);
        let source = gradient::<Rgba32>(size).into_iter().rev().collect::<Vec<_>>();
        let mut destination = vec![Rgba32::default(); size];
        group.throughput(Throughput::Elements(size as u64));

        for (color, alpha) in pairs {
            let blender = get_blender(color, alpha);
            let id = BenchmarkId::new(format!("{color}_{alpha}"), size);
            group.bench_with_input(id, &source, |b, s| {
                b.iter(|| {
                    blender
                        .blend(&mut destination, &background, black_box(s), 0.75)
                        .unwrap()
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_to_vector4, bench_convert, bench_blend);
criterion_main!(benches);
