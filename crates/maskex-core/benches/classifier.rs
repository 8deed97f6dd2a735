//! Benchmarks for maskex-core mask generation
//!
//! Run with: cargo bench -p maskex-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use maskex_core::mask::generate_mask;
use maskex_core::models::{MaskDefinition, PickedColor};
use maskex_core::RgbaImage;

/// Generate synthetic test image data (hue/brightness gradient)
fn generate_test_image(width: u32, height: u32) -> RgbaImage {
    let pixel_count = (width * height) as usize;
    let mut data = Vec::with_capacity(pixel_count * 4);

    for i in 0..pixel_count {
        let x = (i % width as usize) as f32 / width as f32;
        let y = (i / width as usize) as f32 / height as f32;

        data.push(0.1 + 0.8 * x);
        data.push(0.1 + 0.8 * y);
        data.push(0.1 + 0.8 * (x + y) / 2.0);
        data.push(1.0);
    }

    RgbaImage::new(width, height, data).unwrap()
}

fn rule(color: [f32; 3], threshold: f32) -> PickedColor {
    PickedColor {
        color,
        threshold,
        h_coeff: 1.0,
        s_coeff: 0.1,
        v_coeff: 0.1,
    }
}

/// Benchmark a single-rule classification pass
fn bench_single_rule(c: &mut Criterion) {
    let mut group = c.benchmark_group("classifier");

    let mask = MaskDefinition {
        name: "bench".to_string(),
        picked_colors: vec![rule([0.8, 0.3, 0.2], 0.15)],
    };

    for size in [256, 512, 1024, 2048].iter() {
        let width = *size;
        let height = *size;
        let pixel_count = (width * height) as u64;

        group.throughput(Throughput::Elements(pixel_count));

        group.bench_with_input(
            BenchmarkId::new("single_rule", format!("{}x{}", width, height)),
            &(width, height),
            |b, &(w, h)| {
                let source = generate_test_image(w, h);
                b.iter(|| {
                    generate_mask(black_box(&source), None, black_box(&mask), false).unwrap()
                });
            },
        );
    }

    group.finish();
}

/// Benchmark multi-rule passes and buffer reuse
fn bench_multi_rule(c: &mut Criterion) {
    let mut group = c.benchmark_group("classifier_multi");

    let mask = MaskDefinition {
        name: "bench".to_string(),
        picked_colors: vec![
            rule([0.8, 0.3, 0.2], 0.15),
            rule([0.2, 0.7, 0.3], 0.1),
            rule([0.3, 0.3, 0.9], 0.2),
        ],
    };

    for size in [512, 1024].iter() {
        let width = *size;
        let height = *size;
        let pixel_count = (width * height) as u64;

        group.throughput(Throughput::Elements(pixel_count));

        group.bench_with_input(
            BenchmarkId::new("three_rules", format!("{}x{}", width, height)),
            &(width, height),
            |b, &(w, h)| {
                let source = generate_test_image(w, h);
                b.iter(|| {
                    generate_mask(black_box(&source), None, black_box(&mask), false).unwrap()
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("three_rules_reuse", format!("{}x{}", width, height)),
            &(width, height),
            |b, &(w, h)| {
                let source = generate_test_image(w, h);
                let mut buffer = RgbaImage::transparent(w, h).ok();
                b.iter(|| {
                    let out = generate_mask(
                        black_box(&source),
                        buffer.take(),
                        black_box(&mask),
                        true,
                    )
                    .unwrap();
                    buffer = out;
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_rule, bench_multi_rule);

criterion_main!(benches);
