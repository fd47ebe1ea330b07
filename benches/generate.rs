//! Benchmarks for pixel generation and output.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use pixgen::{generate_with_rng, to_rgba_image, Colour, ColourPolicy};

fn palette() -> ColourPolicy {
    ColourPolicy::from_palette(vec![
        Colour::from_hex("#1a1a2e").unwrap(),
        Colour::from_hex("#16213e").unwrap(),
        Colour::from_hex("#0f3460").unwrap(),
        Colour::from_hex("#e94560").unwrap(),
    ])
    .unwrap()
}

// -- Generation benchmarks --

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let palette = palette();

    for (name, w, h) in [("64x64", 64, 64), ("512x512", 512, 512)] {
        group.bench_function(format!("all_random_{}", name), |b| {
            let mut rng = StdRng::seed_from_u64(0);
            b.iter(|| {
                generate_with_rng(black_box(w), black_box(h), &ColourPolicy::AllRandom, &mut rng)
                    .unwrap()
            })
        });

        group.bench_function(format!("palette_{}", name), |b| {
            let mut rng = StdRng::seed_from_u64(0);
            b.iter(|| generate_with_rng(black_box(w), black_box(h), &palette, &mut rng).unwrap())
        });
    }

    group.finish();
}

// -- Output benchmarks --

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");

    let mut rng = StdRng::seed_from_u64(0);
    let buffer = generate_with_rng(256, 256, &ColourPolicy::AllRandom, &mut rng).unwrap();

    group.bench_function("rgba_bytes_256", |b| b.iter(|| black_box(&buffer).to_rgba_bytes()));
    group.bench_function("rgba_image_256_x1", |b| {
        b.iter(|| to_rgba_image(black_box(&buffer), 1).unwrap())
    });
    group.bench_function("rgba_image_256_x4", |b| {
        b.iter(|| to_rgba_image(black_box(&buffer), 4).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_generate, bench_output);
criterion_main!(benches);
