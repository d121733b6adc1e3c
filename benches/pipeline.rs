//! Benchmarks for the imgascii pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use imgascii::{render, Palette, Pixel, Raster};

/// Diagonal gradient covering the full luminance range.
fn gradient(size: u32) -> Raster {
    let max = (2 * (size - 1)).max(1);
    let pixels = (0..size)
        .flat_map(|y| (0..size).map(move |x| (x, y)))
        .map(|(x, y)| {
            let v = ((x + y) * 255 / max) as u8;
            Pixel::rgb(v, v.wrapping_mul(3), 255 - v)
        })
        .collect();
    Raster::new(size, size, pixels).unwrap()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let palette = Palette::default();

    for size in [16u32, 128, 512] {
        let raster = gradient(size);
        group.bench_with_input(BenchmarkId::new("default_palette", size), &raster, |b, r| {
            b.iter(|| render(black_box(r), black_box(&palette)))
        });
    }

    let wide = Palette::new(" .'`^\",:;Il!i><~+_-?][}{1)(|/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$").unwrap();
    let raster = gradient(128);
    group.bench_function("wide_palette_128", |b| {
        b.iter(|| render(black_box(&raster), black_box(&wide)))
    });

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
