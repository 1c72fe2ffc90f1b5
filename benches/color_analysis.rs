use color_census::{classify, rgb_to_hsv, Histogram};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};

/// Synthetic image exercising every hue band plus the achromatic rules
fn gradient_image(width: u32, height: u32) -> RgbImage {
    let mut image = RgbImage::new(width, height);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        *pixel = Rgb([
            ((x * 255) / width.max(1)) as u8,
            ((y * 255) / height.max(1)) as u8,
            (((x + y) * 255) / (width + height).max(1)) as u8,
        ]);
    }
    image
}

fn benchmark_conversion(c: &mut Criterion) {
    c.bench_function("rgb_to_hsv", |b| {
        b.iter(|| rgb_to_hsv(black_box(137.0), black_box(42.0), black_box(201.0)))
    });

    c.bench_function("classify", |b| {
        let hsv = rgb_to_hsv(137.0, 42.0, 201.0);
        b.iter(|| classify(black_box(hsv)))
    });
}

fn benchmark_histogram(c: &mut Criterion) {
    let image = gradient_image(256, 256);
    c.bench_function("histogram_256x256", |b| {
        b.iter(|| Histogram::of(black_box(&image)))
    });
}

criterion_group!(benches, benchmark_conversion, benchmark_histogram);
criterion_main!(benches);
