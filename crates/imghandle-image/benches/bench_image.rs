use criterion::{criterion_group, criterion_main, Criterion};
use imghandle_image::{ops::cast_and_scale, Image, ImageSize};
use std::hint::black_box;

fn sample_image() -> Image<u8, 4> {
    Image::from_size_val(
        ImageSize {
            width: 1920,
            height: 1080,
        },
        127,
    )
    .unwrap()
}

fn bench_image(c: &mut Criterion) {
    let mut group = c.benchmark_group("Image");

    group.bench_function("cast_f32", |b| {
        b.iter_batched(
            sample_image,
            |image| black_box(image).cast::<f32>().unwrap(),
            criterion::BatchSize::LargeInput,
        )
    });

    group.bench_function("cast_and_scale_f32", |b| {
        let image = sample_image();
        let mut dst = Image::<f32, 4>::from_size_val(image.size(), 0.0).unwrap();
        b.iter(|| black_box(cast_and_scale(&image, &mut dst, 1.0f32 / 255.0f32)))
    });

    group.finish();
}

criterion_group!(benches, bench_image);
criterion_main!(benches);
