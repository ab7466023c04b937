use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use imghandle_image::{Image, Rect};
use imghandle_imgproc::{draw, filter};

fn bench_draw(c: &mut Criterion) {
    let sizes = [(512, 512), (1024, 1024)];
    let border_widths = [1.0f32, 8.0, 32.0];
    let color = [255u8, 255, 255, 255];

    // mask benchmarks
    {
        let mut group = c.benchmark_group("Masks");

        for (width, height) in sizes.iter() {
            let image_size = [*width, *height].into();
            let parameter_string = format!("{}x{}", width, height);

            group.bench_function(BenchmarkId::new("circle_mask", &parameter_string), |b| {
                b.iter(|| black_box(draw::circle_mask(image_size)))
            });

            group.bench_function(
                BenchmarkId::new("rounded_rect_mask", &parameter_string),
                |b| b.iter(|| black_box(draw::rounded_rect_mask(image_size, 24.0))),
            );

            let rect = Rect::new(width / 4, height / 4, width / 2, height / 2);
            let image = Image::<u8, 4>::from_size_val(image_size, 200).unwrap();
            group.bench_with_input(
                BenchmarkId::new("blur_region", &parameter_string),
                &image,
                |b, i| b.iter(|| black_box(filter::blur_region(i, 10.0, rect))),
            );
        }
        group.finish();
    }

    // border benchmarks
    {
        let mut group = c.benchmark_group("Borders");

        for (width, height) in sizes.iter() {
            let image_size = [*width, *height].into();
            let image = Image::<u8, 4>::from_size_val(image_size, 90).unwrap();

            for border_width in border_widths.iter() {
                let parameter_string = format!("{}x{}_b{}", width, height, border_width);

                group.bench_with_input(
                    BenchmarkId::new("with_border", &parameter_string),
                    &image,
                    |b, i| b.iter(|| black_box(draw::with_border(i, *border_width, color))),
                );

                group.bench_with_input(
                    BenchmarkId::new("circle_with_border", &parameter_string),
                    &image,
                    |b, i| b.iter(|| black_box(draw::circle_with_border(i, *border_width, color))),
                );
            }
        }
        group.finish();
    }
}

criterion_group!(benches, bench_draw);
criterion_main!(benches);
