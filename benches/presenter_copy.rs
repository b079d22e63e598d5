use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mandelbrot_zoom::{
    BYTES_PER_PIXEL, IterationBudget, Point, blend_zoom_preview, copy_buffer_into_frame, default_canvas,
    default_region, render,
};

fn bench_presenter_copy(c: &mut Criterion) {
    let canvas = default_canvas();
    let buffer = render(
        default_region(),
        IterationBudget::new(52.0).expect("valid budget"),
        canvas,
    );
    let mut frame = vec![0u8; canvas.pixel_count() * BYTES_PER_PIXEL];
    let cursor = Point { x: 300, y: 200 };

    c.bench_function("copy_buffer_into_frame", |b| {
        b.iter(|| copy_buffer_into_frame(black_box(&buffer), &mut frame))
    });

    c.bench_function("copy_and_blend_preview", |b| {
        b.iter(|| {
            copy_buffer_into_frame(black_box(&buffer), &mut frame);
            blend_zoom_preview(&mut frame, canvas, black_box(cursor));
        })
    });
}

criterion_group!(benches, bench_presenter_copy);
criterion_main!(benches);
