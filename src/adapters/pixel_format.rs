//! Frame composition helpers for presentation adapters.

use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::mandelbrot_config::{ZOOM_MAGNIFICATION, ZOOM_PREVIEW_COLOUR};

/// Pixel bounds of the zoom preview, clipped to the canvas. `end` is exclusive.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PreviewRect {
    pub start: Point,
    pub end: Point,
}

/// The area a click at `cursor` would zoom into: half the canvas on each
/// axis, centred on the cursor.
#[must_use]
pub fn zoom_preview_rect(canvas: CanvasSize, cursor: Point) -> Option<PreviewRect> {
    let (start_x, end_x) = preview_span(cursor.x, canvas.width());
    let (start_y, end_y) = preview_span(cursor.y, canvas.height());

    if start_x >= end_x || start_y >= end_y {
        return None;
    }

    Some(PreviewRect {
        start: Point { x: start_x, y: start_y },
        end: Point { x: end_x, y: end_y },
    })
}

fn preview_span(cursor: u32, extent: u32) -> (u32, u32) {
    let half = (f64::from(extent) / ZOOM_MAGNIFICATION) as i64;
    let cursor = i64::from(cursor);
    let extent = i64::from(extent);

    let start = (cursor - half).clamp(0, extent);
    let end = (cursor + half).clamp(0, extent);

    (start as u32, end as u32)
}

/// Copies the rendered buffer into an RGBA frame of the same size.
///
/// # Panics
/// Panics if `frame` is not exactly the buffer's length.
pub fn copy_buffer_into_frame(buffer: &PixelBuffer, frame: &mut [u8]) {
    assert_eq!(
        frame.len(),
        buffer.buffer_size(),
        "frame length {} does not match buffer length {}",
        frame.len(),
        buffer.buffer_size()
    );

    frame.copy_from_slice(buffer.buffer());
}

/// Alpha-blends the zoom preview colour over `frame` around `cursor`.
///
/// Source-over with straight alpha; destination alpha is left as is.
///
/// # Panics
/// Panics if `frame` is not an RGBA frame for `canvas`.
pub fn blend_zoom_preview(frame: &mut [u8], canvas: CanvasSize, cursor: Point) {
    assert_eq!(
        frame.len(),
        canvas.pixel_count() * BYTES_PER_PIXEL,
        "frame length {} does not match canvas {}x{}",
        frame.len(),
        canvas.width(),
        canvas.height()
    );

    let Some(rect) = zoom_preview_rect(canvas, cursor) else {
        return;
    };

    let stride = canvas.width() as usize * BYTES_PER_PIXEL;
    let row_start = rect.start.x as usize * BYTES_PER_PIXEL;
    let row_end = rect.end.x as usize * BYTES_PER_PIXEL;

    for row in frame
        .chunks_exact_mut(stride)
        .skip(rect.start.y as usize)
        .take((rect.end.y - rect.start.y) as usize)
    {
        for pixel in row[row_start..row_end].chunks_exact_mut(BYTES_PER_PIXEL) {
            blend_pixel(pixel, ZOOM_PREVIEW_COLOUR);
        }
    }
}

fn blend_pixel(pixel: &mut [u8], colour: Colour) {
    let alpha = u32::from(colour.a);
    let blend = |dst: u8, src: u8| -> u8 {
        ((u32::from(src) * alpha + u32::from(dst) * (255 - alpha) + 127) / 255) as u8
    };

    pixel[0] = blend(pixel[0], colour.r);
    pixel[1] = blend(pixel[1], colour.g);
    pixel[2] = blend(pixel[2], colour.b);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(width: u32, height: u32) -> CanvasSize {
        CanvasSize::new(width, height).unwrap()
    }

    fn black_frame(canvas: CanvasSize) -> Vec<u8> {
        [0, 0, 0, 255].repeat(canvas.pixel_count())
    }

    #[test]
    fn test_preview_rect_centred() {
        let rect = zoom_preview_rect(canvas(600, 400), Point { x: 300, y: 200 });

        assert_eq!(
            rect,
            Some(PreviewRect {
                start: Point { x: 150, y: 100 },
                end: Point { x: 450, y: 300 },
            })
        );
    }

    #[test]
    fn test_preview_rect_clipped_at_corner() {
        let rect = zoom_preview_rect(canvas(600, 400), Point { x: 0, y: 399 });

        assert_eq!(
            rect,
            Some(PreviewRect {
                start: Point { x: 0, y: 299 },
                end: Point { x: 150, y: 400 },
            })
        );
    }

    #[test]
    fn test_preview_rect_too_small_canvas() {
        assert_eq!(zoom_preview_rect(canvas(3, 3), Point { x: 1, y: 1 }), None);
    }

    #[test]
    fn test_copy_buffer_into_frame() {
        let canvas = canvas(2, 1);
        let buffer = PixelBuffer::from_data(canvas, vec![1, 2, 3, 255, 4, 5, 6, 255]).unwrap();
        let mut frame = vec![0; 8];

        copy_buffer_into_frame(&buffer, &mut frame);

        assert_eq!(frame, vec![1, 2, 3, 255, 4, 5, 6, 255]);
    }

    #[test]
    #[should_panic(expected = "does not match buffer length")]
    fn test_copy_buffer_into_wrong_sized_frame_panics() {
        let buffer = PixelBuffer::new(canvas(2, 2));
        let mut frame = vec![0; 4];

        copy_buffer_into_frame(&buffer, &mut frame);
    }

    #[test]
    fn test_blend_tints_only_preview_area() {
        let canvas = canvas(8, 4);
        let mut frame = black_frame(canvas);

        // half extents 2x1 around (4, 2): x in 2..6, y in 1..3
        blend_zoom_preview(&mut frame, canvas, Point { x: 4, y: 2 });

        for y in 0..4u32 {
            for x in 0..8u32 {
                let index = ((y * 8 + x) * 4) as usize;
                let pixel = &frame[index..index + 4];
                if (2..6).contains(&x) && (1..3).contains(&y) {
                    // 255 * 50 / 255 = 50
                    assert_eq!(pixel, &[0, 50, 0, 255], "pixel ({}, {})", x, y);
                } else {
                    assert_eq!(pixel, &[0, 0, 0, 255], "pixel ({}, {})", x, y);
                }
            }
        }
    }

    #[test]
    fn test_blend_mixes_with_existing_colour() {
        let mut pixel = [255, 255, 255, 255];

        blend_pixel(&mut pixel, ZOOM_PREVIEW_COLOUR);

        // red/blue: 255 * 205 / 255 = 205, green stays 255
        assert_eq!(pixel, [205, 255, 205, 255]);
    }
}
