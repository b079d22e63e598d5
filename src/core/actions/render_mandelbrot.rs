use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer_cancelable;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::iteration_budget::IterationBudget;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::region::Region;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::GreenMagentaColourMap;

/// Renders `region` at `budget` into a freshly allocated buffer.
#[must_use]
pub fn render(region: Region, budget: IterationBudget, canvas: CanvasSize) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(canvas);
    render_into(&mut buffer, region, budget);
    buffer
}

/// Renders `region` at `budget` into the caller's buffer, sized by the
/// buffer's own canvas. Returns once every column has been written.
pub fn render_into(buffer: &mut PixelBuffer, region: Region, budget: IterationBudget) {
    match render_cancelable(buffer, region, budget, &NeverCancel) {
        Ok(()) => {}
        Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
    }
}

/// Like [`render_into`], but abandons the pass when `cancel` fires.
///
/// Cancellation is checked at the start of each column; a cancelled pass
/// leaves `buffer` exactly as it was.
pub fn render_cancelable<C: CancelToken>(
    buffer: &mut PixelBuffer,
    region: Region,
    budget: IterationBudget,
    cancel: &C,
) -> Result<(), Cancelled> {
    let algorithm = MandelbrotAlgorithm::new(buffer.canvas(), region, budget);

    generate_pixel_buffer_cancelable(buffer, &algorithm, &GreenMagentaColourMap, cancel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::CancelFlag;
    use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
    use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use crate::core::fractals::mandelbrot::mandelbrot_config::{default_canvas, default_region};

    fn budget(value: f64) -> IterationBudget {
        IterationBudget::new(value).unwrap()
    }

    /// Pixel whose mapped coordinate is closest to `target` on the default view.
    fn closest_pixel(real: f64, imag: f64) -> Point {
        let canvas = default_canvas();
        let region = default_region();
        let x = ((real - region.re_start()) / region.width() * f64::from(canvas.width())).round();
        let y = ((imag - region.im_start()) / region.height() * f64::from(canvas.height())).round();

        canvas.clamp(x, y)
    }

    #[test]
    fn test_render_is_deterministic() {
        let region = Region::new(-0.75, -0.70, 0.1, 0.15).unwrap();
        let canvas = CanvasSize::new(96, 64).unwrap();

        let first = render(region, budget(120.0), canvas);
        let second = render(region, budget(120.0), canvas);

        assert_eq!(first.buffer(), second.buffer());
    }

    #[test]
    fn test_render_matches_serial_reference() {
        let canvas = CanvasSize::new(30, 20).unwrap();
        let region = default_region();
        let algorithm = MandelbrotAlgorithm::new(canvas, region, budget(52.0));

        let buffer = render(region, budget(52.0), canvas);

        for (x, column) in (0..).zip(generate_fractal_serial(&algorithm)) {
            for (y, sample) in (0..).zip(column) {
                assert_eq!(
                    buffer.pixel(Point { x, y }),
                    Ok(GreenMagentaColourMap.map(sample))
                );
            }
        }
    }

    #[test]
    fn test_every_pixel_is_opaque() {
        let buffer = render(default_region(), budget(52.0), CanvasSize::new(60, 40).unwrap());

        assert!(buffer.buffer().chunks_exact(4).all(|pixel| pixel[3] == 255));
    }

    #[test]
    fn test_default_view_end_to_end() {
        let canvas = default_canvas();
        let buffer = render(default_region(), budget(40.0), canvas);

        assert_eq!(buffer.buffer_size(), 600 * 400 * 4);

        // -1 + 0i sits inside the main cardioid
        let inside = buffer.pixel(closest_pixel(-1.0, 0.0)).unwrap();
        assert_eq!(inside, Colour::opaque(0, 0, 0));

        // 1 + 0i escapes almost immediately: small q, green branch
        let outside = buffer.pixel(closest_pixel(1.0, 0.0)).unwrap();
        assert_eq!(outside.r, 0);
        assert_eq!(outside.b, 0);
        assert!(outside.g > 0 && outside.g < 64, "unexpected green level {}", outside.g);
    }

    #[test]
    fn test_render_into_reuses_buffer() {
        let canvas = CanvasSize::new(40, 30).unwrap();
        let mut buffer = PixelBuffer::new(canvas);

        render_into(&mut buffer, default_region(), budget(52.0));

        assert_eq!(buffer, render(default_region(), budget(52.0), canvas));
    }

    #[test]
    fn test_cancelled_render_leaves_buffer_untouched() {
        let canvas = CanvasSize::new(40, 30).unwrap();
        let mut buffer = PixelBuffer::new(canvas);
        let flag = CancelFlag::new();
        flag.cancel();

        let result = render_cancelable(&mut buffer, default_region(), budget(52.0), &flag);

        assert_eq!(result, Err(Cancelled));
        assert_eq!(buffer, PixelBuffer::new(canvas));
    }
}
