use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::region::Region;

/// Maps a pixel onto the region by linear interpolation on each axis.
///
/// Pixel `(0, 0)` lands on `(re_start, im_start)`; the far edges are reached
/// at `x == width` and `y == height`, one pixel past the canvas, so the last
/// column and row sit just short of `re_end` / `im_end`.
#[must_use]
pub fn pixel_to_complex_coords(pixel: Point, canvas: CanvasSize, region: Region) -> Complex {
    Complex {
        real: interpolate(pixel.x, canvas.width(), region.re_start(), region.re_end()),
        imag: interpolate(pixel.y, canvas.height(), region.im_start(), region.im_end()),
    }
}

fn interpolate(position: u32, extent: u32, start: f64, end: f64) -> f64 {
    start + (f64::from(position) / f64::from(extent)) * (end - start)
}
