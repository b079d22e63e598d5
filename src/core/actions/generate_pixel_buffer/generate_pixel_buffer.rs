use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::generate_fractal::generate_fractal_columns::generate_fractal_columns_cancelable;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;

/// Colours each sample as soon as it is computed, so a column task hands
/// back finished pixels.
struct ColouredAlgorithm<'a, Alg, CMap> {
    algorithm: &'a Alg,
    mapper: &'a CMap,
}

impl<Alg, CMap> FractalAlgorithm for ColouredAlgorithm<'_, Alg, CMap>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Sample>,
{
    type Sample = Colour;

    fn compute(&self, pixel: Point) -> Self::Sample {
        self.mapper.map(self.algorithm.compute(pixel))
    }

    fn canvas(&self) -> CanvasSize {
        self.algorithm.canvas()
    }
}

/// Computes and colours every pixel of `algorithm` into `buffer`.
///
/// One rayon task per column both iterates and colours its pixels; the
/// finished columns are then copied into their own `x` slot of the
/// row-major buffer. A cancelled pass leaves `buffer` untouched.
///
/// # Panics
/// Panics if the algorithm's canvas is not the buffer's canvas.
pub fn generate_pixel_buffer_cancelable<Alg, CMap, C>(
    buffer: &mut PixelBuffer,
    algorithm: &Alg,
    mapper: &CMap,
    cancel: &C,
) -> Result<(), Cancelled>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Sample> + Sync,
    C: CancelToken,
{
    assert_eq!(
        algorithm.canvas(),
        buffer.canvas(),
        "algorithm canvas does not match buffer canvas"
    );

    let coloured = ColouredAlgorithm { algorithm, mapper };
    let columns = generate_fractal_columns_cancelable(&coloured, cancel)?;

    for (x, column) in (0..).zip(columns.iter()) {
        buffer.write_column(x, column);
    }

    Ok(())
}
