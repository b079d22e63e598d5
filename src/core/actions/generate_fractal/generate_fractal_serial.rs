use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Single-threaded reference generator, column-major like
/// [`generate_fractal_columns`](super::generate_fractal_columns::generate_fractal_columns).
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(algorithm: &Alg) -> Vec<Vec<Alg::Sample>> {
    let canvas = algorithm.canvas();

    (0..canvas.width())
        .map(|x| {
            (0..canvas.height())
                .map(|y| algorithm.compute(Point { x, y }))
                .collect()
        })
        .collect()
}
