use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Computes every pixel, one rayon task per canvas column.
///
/// Returns column-major samples: `result[x][y]`. The parallel collect is the
/// join barrier, so nothing is returned until every column has finished.
/// For cancel-aware generation, use [`generate_fractal_columns_cancelable`].
pub fn generate_fractal_columns<Alg>(algorithm: &Alg) -> Vec<Vec<Alg::Sample>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Sample: Send,
{
    match generate_fractal_columns_cancelable(algorithm, &NeverCancel) {
        Ok(columns) => columns,
        Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
    }
}

/// Like [`generate_fractal_columns`], but polls `cancel` before starting each
/// column and abandons the whole pass once it reports cancellation.
pub fn generate_fractal_columns_cancelable<Alg, C>(
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Vec<Alg::Sample>>, Cancelled>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Sample: Send,
    C: CancelToken,
{
    let canvas = algorithm.canvas();
    let height = canvas.height();

    (0..canvas.width())
        .into_par_iter()
        .map(|x| {
            if cancel.is_cancelled() {
                return Err(Cancelled);
            }

            Ok((0..height)
                .map(|y| algorithm.compute(Point { x, y }))
                .collect::<Vec<_>>())
        })
        .collect()
}
