use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::point::Point;

/// Per-pixel computation run by the fractal generators.
///
/// `compute` must depend only on `pixel` so pixels can be evaluated in any
/// order and on any thread.
pub trait FractalAlgorithm {
    type Sample;

    fn compute(&self, pixel: Point) -> Self::Sample;

    fn canvas(&self) -> CanvasSize;
}
