use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_budget::IterationBudget;
use crate::core::data::point::Point;
use crate::core::data::region::Region;
use crate::core::fractals::mandelbrot::escape_sample::EscapeSample;
use crate::core::fractals::mandelbrot::mandelbrot_config::ESCAPE_RADIUS;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

const ESCAPE_RADIUS_SQUARED: f64 = ESCAPE_RADIUS * ESCAPE_RADIUS;

#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    canvas: CanvasSize,
    region: Region,
    budget: IterationBudget,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Sample = EscapeSample;

    fn compute(&self, pixel: Point) -> Self::Sample {
        let c = pixel_to_complex_coords(pixel, self.canvas, self.region);

        escape_sample(c, self.budget)
    }

    fn canvas(&self) -> CanvasSize {
        self.canvas
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(canvas: CanvasSize, region: Region, budget: IterationBudget) -> Self {
        Self {
            canvas,
            region,
            budget,
        }
    }
}

/// Iterates `z ← z² + c` from zero for `floor(budget)` steps and reports the
/// step index at which `|z|` first exceeded the escape radius.
#[must_use]
pub fn escape_sample(c: Complex, budget: IterationBudget) -> EscapeSample {
    let mut z = Complex::ZERO;

    for iteration in 0..budget.iterations() {
        z = z.square() + c;

        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return EscapeSample::escaped_at(iteration, budget.value());
        }
    }

    EscapeSample::INSIDE
}
