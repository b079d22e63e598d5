use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::iteration_budget::IterationBudget;
use crate::core::data::point::Point;
use crate::core::data::region::Region;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use crate::core::fractals::mandelbrot::mandelbrot_config::{
    ITERATION_GROWTH_FACTOR, ZOOM_MAGNIFICATION, default_region, initial_budget,
};
use log::warn;

/// The region currently shown and the iteration depth used to render it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    region: Region,
    budget: IterationBudget,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            region: default_region(),
            budget: initial_budget(),
        }
    }
}

impl Viewport {
    #[must_use]
    pub fn new(region: Region, budget: IterationBudget) -> Self {
        Self { region, budget }
    }

    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    #[must_use]
    pub fn budget(&self) -> IterationBudget {
        self.budget
    }

    /// Re-centres on the clicked pixel and halves both spans.
    ///
    /// `click` must lie inside `canvas`; clamping is the caller's job.
    /// The spans are not clamped either: after enough zooms they collapse at
    /// `f64` precision and the region degenerates, which is logged.
    pub fn zoom_in_at(&mut self, click: Point, canvas: CanvasSize) -> Region {
        debug_assert!(
            canvas.contains_point(click),
            "click ({}, {}) outside canvas {}x{}",
            click.x,
            click.y,
            canvas.width(),
            canvas.height()
        );

        let centre = pixel_to_complex_coords(click, canvas, self.region);

        let zoomed = Region::around(
            centre,
            self.region.width().abs() / ZOOM_MAGNIFICATION,
            self.region.height().abs() / ZOOM_MAGNIFICATION,
        );

        if zoomed.is_degenerate() {
            warn!("zoom reached floating-point precision limit: {}", zoomed);
        }

        self.region = zoomed;
        zoomed
    }

    /// Back to the default region and the initial budget.
    pub fn reset(&mut self) -> (Region, IterationBudget) {
        *self = Self::default();

        (self.region, self.budget)
    }

    /// Deepens the budget by the growth factor; called once per render pass.
    ///
    /// Growth is exact until the product would pass `f64::MAX` (a few
    /// thousand passes); from then on the budget stays at `f64::MAX`.
    pub fn grow_budget(&mut self) -> IterationBudget {
        self.budget = self.budget.scaled(ITERATION_GROWTH_FACTOR);
        self.budget
    }
}
