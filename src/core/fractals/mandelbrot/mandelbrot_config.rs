//! Build-time settings for the Mandelbrot explorer.

use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_budget::IterationBudget;
use crate::core::data::region::Region;

pub const CANVAS_WIDTH: u32 = 600;
pub const CANVAS_HEIGHT: u32 = 400;

pub const DEFAULT_RE_START: f64 = -2.0;
pub const DEFAULT_RE_END: f64 = 1.0;
pub const DEFAULT_IM_START: f64 = -1.0;
pub const DEFAULT_IM_END: f64 = 1.0;

pub const INITIAL_ITERATION_BUDGET: f64 = 40.0;
pub const ITERATION_GROWTH_FACTOR: f64 = 1.3;

/// Each click shrinks both spans by this factor around the clicked point.
/// The new half extent is `span / ZOOM_MAGNIFICATION`, so the new span is
/// half the old one.
pub const ZOOM_MAGNIFICATION: f64 = 4.0;

pub const ESCAPE_RADIUS: f64 = 2.0;

pub const WINDOW_TITLE: &str = "Mandelbrot";

/// Translucent green drawn over the next zoom region when the preview is on.
pub const ZOOM_PREVIEW_COLOUR: Colour = Colour {
    r: 0,
    g: 255,
    b: 0,
    a: 50,
};

#[must_use]
pub fn default_region() -> Region {
    Region::new(DEFAULT_RE_START, DEFAULT_RE_END, DEFAULT_IM_START, DEFAULT_IM_END)
        .expect("default region is valid")
}

#[must_use]
pub fn initial_budget() -> IterationBudget {
    IterationBudget::new(INITIAL_ITERATION_BUDGET).expect("initial iteration budget is valid")
}

#[must_use]
pub fn default_canvas() -> CanvasSize {
    CanvasSize::new(CANVAS_WIDTH, CANVAS_HEIGHT).expect("default canvas size is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let region = default_region();

        assert_eq!(region.re_start(), -2.0);
        assert_eq!(region.re_end(), 1.0);
        assert_eq!(region.im_start(), -1.0);
        assert_eq!(region.im_end(), 1.0);
        assert_eq!(initial_budget().value(), 40.0);
        assert_eq!(default_canvas(), CanvasSize::new(600, 400).unwrap());
    }
}
