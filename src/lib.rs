//! Interactive Mandelbrot zoom explorer.
//!
//! The core renders a rectangular region of the complex plane into an RGBA
//! buffer, one parallel task per pixel column. [`FractalSession`] drives the
//! zoom/reset interaction on top of it, and [`RenderWorker`] moves rendering
//! off the UI thread. The `gui` feature adds a winit/pixels window.

mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use crate::adapters::pixel_format::{PreviewRect, blend_zoom_preview, copy_buffer_into_frame, zoom_preview_rect};
pub use crate::controllers::interactive::{FrameData, FramePresenterPort, RenderRequest, RenderWorker};
pub use crate::controllers::session::{FractalSession, InputEvent};
pub use crate::core::actions::cancellation::{CancelFlag, CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::generate_fractal::generate_fractal_columns::{
    generate_fractal_columns, generate_fractal_columns_cancelable,
};
pub use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer_cancelable;
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::actions::render_mandelbrot::{render, render_cancelable, render_into};
pub use crate::core::data::canvas_size::{CanvasSize, CanvasSizeError};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::iteration_budget::{IterationBudget, IterationBudgetError};
pub use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::region::{Region, RegionError};
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, escape_sample};
pub use crate::core::fractals::mandelbrot::colour_map::{GreenMagentaColourMap, HIGHLIGHT_THRESHOLD};
pub use crate::core::fractals::mandelbrot::escape_sample::EscapeSample;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::*;
pub use crate::core::fractals::mandelbrot::viewport::Viewport;
pub use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

#[cfg(feature = "gui")]
pub use crate::input::gui::{GuiError, run_gui};
