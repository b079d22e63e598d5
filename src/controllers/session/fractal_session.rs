use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::session::input_event::InputEvent;
use crate::core::actions::render_mandelbrot::render_into;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::mandelbrot_config::default_canvas;
use crate::core::fractals::mandelbrot::viewport::Viewport;
use log::{debug, info};
use std::time::Instant;

/// Everything the shell's event loop owns between frames: the viewport, the
/// buffer on display and the overlay toggle.
///
/// Region and budget only change through `&mut self`, so a synchronous
/// [`render`](Self::render) can never overlap an input event. Shells that
/// render on another thread go through [`begin_render`](Self::begin_render)
/// and [`accept_frame`](Self::accept_frame) instead.
#[derive(Debug)]
pub struct FractalSession {
    viewport: Viewport,
    canvas: CanvasSize,
    buffer: PixelBuffer,
    overlay_visible: bool,
    passes: u64,
    displayed_generation: u64,
}

impl Default for FractalSession {
    fn default() -> Self {
        Self::new(default_canvas())
    }
}

impl FractalSession {
    /// A session on the default view. Nothing is rendered until the first
    /// [`render`](Self::render) or [`begin_render`](Self::begin_render).
    #[must_use]
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            viewport: Viewport::default(),
            canvas,
            buffer: PixelBuffer::new(canvas),
            overlay_visible: false,
            passes: 0,
            displayed_generation: 0,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    /// Render passes started so far.
    #[must_use]
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Updates the viewport for `event`. Returns whether the view changed
    /// and needs a new render pass.
    pub fn apply(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PrimaryClick(click) => {
                let region = self.viewport.zoom_in_at(click, self.canvas);
                debug!("Zoomed in at ({}, {}) to {}", click.x, click.y, region);
                true
            }
            InputEvent::SecondaryClick => {
                self.viewport.reset();
                debug!("View reset");
                true
            }
            InputEvent::ToggleOverlay => {
                self.overlay_visible = !self.overlay_visible;
                false
            }
        }
    }

    /// Starts a render pass: deepens the budget and snapshots the view.
    ///
    /// The budget grows on every pass, the first one and the one after a
    /// reset included, so the first image is drawn at 52 iterations.
    pub fn begin_render(&mut self) -> RenderRequest {
        let budget = self.viewport.grow_budget();
        self.passes += 1;

        RenderRequest {
            region: self.viewport.region(),
            budget,
            canvas: self.canvas,
        }
    }

    /// Renders the current view into the session's buffer, blocking until
    /// every column is done.
    pub fn render(&mut self) {
        let request = self.begin_render();

        info!(
            "Computing Mandelbrot (budget {}, {})",
            request.budget, request.region
        );

        let start = Instant::now();
        render_into(&mut self.buffer, request.region, request.budget);

        info!("Calculation time: {:?}", start.elapsed());
    }

    /// Applies `event` and re-renders synchronously when the view changed.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        let changed = self.apply(event);

        if changed {
            self.render();
        }

        changed
    }

    /// Installs a frame rendered elsewhere. Frames for another canvas or
    /// older than the one on display are ignored.
    pub fn accept_frame(&mut self, frame: FrameData) -> bool {
        if frame.generation <= self.displayed_generation
            || frame.pixel_buffer.canvas() != self.canvas
        {
            debug!("Ignoring stale frame {}", frame.generation);
            return false;
        }

        info!(
            "Displaying generation {} (budget {}, {}), render time {:?}",
            frame.generation, frame.request.budget, frame.request.region, frame.render_duration
        );

        self.displayed_generation = frame.generation;
        self.buffer = frame.pixel_buffer;
        true
    }
}
