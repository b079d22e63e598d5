use crate::controllers::interactive::RenderWorker;
use crate::controllers::session::{FractalSession, InputEvent};
use crate::core::data::point::Point;
use crate::presenters::pixels::presenter::PixelsPresenter;
use log::{debug, error};
use winit::dpi::PhysicalPosition;

/// UI-thread state: the session on display, the worker rendering for it
/// and the presenter drawing it.
pub struct GuiApp {
    session: FractalSession,
    worker: RenderWorker,
    presenter: PixelsPresenter,
    cursor: Point,
}

impl GuiApp {
    pub fn new(presenter: PixelsPresenter) -> Self {
        let worker = RenderWorker::new(presenter.share_adapter());

        Self {
            session: FractalSession::default(),
            worker,
            presenter,
            cursor: Point { x: 0, y: 0 },
        }
    }

    #[must_use]
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn submit_render(&mut self) {
        let request = self.session.begin_render();
        let generation = self.worker.submit(request);

        debug!("Submitted generation {} (budget {})", generation, request.budget);
    }

    /// Returns whether the window needs a redraw.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        if self.session.apply(event) {
            self.submit_render();
        }

        // Overlay toggles redraw immediately; zooms redraw the old frame
        // until the new one arrives.
        true
    }

    /// Tracks the pointer. Returns whether the preview needs redrawing.
    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> bool {
        self.cursor = self.presenter.cursor_to_pixel(position);
        self.session.overlay_visible()
    }

    /// Installs a finished frame if one is waiting. Returns whether it was
    /// newer than the one on display.
    pub fn receive_frame(&mut self) -> bool {
        match self.presenter.take_frame() {
            Some(frame) => self.session.accept_frame(frame),
            None => false,
        }
    }

    pub fn render(&mut self) -> Result<(), pixels::Error> {
        let preview_at = self.session.overlay_visible().then_some(self.cursor);
        self.presenter.render(self.session.buffer(), preview_at)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        if let Err(err) = self.presenter.resize(width, height) {
            error!("Failed to resize surface: {}", err);
        }
    }

    pub fn shutdown(&mut self) {
        self.worker.shutdown();
    }
}
