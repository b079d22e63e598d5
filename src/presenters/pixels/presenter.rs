use crate::adapters::pixel_format::{blend_zoom_preview, copy_buffer_into_frame};
use crate::controllers::interactive::{FrameData, FramePresenterPort};
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;
use pixels::{Pixels, SurfaceTexture, TextureError};
use std::sync::Arc;
use winit::dpi::PhysicalPosition;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

/// Draws session buffers into a `pixels` framebuffer the size of the canvas.
///
/// The surface follows the window; `pixels` scales the canvas to fit.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    adapter: Arc<PixelsAdapter>,
    canvas: CanvasSize,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        canvas: CanvasSize,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(canvas.width(), canvas.height(), surface_texture)?;

        Ok(Self {
            pixels,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            canvas,
        })
    }

    pub fn share_adapter(&self) -> Arc<dyn FramePresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn FramePresenterPort>
    }

    pub fn take_frame(&self) -> Option<FrameData> {
        self.adapter.take_frame()
    }

    /// Copies `buffer` into the framebuffer, tints the zoom preview around
    /// `preview_at` if given, and presents.
    pub fn render(&mut self, buffer: &PixelBuffer, preview_at: Option<Point>) -> Result<(), pixels::Error> {
        let frame = self.pixels.frame_mut();
        copy_buffer_into_frame(buffer, frame);

        if let Some(cursor) = preview_at {
            blend_zoom_preview(frame, self.canvas, cursor);
        }

        self.pixels.render()
    }

    /// Maps a window position to the canvas pixel under it. Positions over
    /// the letterbox clamp to the nearest edge pixel.
    #[must_use]
    pub fn cursor_to_pixel(&self, position: PhysicalPosition<f64>) -> Point {
        match self
            .pixels
            .window_pos_to_pixel((position.x as f32, position.y as f32))
        {
            Ok((x, y)) => Point { x: x as u32, y: y as u32 },
            Err((x, y)) => self.canvas.clamp(x as f64, y as f64),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        self.pixels.resize_surface(width, height)
    }
}
