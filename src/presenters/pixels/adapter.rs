use std::sync::Mutex;
use winit::event_loop::EventLoopProxy;

use crate::controllers::interactive::{FrameData, FramePresenterPort};
use crate::input::gui::events::GuiEvent;

/// Hands frames from the render worker to the UI thread.
///
/// Only the newest frame is kept; the event loop is woken to collect it.
pub struct PixelsAdapter {
    frame: Mutex<Option<FrameData>>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl FramePresenterPort for PixelsAdapter {
    fn present(&self, frame: FrameData) {
        *self.frame.lock().unwrap() = Some(frame);
        let _ = self.event_loop_proxy.send_event(GuiEvent::Wake);
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            frame: Mutex::new(None),
            event_loop_proxy,
        }
    }

    pub fn take_frame(&self) -> Option<FrameData> {
        self.frame.lock().unwrap().take()
    }
}
