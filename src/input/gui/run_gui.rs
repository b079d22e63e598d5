use crate::core::fractals::mandelbrot::mandelbrot_config::{WINDOW_TITLE, default_canvas};
use crate::input::gui::app::GuiApp;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;
use crate::input::gui::pointer_input::{map_key, map_mouse_button};
use crate::presenters::pixels::presenter::PixelsPresenter;
use log::{error, info};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoopBuilder;
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowBuilder};

/// Opens the explorer window and runs until it is closed.
///
/// Left click zooms in at the cursor, right click resets the view and space
/// toggles the zoom preview.
pub fn run_gui() -> Result<(), GuiError> {
    let canvas = default_canvas();

    let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
    let event_loop_proxy = event_loop.create_proxy();

    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(canvas.width(), canvas.height()))
            .with_resizable(false)
            .build(&event_loop)?,
    ));

    let presenter = PixelsPresenter::new(window, canvas, event_loop_proxy)?;
    let mut app = GuiApp::new(presenter);
    let mut redraw_pending = true;

    info!("Window open at {}x{}", canvas.width(), canvas.height());
    app.submit_render();

    event_loop.run(|event, elwt| match event {
        Event::UserEvent(GuiEvent::Wake) => {
            if app.receive_frame() {
                redraw_pending = true;
            }
        }
        Event::WindowEvent { ref event, window_id } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => {
                app.shutdown();
                elwt.exit();
            }
            WindowEvent::RedrawRequested => {
                redraw_pending = false;

                if let Err(err) = app.render() {
                    error!("Render error: {}", err);
                    app.shutdown();
                    elwt.exit();
                }
            }
            WindowEvent::Resized(size) => {
                app.resize(size.width, size.height);
                redraw_pending = true;
            }
            WindowEvent::CursorMoved { position, .. } => {
                if app.cursor_moved(*position) {
                    redraw_pending = true;
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(input) = map_mouse_button(*button, *state, app.cursor()) {
                    redraw_pending |= app.handle_input(input);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    if let Some(input) = map_key(key_code, event.state, event.repeat) {
                        redraw_pending |= app.handle_input(input);
                    }
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            if redraw_pending {
                window.request_redraw();
            }
        }
        _ => {}
    })?;

    Ok(())
}
