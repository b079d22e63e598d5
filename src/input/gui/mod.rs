//! GUI shell for interactive zooming.
//!
//! Uses winit for the window and input, and pixels for the framebuffer.

mod app;
pub mod errors;
pub mod events;
mod pointer_input;
mod run_gui;

pub use errors::GuiError;
pub use events::GuiEvent;
pub use run_gui::run_gui;
