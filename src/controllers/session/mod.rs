mod fractal_session;
mod input_event;

pub use fractal_session::FractalSession;
pub use input_event::InputEvent;
