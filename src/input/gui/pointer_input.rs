use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

use crate::controllers::session::InputEvent;
use crate::core::data::point::Point;

/// Left press zooms in at the cursor, right press resets. Releases and other
/// buttons are ignored.
#[must_use]
pub fn map_mouse_button(button: MouseButton, state: ElementState, cursor: Point) -> Option<InputEvent> {
    if state != ElementState::Pressed {
        return None;
    }

    match button {
        MouseButton::Left => Some(InputEvent::PrimaryClick(cursor)),
        MouseButton::Right => Some(InputEvent::SecondaryClick),
        _ => None,
    }
}

/// Space toggles the zoom preview, once per press.
#[must_use]
pub fn map_key(key_code: KeyCode, state: ElementState, repeat: bool) -> Option<InputEvent> {
    match key_code {
        KeyCode::Space if state == ElementState::Pressed && !repeat => Some(InputEvent::ToggleOverlay),
        _ => None,
    }
}
