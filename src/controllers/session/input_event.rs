use crate::core::data::point::Point;

/// Discrete input delivered by the platform shell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Zoom in around a pixel already clamped to the canvas.
    PrimaryClick(Point),
    /// Back to the default view.
    SecondaryClick,
    /// Show or hide the zoom preview rectangle. Cosmetic only.
    ToggleOverlay,
}
