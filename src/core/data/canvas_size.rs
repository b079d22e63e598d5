use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CanvasSizeError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for CanvasSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "canvas size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for CanvasSizeError {}

/// Dimensions of the output surface in device pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CanvasSize {
    width: u32,
    height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasSizeError> {
        if width == 0 || height == 0 {
            return Err(CanvasSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Snaps a raw device position (fractional, possibly outside the window)
    /// onto the nearest pixel inside the canvas.
    #[must_use]
    pub fn clamp(&self, x: f64, y: f64) -> Point {
        Point {
            x: clamp_axis(x, self.width),
            y: clamp_axis(y, self.height),
        }
    }
}

fn clamp_axis(value: f64, extent: u32) -> u32 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }

    // `as` saturates for values beyond u32::MAX
    (value.floor() as u32).min(extent - 1)
}
