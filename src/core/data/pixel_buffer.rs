use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

fn canvas_to_buffer_size(canvas: CanvasSize) -> usize {
    canvas.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        canvas: CanvasSize,
    },
    BoundsMismatch {
        canvas_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                canvas_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "canvas size {} does not match buffer size {}",
                    canvas_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, canvas } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of canvas {}x{}",
                    pixel.x,
                    pixel.y,
                    canvas.width(),
                    canvas.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA8 pixels for one canvas, origin top-left.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    canvas: CanvasSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// Allocates a fully transparent buffer sized for `canvas`.
    #[must_use]
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            canvas,
            buffer: vec![0; canvas_to_buffer_size(canvas)],
        }
    }

    pub fn from_data(canvas: CanvasSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let canvas_size = canvas_to_buffer_size(canvas);

        if canvas_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                canvas_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { canvas, buffer })
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// Byte offset of `pixel`: `4 * (x + y * width)`.
    #[must_use]
    pub fn offset(&self, pixel: Point) -> usize {
        (pixel.x as usize + pixel.y as usize * self.canvas.width() as usize) * BYTES_PER_PIXEL
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        self.check_bounds(pixel)?;

        let index = self.offset(pixel);
        let [r, g, b, a] = [
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
            self.buffer[index + 3],
        ];

        Ok(Colour { r, g, b, a })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        self.check_bounds(pixel)?;

        let index = self.offset(pixel);
        self.buffer[index..index + BYTES_PER_PIXEL].copy_from_slice(&colour.to_bytes());

        Ok(())
    }

    /// Writes one full column, top to bottom.
    ///
    /// # Panics
    /// Panics if `x` is outside the canvas or `colours` is not exactly one
    /// canvas height long.
    pub(crate) fn write_column(&mut self, x: u32, colours: &[Colour]) {
        assert!(x < self.canvas.width(), "column {} outside canvas", x);
        assert_eq!(
            colours.len(),
            self.canvas.height() as usize,
            "column length does not match canvas height"
        );

        let stride = self.canvas.width() as usize * BYTES_PER_PIXEL;
        let start = x as usize * BYTES_PER_PIXEL;

        for (row, colour) in self.buffer[start..]
            .chunks_mut(stride)
            .zip(colours.iter())
        {
            row[..BYTES_PER_PIXEL].copy_from_slice(&colour.to_bytes());
        }
    }

    fn check_bounds(&self, pixel: Point) -> Result<(), PixelBufferError> {
        if !self.canvas.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                canvas: self.canvas,
            });
        }

        Ok(())
    }
}
