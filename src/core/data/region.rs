use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RegionError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "region size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for RegionError {}

/// A rectangle of the complex plane mapped onto the canvas.
///
/// The real axis runs left to right across the canvas and the imaginary axis
/// top to bottom, so `re_start`/`im_start` sit at pixel `(0, 0)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Region {
    re_start: f64,
    re_end: f64,
    im_start: f64,
    im_end: f64,
}

impl Region {
    pub fn new(re_start: f64, re_end: f64, im_start: f64, im_end: f64) -> Result<Self, RegionError> {
        let region = Self::from_bounds(re_start, re_end, im_start, im_end);

        // Written negated so NaN spans are rejected too.
        if !(region.width() > 0.0) || !(region.height() > 0.0) {
            return Err(RegionError::InvalidSize {
                width: region.width(),
                height: region.height(),
            });
        }

        Ok(region)
    }

    /// Builds a region centred on `centre` with the given half extents.
    ///
    /// Unchecked: at the limit of `f64` precision the resulting spans can
    /// collapse to zero, see [`Region::is_degenerate`].
    pub(crate) fn around(centre: Complex, half_width: f64, half_height: f64) -> Self {
        Self::from_bounds(
            centre.real - half_width,
            centre.real + half_width,
            centre.imag - half_height,
            centre.imag + half_height,
        )
    }

    const fn from_bounds(re_start: f64, re_end: f64, im_start: f64, im_end: f64) -> Self {
        Self {
            re_start,
            re_end,
            im_start,
            im_end,
        }
    }

    #[must_use]
    pub fn re_start(&self) -> f64 {
        self.re_start
    }

    #[must_use]
    pub fn re_end(&self) -> f64 {
        self.re_end
    }

    #[must_use]
    pub fn im_start(&self) -> f64 {
        self.im_start
    }

    #[must_use]
    pub fn im_end(&self) -> f64 {
        self.im_end
    }

    /// Span of the real axis.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.re_end - self.re_start
    }

    /// Span of the imaginary axis.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.im_end - self.im_start
    }

    /// True once either span is no longer strictly positive.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.width() > 0.0) || !(self.height() > 0.0)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "re [{}, {}] im [{}, {}]",
            self.re_start, self.re_end, self.im_start, self.im_end
        )
    }
}
